//! Named synchronous signals
//!
//! Components on one page address each other by signal name with JSON
//! payloads, never by direct reference: the modal does not know which
//! button asked for it. Dispatch is synchronous and in-process; receivers
//! registered under the same uid replace each other, so re-mounted
//! components do not stack up stale listeners.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Receiver function for a named signal
pub type Receiver = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;

struct SignalReceiver {
	receiver: Receiver,
	dispatch_uid: Option<String>,
}

/// Dispatcher for named signals
#[derive(Default)]
pub struct SignalHub {
	receivers: RwLock<HashMap<String, Vec<SignalReceiver>>>,
}

impl SignalHub {
	/// Creates an empty hub
	pub fn new() -> Self {
		Self::default()
	}

	/// Connects a receiver to a signal name
	pub fn connect<F>(&self, signal: impl Into<String>, receiver: F)
	where
		F: Fn(&serde_json::Value) + Send + Sync + 'static,
	{
		self.receivers
			.write()
			.entry(signal.into())
			.or_default()
			.push(SignalReceiver {
				receiver: Arc::new(receiver),
				dispatch_uid: None,
			});
	}

	/// Connects a receiver under a dispatch uid
	///
	/// An existing receiver with the same uid on the same signal is
	/// replaced.
	pub fn connect_with_uid<F>(
		&self,
		signal: impl Into<String>,
		dispatch_uid: impl Into<String>,
		receiver: F,
	) where
		F: Fn(&serde_json::Value) + Send + Sync + 'static,
	{
		let dispatch_uid = dispatch_uid.into();
		let mut receivers = self.receivers.write();
		let entry = receivers.entry(signal.into()).or_default();
		entry.retain(|r| r.dispatch_uid.as_deref() != Some(dispatch_uid.as_str()));
		entry.push(SignalReceiver {
			receiver: Arc::new(receiver),
			dispatch_uid: Some(dispatch_uid),
		});
	}

	/// Disconnects receivers from a signal
	///
	/// With a uid only that receiver is removed; without one the signal's
	/// receiver list is cleared. Returns whether anything was removed.
	pub fn disconnect(&self, signal: &str, dispatch_uid: Option<&str>) -> bool {
		let mut receivers = self.receivers.write();
		let Some(entry) = receivers.get_mut(signal) else {
			return false;
		};

		let before = entry.len();
		match dispatch_uid {
			Some(uid) => entry.retain(|r| r.dispatch_uid.as_deref() != Some(uid)),
			None => entry.clear(),
		}

		entry.len() < before
	}

	/// Emits a signal to all connected receivers
	///
	/// Returns the number of receivers that ran.
	pub fn emit(&self, signal: &str, payload: serde_json::Value) -> usize {
		let receivers: Vec<Receiver> = {
			let guard = self.receivers.read();
			match guard.get(signal) {
				Some(entry) => entry.iter().map(|r| Arc::clone(&r.receiver)).collect(),
				None => Vec::new(),
			}
		};

		tracing::debug!(signal, receivers = receivers.len(), "emitting signal");

		for receiver in &receivers {
			receiver(&payload);
		}

		receivers.len()
	}
}

static DEFAULT_HUB: Lazy<Arc<SignalHub>> = Lazy::new(|| Arc::new(SignalHub::new()));

/// The process-wide default hub
///
/// Components on one page share this instance unless a test or host wires
/// its own.
pub fn hub() -> Arc<SignalHub> {
	Arc::clone(&DEFAULT_HUB)
}
