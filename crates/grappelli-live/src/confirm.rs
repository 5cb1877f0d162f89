//! Confirmation modal coordinator
//!
//! One shared modal per page, addressed by signal name. A confirmation
//! button emits [`SHOW`] with a [`ConfirmRequest`] payload; the modal
//! applies the request and tells the client widget to show itself. Opening
//! while already open closes first, so the widget never sees two show
//! triggers without an intervening hide. Affirmation follows the target
//! URL (plain navigation, the view layer's job); cancellation just closes.

use crate::signal::SignalHub;
use grappelli_tables::{ConfirmRequest, Confirmation};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

/// Signal asking the modal to open with a [`ConfirmRequest`] payload
pub const SHOW: &str = "confirm:show";
/// Signal asking the modal to close
pub const CLOSE: &str = "confirm:close";
/// Signal telling the client widget to show itself
pub const CLIENT_SHOW: &str = "confirm:client-show";
/// Signal telling the client widget to hide itself
pub const CLIENT_CLOSE: &str = "confirm:client-close";

/// Translation key prefix for the default modal texts
pub const TRANSLATION_PREFIX: &str = "grappelli.datatables::confirm_modal.";

const LISTENER_UID: &str = "grappelli-confirm-modal";

/// The shared confirmation modal
pub struct ConfirmModal {
	/// Visibility state of the modal
	pub is_open: bool,
	/// URL followed after confirmation
	pub url: String,
	/// Modal title (text or translation key)
	pub title: String,
	/// Modal body text (text or translation key)
	pub text: String,
	/// Confirm button label (text or translation key)
	pub confirm_button: String,
	/// Cancel button label (text or translation key)
	pub cancel_button: String,
	/// CSS styling context
	pub context: String,
	hub: Arc<SignalHub>,
}

impl std::fmt::Debug for ConfirmModal {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ConfirmModal")
			.field("is_open", &self.is_open)
			.field("url", &self.url)
			.field("context", &self.context)
			.finish_non_exhaustive()
	}
}

impl ConfirmModal {
	/// Creates a closed modal bound to a signal hub
	pub fn new(hub: Arc<SignalHub>) -> Self {
		Self {
			is_open: false,
			url: String::new(),
			title: String::new(),
			text: String::new(),
			confirm_button: String::new(),
			cancel_button: String::new(),
			context: "danger".to_string(),
			hub,
		}
	}

	/// Opens the modal for a target URL
	///
	/// Unset options fall back to the default translation keys. An already
	/// open modal is closed first, emitting the client-close before the new
	/// client-show.
	pub fn open(&mut self, url: impl Into<String>, options: Confirmation) {
		if self.is_open {
			self.close();
		}

		self.is_open = true;
		self.url = url.into();
		self.title = options
			.title
			.unwrap_or_else(|| format!("{}title", TRANSLATION_PREFIX));
		self.text = options
			.text
			.unwrap_or_else(|| format!("{}text", TRANSLATION_PREFIX));
		self.confirm_button = options
			.confirm
			.unwrap_or_else(|| format!("{}button_confirm", TRANSLATION_PREFIX));
		self.cancel_button = options
			.cancel
			.unwrap_or_else(|| format!("{}button_cancel", TRANSLATION_PREFIX));

		if let Some(context) = options.context {
			self.context = context;
		}

		self.hub.emit(CLIENT_SHOW, json!({}));
	}

	/// Closes the modal
	pub fn close(&mut self) {
		self.is_open = false;

		self.hub.emit(CLIENT_CLOSE, json!({}));
	}

	/// Wires a shared modal to its hub listeners
	///
	/// Any component on the page can then open it by emitting [`SHOW`] with
	/// a serialized [`ConfirmRequest`]. Re-attaching replaces the previous
	/// listeners instead of stacking them.
	pub fn attach(modal: Arc<Mutex<ConfirmModal>>, hub: &SignalHub) {
		let on_show = Arc::clone(&modal);
		hub.connect_with_uid(SHOW, LISTENER_UID, move |payload| {
			match serde_json::from_value::<ConfirmRequest>(payload.clone()) {
				Ok(request) => on_show.lock().open(request.url, request.options),
				Err(error) => {
					tracing::warn!(%error, "ignoring malformed confirm request");
				}
			}
		});

		let on_close = modal;
		hub.connect_with_uid(CLOSE, LISTENER_UID, move |_| {
			on_close.lock().close();
		});
	}
}

/// Emits a confirmation request towards the page's modal
///
/// This is what a confirmation button calls instead of navigating.
pub fn request_confirmation(hub: &SignalHub, request: &ConfirmRequest) {
	let payload = serde_json::to_value(request)
		.expect("confirm request serialization cannot fail");
	hub.emit(SHOW, payload);
}
