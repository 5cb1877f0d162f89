//! In-memory session backend
//!
//! Stores table UI state as opaque JSON under string keys. Suitable for
//! single-process hosts and tests; other backends implement the same
//! [`SessionStore`] contract against their own storage.

use async_trait::async_trait;
use grappelli_tables::{Result, SessionStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Session store keeping values in process memory
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
	values: RwLock<HashMap<String, serde_json::Value>>,
}

impl InMemorySessionStore {
	/// Creates an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns whether a key currently holds a value
	pub fn contains_key(&self, key: &str) -> bool {
		self.values.read().contains_key(key)
	}

	/// Removes all stored values
	pub fn clear(&self) {
		self.values.write().clear();
	}
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
	async fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
		Ok(self.values.read().get(key).cloned())
	}

	async fn store(&self, key: &str, value: serde_json::Value) -> Result<()> {
		self.values.write().insert(key.to_string(), value);
		Ok(())
	}
}
