//! Table UI state and its session persistence contract
//!
//! Sort column and direction, search text, active scope and page size
//! survive across renders of the same interaction session. The current page
//! is deliberately transient: a fresh mount starts on page one.

use crate::error::Result;
use async_trait::async_trait;
use grappelli_core::SortDirection;
use serde::{Deserialize, Serialize};

/// Namespace prefix of all table session keys
pub const SESSION_KEY_META_DATA: &str = "grappelli.datatables.meta";

/// Builds the session key for a table
///
/// The key combines the namespace with the table's stable type tag; the
/// optional caller-supplied suffix disambiguates multiple instances of the
/// same table type on one page.
pub fn session_meta_data_key(tag: &str, suffix: Option<&str>) -> String {
	match suffix {
		Some(suffix) => format!("{}.{}-{}", SESSION_KEY_META_DATA, tag, suffix),
		None => format!("{}.{}", SESSION_KEY_META_DATA, tag),
	}
}

/// Persisted per-table UI state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableState {
	/// Page size
	#[serde(rename = "paginate")]
	pub per_page: u64,
	/// Sort column id, `None` for the default identity ordering
	pub sort: Option<String>,
	/// Shared direction for all sort keys
	#[serde(rename = "sortDirection")]
	pub sort_direction: SortDirection,
	/// Active scope id, `None` for no filtering
	#[serde(rename = "simpleScope")]
	pub scope: Option<String>,
	/// Raw search input, tokenized on whitespace by the search stage
	pub search: String,
}

impl Default for TableState {
	fn default() -> Self {
		Self {
			per_page: 10,
			sort: None,
			sort_direction: SortDirection::Ascending,
			scope: None,
			search: String::new(),
		}
	}
}

/// Session persistence collaborator contract
///
/// Values are opaque JSON for the store; last writer wins. Implementations
/// live with the host (see the in-memory store in `grappelli-live`).
#[async_trait]
pub trait SessionStore: Send + Sync {
	/// Loads the value stored under a key, if any
	async fn load(&self, key: &str) -> Result<Option<serde_json::Value>>;

	/// Stores a value under a key, replacing any previous value
	async fn store(&self, key: &str, value: serde_json::Value) -> Result<()>;
}
