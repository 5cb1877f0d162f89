//! Sorting directives

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[serde(rename = "ASC")]
	Ascending,
	/// Descending order
	#[serde(rename = "DESC")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// SQL keyword for this direction
	pub fn as_sql(&self) -> &'static str {
		match self {
			Self::Ascending => "ASC",
			Self::Descending => "DESC",
		}
	}

	/// Applies the direction to an ascending comparison result
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

impl Default for SortDirection {
	fn default() -> Self {
		Self::Ascending
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_toggle() {
		assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
		assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
	}

	#[test]
	fn test_apply_reverses_for_descending() {
		assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
		assert_eq!(
			SortDirection::Descending.apply(Ordering::Less),
			Ordering::Greater
		);
	}

	#[test]
	fn test_serde_uses_sql_keywords() {
		let json = serde_json::to_string(&SortDirection::Descending).unwrap();
		assert_eq!(json, "\"DESC\"");
		let back: SortDirection = serde_json::from_str("\"ASC\"").unwrap();
		assert_eq!(back, SortDirection::Ascending);
	}
}
