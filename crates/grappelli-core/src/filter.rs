//! Filter directive AST
//!
//! Table sources compose these conditions and hand them to their backend:
//! the query backend translates them to SQL, the in-memory backend evaluates
//! them locally via [`FilterCondition::matches`]. The shapes mirror what the
//! query layer natively supports, so no backend has to interpret anything it
//! cannot express.

use crate::record::{Record, resolve_path};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparison operator of a single filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
	/// Equal
	Eq,
	/// Not equal
	Ne,
	/// Greater than
	Gt,
	/// Greater than or equal
	Gte,
	/// Less than
	Lt,
	/// Less than or equal
	Lte,
	/// Case-insensitive substring match
	Contains,
	/// Case-insensitive prefix match
	StartsWith,
	/// Case-insensitive suffix match
	EndsWith,
}

/// A single field comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
	/// Field path the comparison applies to (may be dotted)
	pub field: String,
	/// Comparison operator
	pub operator: FilterOperator,
	/// Right-hand operand
	pub value: Value,
}

impl Filter {
	/// Creates a new filter expression
	pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<Value>) -> Self {
		Self {
			field: field.into(),
			operator,
			value: value.into(),
		}
	}

	/// Shorthand for a case-insensitive substring filter
	pub fn contains(field: impl Into<String>, token: impl Into<String>) -> Self {
		Self::new(field, FilterOperator::Contains, Value::String(token.into()))
	}

	/// Evaluates this filter against a row
	pub fn matches(&self, record: &dyn Record) -> bool {
		let actual = resolve_path(record, &self.field);

		match self.operator {
			FilterOperator::Eq => actual == self.value,
			FilterOperator::Ne => actual != self.value,
			FilterOperator::Gt => Self::ordered(&actual, &self.value, Ordering::is_gt),
			FilterOperator::Gte => Self::ordered(&actual, &self.value, Ordering::is_ge),
			FilterOperator::Lt => Self::ordered(&actual, &self.value, Ordering::is_lt),
			FilterOperator::Lte => Self::ordered(&actual, &self.value, Ordering::is_le),
			FilterOperator::Contains => actual.contains(&self.value.to_display_string()),
			FilterOperator::StartsWith => Self::text(&actual)
				.starts_with(&self.value.to_display_string().to_lowercase()),
			FilterOperator::EndsWith => {
				Self::text(&actual).ends_with(&self.value.to_display_string().to_lowercase())
			}
		}
	}

	fn ordered(actual: &Value, expected: &Value, check: fn(Ordering) -> bool) -> bool {
		// Null never satisfies an ordering comparison
		if actual.is_null() || expected.is_null() {
			return false;
		}

		check(actual.compare(expected))
	}

	fn text(value: &Value) -> String {
		value.to_display_string().to_lowercase()
	}
}

/// A composable filter condition tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCondition {
	/// A single filter expression
	Single(Filter),
	/// All conditions must match (AND logic)
	And(Vec<FilterCondition>),
	/// Any condition must match (OR logic)
	Or(Vec<FilterCondition>),
	/// Negates the inner condition (NOT logic)
	Not(Box<FilterCondition>),
	/// Matches when any related record satisfies the inner condition
	///
	/// This is the existence condition dotted search keys lower into on the
	/// query backend (`EXISTS (SELECT .. FROM relation WHERE ..)`).
	RelatedAny {
		/// Relation to search within
		relation: String,
		/// Condition evaluated against the related records
		condition: Box<FilterCondition>,
	},
}

impl FilterCondition {
	/// Create a single filter condition
	pub fn single(filter: Filter) -> Self {
		Self::Single(filter)
	}

	/// Create an AND condition from multiple conditions
	pub fn and(conditions: Vec<FilterCondition>) -> Self {
		Self::And(conditions)
	}

	/// Create an OR condition from multiple conditions
	pub fn or(conditions: Vec<FilterCondition>) -> Self {
		Self::Or(conditions)
	}

	/// Create a NOT condition
	pub fn not(condition: FilterCondition) -> Self {
		Self::Not(Box::new(condition))
	}

	/// Create an any-related-record existence condition
	pub fn related_any(relation: impl Into<String>, condition: FilterCondition) -> Self {
		Self::RelatedAny {
			relation: relation.into(),
			condition: Box::new(condition),
		}
	}

	/// Evaluates this condition locally against a row
	///
	/// This is the in-memory backend's filter engine. `RelatedAny` descends
	/// into the named to-one relation; a missing relation never matches.
	pub fn matches(&self, record: &dyn Record) -> bool {
		match self {
			FilterCondition::Single(filter) => filter.matches(record),
			FilterCondition::And(conditions) => conditions.iter().all(|c| c.matches(record)),
			FilterCondition::Or(conditions) => conditions.iter().any(|c| c.matches(record)),
			FilterCondition::Not(condition) => !condition.matches(record),
			FilterCondition::RelatedAny {
				relation,
				condition,
			} => match record.relation(relation) {
				Some(related) => condition.matches(related),
				None => false,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_contains_matches_substring() {
		let row = json!({"email": "alice@example.org"});
		assert!(Filter::contains("email", "ALICE").matches(&row));
		assert!(!Filter::contains("email", "bob").matches(&row));
	}

	#[test]
	fn test_ordering_ignores_null() {
		let row = json!({"age": null});
		let filter = Filter::new("age", FilterOperator::Gt, 18);
		assert!(!filter.matches(&row));
	}

	#[test]
	fn test_or_condition() {
		let row = json!({"first_name": "Stephane", "last_name": "Grappelli"});
		let condition = FilterCondition::or(vec![
			FilterCondition::single(Filter::contains("first_name", "xyz")),
			FilterCondition::single(Filter::contains("last_name", "grap")),
		]);
		assert!(condition.matches(&row));
	}

	#[test]
	fn test_related_any_descends_relation() {
		let row = json!({"latest_post": {"title": "Minor Swing"}});
		let condition = FilterCondition::related_any(
			"latest_post",
			FilterCondition::single(Filter::contains("title", "swing")),
		);
		assert!(condition.matches(&row));

		let bare = json!({"id": 1});
		assert!(!condition.matches(&bare));
	}
}
