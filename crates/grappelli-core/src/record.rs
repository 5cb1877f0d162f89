//! Row access traits and the dotted-path interpreter
//!
//! Tables render rows of two shapes: typed records backed by a model type
//! and plain associative data (`serde_json::Value` objects). Both implement
//! [`Record`], which exposes three capabilities per path segment:
//!
//! - `field`: a stored column/property
//! - `accessor`: a zero-argument computed value
//! - `relation`: a nested to-one record
//!
//! [`resolve_path`] is the single interpreter that walks a dotted path
//! (`"latest_post.title"`) through those capabilities. Resolution gaps are
//! not errors: a missing segment, a null intermediate or a scalar hit
//! mid-path all resolve to [`Value::Null`].

use crate::value::Value;

/// Uniform access to one row's data
///
/// Implementations decide per segment which capability applies; the default
/// `accessor`/`relation` implementations make plain field-only rows trivial
/// to write.
pub trait Record: Send + Sync {
	/// Looks up a stored field by name
	fn field(&self, name: &str) -> Option<Value>;

	/// Looks up a computed zero-argument accessor by name
	fn accessor(&self, name: &str) -> Option<Value> {
		let _ = name;
		None
	}

	/// Looks up a to-one related record by name
	fn relation(&self, name: &str) -> Option<&dyn Record> {
		let _ = name;
		None
	}
}

/// Static metadata for typed record kinds
///
/// This is what a query-backed table knows about its rows beyond per-row
/// data: the entity it queries, the primary identity field used for default
/// ordering, which names are computed accessors (and therefore cannot be
/// addressed by the query layer), and which named scopes the backing source
/// exposes.
pub trait Model: Record {
	/// Name of the backing entity (table, collection, ...)
	fn entity_name() -> &'static str
	where
		Self: Sized;

	/// Field holding the primary identity, used for default ordering
	fn id_field() -> &'static str
	where
		Self: Sized,
	{
		"id"
	}

	/// Names of computed accessors exposed by this record kind
	///
	/// Columns referencing one of these get sort and search auto-disabled:
	/// a derived value has no addressable storage path.
	fn accessors() -> &'static [&'static str]
	where
		Self: Sized,
	{
		&[]
	}

	/// Named predicates the backing source recognizes for this record kind
	fn scope_names() -> &'static [&'static str]
	where
		Self: Sized,
	{
		&[]
	}
}

enum Cursor<'a> {
	Record(&'a dyn Record),
	Value(Value),
}

/// Resolves a dotted path against a record
///
/// Each segment is resolved as relation, then accessor, then field, in that
/// order. Anything unresolvable yields `Value::Null`.
///
/// # Example
///
/// ```
/// use grappelli_core::{Record, Value, resolve_path};
///
/// struct Row;
///
/// impl Record for Row {
/// 	fn field(&self, name: &str) -> Option<Value> {
/// 		(name == "email").then(|| Value::from("carla@example.org"))
/// 	}
/// }
///
/// assert_eq!(resolve_path(&Row, "email"), Value::from("carla@example.org"));
/// assert_eq!(resolve_path(&Row, "missing.path"), Value::Null);
/// ```
pub fn resolve_path(record: &dyn Record, path: &str) -> Value {
	let mut cursor = Cursor::Record(record);

	for segment in path.split('.') {
		cursor = match cursor {
			Cursor::Record(current) => {
				if let Some(related) = current.relation(segment) {
					Cursor::Record(related)
				} else if let Some(value) = current.accessor(segment) {
					Cursor::Value(value)
				} else if let Some(value) = current.field(segment) {
					Cursor::Value(value)
				} else {
					return Value::Null;
				}
			}
			// Scalar mid-path: the row has no matching value here
			Cursor::Value(_) => return Value::Null,
		};
	}

	match cursor {
		Cursor::Value(value) => value,
		Cursor::Record(_) => Value::Null,
	}
}

/// Associative rows: JSON object keys are fields, nested objects are
/// relations. Arrays and non-object roots resolve to nothing.
impl Record for serde_json::Value {
	fn field(&self, name: &str) -> Option<Value> {
		match self.get(name) {
			Some(serde_json::Value::Object(_)) | Some(serde_json::Value::Array(_)) | None => None,
			Some(scalar) => Some(Value::from(scalar)),
		}
	}

	fn relation(&self, name: &str) -> Option<&dyn Record> {
		match self.get(name) {
			Some(nested @ serde_json::Value::Object(_)) => Some(nested as &dyn Record),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_resolve_plain_field() {
		let row = json!({"name": "Django", "year": 1910});
		assert_eq!(resolve_path(&row, "name"), Value::from("Django"));
		assert_eq!(resolve_path(&row, "year"), Value::Int(1910));
	}

	#[test]
	fn test_resolve_nested_relation() {
		let row = json!({"band": {"name": "Quintette", "size": 5}});
		assert_eq!(resolve_path(&row, "band.name"), Value::from("Quintette"));
	}

	#[test]
	fn test_missing_segments_resolve_to_null() {
		let row = json!({"band": {"name": "Quintette"}});
		assert_eq!(resolve_path(&row, "band.city"), Value::Null);
		assert_eq!(resolve_path(&row, "label.name"), Value::Null);
		// Scalar mid-path
		assert_eq!(resolve_path(&row, "band.name.length"), Value::Null);
	}

	#[test]
	fn test_null_intermediate_resolves_to_null() {
		let row = json!({"band": null});
		assert_eq!(resolve_path(&row, "band.name"), Value::Null);
	}

	#[test]
	fn test_path_ending_on_relation_yields_null() {
		let row = json!({"band": {"name": "Quintette"}});
		assert_eq!(resolve_path(&row, "band"), Value::Null);
	}
}
