//! Cell value model
//!
//! A closed scalar enum covering everything a table cell, filter operand or
//! sort key can resolve to. Missing data is represented as [`Value::Null`]
//! rather than an error; the display layer renders it as an empty string and
//! datatype formatters substitute their own placeholder.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single cell or filter operand value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Missing or null data
	Null,
	/// Boolean flag
	Bool(bool),
	/// Signed integer
	Int(i64),
	/// Floating point number
	Float(f64),
	/// Text
	String(String),
	/// Calendar date
	Date(NaiveDate),
	/// Date and time of day
	DateTime(NaiveDateTime),
	/// Time of day
	Time(NaiveTime),
}

impl Value {
	/// Returns `true` if this value is `Null`
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Renders the value as display text
	///
	/// `Null` renders as an empty string; datatype-specific placeholders are
	/// the formatter's concern, not this method's.
	pub fn to_display_string(&self) -> String {
		self.to_string()
	}

	/// Substring test used by the in-memory search stage
	///
	/// Matching is case-insensitive to mirror the `LIKE` semantics of the
	/// query layer, so both backends agree on what a search token hits.
	pub fn contains(&self, needle: &str) -> bool {
		if self.is_null() {
			return false;
		}

		self.to_string()
			.to_lowercase()
			.contains(&needle.to_lowercase())
	}

	/// Total ordering over cell values, used by the in-memory sort stage
	///
	/// `Null` sorts before everything else. Numbers compare across
	/// `Int`/`Float`; values of differing shapes fall back to comparing
	/// their rendered text.
	pub fn compare(&self, other: &Value) -> Ordering {
		match (self, other) {
			(Value::Null, Value::Null) => Ordering::Equal,
			(Value::Null, _) => Ordering::Less,
			(_, Value::Null) => Ordering::Greater,
			(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
			(Value::Int(a), Value::Int(b)) => a.cmp(b),
			(Value::Float(a), Value::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
			(Value::Int(a), Value::Float(b)) => {
				(*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
			}
			(Value::Float(a), Value::Int(b)) => {
				a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
			}
			(Value::Date(a), Value::Date(b)) => a.cmp(b),
			(Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
			(Value::Time(a), Value::Time(b)) => a.cmp(b),
			(Value::Date(a), Value::DateTime(b)) => a.and_time(NaiveTime::MIN).cmp(b),
			(Value::DateTime(a), Value::Date(b)) => a.cmp(&b.and_time(NaiveTime::MIN)),
			(Value::String(a), Value::String(b)) => a.cmp(b),
			(a, b) => a.to_string().cmp(&b.to_string()),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Int(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{}", x),
			Value::String(s) => f.write_str(s),
			Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
			Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
			Value::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v as i64)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Int(v as i64)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<NaiveDate> for Value {
	fn from(v: NaiveDate) -> Self {
		Value::Date(v)
	}
}

impl From<NaiveDateTime> for Value {
	fn from(v: NaiveDateTime) -> Self {
		Value::DateTime(v)
	}
}

impl From<NaiveTime> for Value {
	fn from(v: NaiveTime) -> Self {
		Value::Time(v)
	}
}

impl<T> From<Option<T>> for Value
where
	T: Into<Value>,
{
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => Value::Null,
		}
	}
}

impl From<&serde_json::Value> for Value {
	fn from(v: &serde_json::Value) -> Self {
		match v {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(*b),
			serde_json::Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Value::Int(i)
				} else {
					Value::Float(n.as_f64().unwrap_or(0.0))
				}
			}
			serde_json::Value::String(s) => Value::String(s.clone()),
			// Compound JSON shapes are relations, not cell values
			serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Null,
		}
	}
}
