//! Column datatype formatting
//!
//! Built-in datatypes are a closed enum; anything beyond them goes through
//! the process-wide custom formatter registry. Registering the same name
//! twice replaces the earlier formatter. An unknown custom name is a
//! configuration error, caught both when a column selects it and when a
//! value is formatted.

use crate::error::{Result, TableError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use grappelli_core::Value;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Formatter function for a custom datatype
pub type CustomFormatter = dyn Fn(&Value) -> String + Send + Sync;

static CUSTOM_DATA_TYPES: Lazy<RwLock<HashMap<String, Arc<CustomFormatter>>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers a custom datatype formatter under the given name
///
/// The registry is process-wide; the last registration for a name wins.
pub fn add_custom_data_type<F>(name: impl Into<String>, formatter: F)
where
	F: Fn(&Value) -> String + Send + Sync + 'static,
{
	CUSTOM_DATA_TYPES
		.write()
		.insert(name.into(), Arc::new(formatter));
}

/// Returns whether a custom datatype is registered under the given name
pub fn has_custom_data_type(name: &str) -> bool {
	CUSTOM_DATA_TYPES.read().contains_key(name)
}

fn custom_data_type(name: &str) -> Option<Arc<CustomFormatter>> {
	CUSTOM_DATA_TYPES.read().get(name).cloned()
}

/// Output datatype of a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
	/// Pass the resolved value through as text
	Text,
	/// Calendar date, `%Y-%m-%d`
	Date,
	/// Date and time, `%Y-%m-%d %H:%M:%S`
	DateTime,
	/// Time of day, `%H:%M:%S`
	Time,
	/// Boolean checkmark/cross indicator
	Bool,
	/// A registered custom formatter, addressed by name
	Custom(String),
}

impl DataType {
	/// Formats a resolved cell value according to this datatype
	///
	/// Null input to the date/time/bool datatypes yields `"-"`; unparseable
	/// text passes through unchanged rather than raising.
	pub fn format(&self, value: &Value) -> Result<String> {
		match self {
			DataType::Text => Ok(value.to_display_string()),
			DataType::Date => Ok(Self::format_temporal(value, |dt| {
				dt.format("%Y-%m-%d").to_string()
			})),
			DataType::DateTime => Ok(Self::format_temporal(value, |dt| {
				dt.format("%Y-%m-%d %H:%M:%S").to_string()
			})),
			DataType::Time => Ok(Self::format_time(value)),
			DataType::Bool => Ok(match value {
				Value::Bool(true) => "✓".to_string(),
				Value::Bool(false) => "✗".to_string(),
				_ => "-".to_string(),
			}),
			DataType::Custom(name) => match custom_data_type(name) {
				Some(formatter) => Ok(formatter(value)),
				None => Err(TableError::CustomDataTypeNotFound(name.clone())),
			},
		}
	}

	fn format_temporal(value: &Value, render: impl Fn(&NaiveDateTime) -> String) -> String {
		if value.is_null() {
			return "-".to_string();
		}

		match Self::as_datetime(value) {
			Some(dt) => render(&dt),
			None => value.to_display_string(),
		}
	}

	fn format_time(value: &Value) -> String {
		if value.is_null() {
			return "-".to_string();
		}

		let time = match value {
			Value::Time(t) => Some(*t),
			Value::DateTime(dt) => Some(dt.time()),
			Value::String(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
				.ok()
				.or_else(|| Self::as_datetime(value).map(|dt| dt.time())),
			_ => None,
		};

		match time {
			Some(t) => t.format("%H:%M:%S").to_string(),
			None => value.to_display_string(),
		}
	}

	fn as_datetime(value: &Value) -> Option<NaiveDateTime> {
		match value {
			Value::DateTime(dt) => Some(*dt),
			Value::Date(d) => d.and_hms_opt(0, 0, 0),
			Value::String(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
				.ok()
				.or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
				.or_else(|| {
					NaiveDate::parse_from_str(s, "%Y-%m-%d")
						.ok()
						.and_then(|d| d.and_hms_opt(0, 0, 0))
				}),
			_ => None,
		}
	}
}

impl Default for DataType {
	fn default() -> Self {
		DataType::Text
	}
}
