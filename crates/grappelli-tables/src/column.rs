//! Declarative column definitions
//!
//! A column resolves one or more value specs against each row (dotted field
//! paths walked through relations, or closures over the row), formats the
//! result through its datatype and joins multiple specs with a single space.
//! Literal paths double as the default sort and search keys; closures have
//! no addressable storage path, so they disable both capabilities unless
//! keys are set explicitly.

use crate::datatype::{self, DataType};
use crate::error::{Result, TableError};
use grappelli_core::{Record, Value, resolve_path};
use std::fmt;
use std::sync::Arc;

/// Closure resolving a display value from a row
pub type ValueClosure = dyn Fn(&dyn Record) -> Value + Send + Sync;

/// One value spec of a column
#[derive(Clone)]
pub enum ColumnValue {
	/// A literal field path, possibly dotted through relations
	Path(String),
	/// A closure over the row
	Closure(Arc<ValueClosure>),
}

impl fmt::Debug for ColumnValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ColumnValue::Path(path) => f.debug_tuple("Path").field(path).finish(),
			ColumnValue::Closure(_) => f.debug_tuple("Closure").finish(),
		}
	}
}

/// Ordered value specs accepted by column constructors
#[derive(Debug, Clone)]
pub struct ColumnValues(Vec<ColumnValue>);

impl ColumnValues {
	/// Wraps a closure value spec
	pub fn closure<F>(f: F) -> Self
	where
		F: Fn(&dyn Record) -> Value + Send + Sync + 'static,
	{
		Self(vec![ColumnValue::Closure(Arc::new(f))])
	}

	/// Default label when the caller does not supply one: the first literal
	/// path, or `"closure"` for pure closure columns.
	pub fn default_label(&self) -> String {
		match self.0.first() {
			Some(ColumnValue::Path(path)) => path.clone(),
			_ => "closure".to_string(),
		}
	}

	fn literal_paths(&self) -> Vec<String> {
		self.0
			.iter()
			.filter_map(|value| match value {
				ColumnValue::Path(path) => Some(path.clone()),
				ColumnValue::Closure(_) => None,
			})
			.collect()
	}

	fn has_closure(&self) -> bool {
		self.0
			.iter()
			.any(|value| matches!(value, ColumnValue::Closure(_)))
	}
}

impl From<&str> for ColumnValues {
	fn from(path: &str) -> Self {
		Self(vec![ColumnValue::Path(path.to_string())])
	}
}

impl From<String> for ColumnValues {
	fn from(path: String) -> Self {
		Self(vec![ColumnValue::Path(path)])
	}
}

impl From<Vec<&str>> for ColumnValues {
	fn from(paths: Vec<&str>) -> Self {
		Self(
			paths
				.into_iter()
				.map(|p| ColumnValue::Path(p.to_string()))
				.collect(),
		)
	}
}

impl From<Vec<String>> for ColumnValues {
	fn from(paths: Vec<String>) -> Self {
		Self(paths.into_iter().map(ColumnValue::Path).collect())
	}
}

impl<const N: usize> From<[&str; N]> for ColumnValues {
	fn from(paths: [&str; N]) -> Self {
		Self(
			paths
				.into_iter()
				.map(|p| ColumnValue::Path(p.to_string()))
				.collect(),
		)
	}
}

/// A single table column
#[derive(Debug, Clone)]
pub struct Column {
	id: String,
	label: String,
	values: Vec<ColumnValue>,
	sort_keys: Option<Vec<String>>,
	search_keys: Option<Vec<String>>,
	html: bool,
	datatype: DataType,
	breakpoint: u32,
}

impl Column {
	/// Responsive breakpoint at 400px
	pub const BREAKPOINT_400: u32 = 400;
	/// Responsive breakpoint at 600px
	pub const BREAKPOINT_600: u32 = 600;
	/// Responsive breakpoint at 750px
	pub const BREAKPOINT_750: u32 = 750;
	/// Responsive breakpoint at 1000px
	pub const BREAKPOINT_1000: u32 = 1000;

	/// Creates a new column
	///
	/// The label doubles as the column id. Literal value paths seed the
	/// sort and search keys; closure specs leave them empty.
	pub fn new(values: impl Into<ColumnValues>, label: impl Into<String>) -> Self {
		let values = values.into();
		let label = label.into();
		let keys = values.literal_paths();
		let keys = (!values.has_closure()).then_some(keys);

		Self {
			id: label.clone(),
			label,
			sort_keys: keys.clone(),
			search_keys: keys,
			values: values.0,
			html: false,
			datatype: DataType::Text,
			breakpoint: 0,
		}
	}

	/// Creates a column with the label derived from the value specs
	pub fn auto_labeled(values: impl Into<ColumnValues>) -> Self {
		let values = values.into();
		let label = values.default_label();
		Self::new(values, label)
	}

	/// Sets the search keys for this column
	pub fn set_search_keys<I, S>(&mut self, keys: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.search_keys = Some(keys.into_iter().map(Into::into).collect());
		self
	}

	/// Sets the sort keys for this column
	pub fn set_sort_keys<I, S>(&mut self, keys: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.sort_keys = Some(keys.into_iter().map(Into::into).collect());
		self
	}

	/// Sets both the sort and the search keys for this column
	pub fn set_sort_and_search_keys<I, S>(&mut self, keys: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
		self.sort_keys = Some(keys.clone());
		self.search_keys = Some(keys);
		self
	}

	/// Disables sorting for this column
	pub fn disable_sort(&mut self) -> &mut Self {
		self.sort_keys = None;
		self
	}

	/// Disables searching for this column
	pub fn disable_search(&mut self) -> &mut Self {
		self.search_keys = None;
		self
	}

	/// Checks whether sort and search need to be auto-disabled
	///
	/// Any closure value spec, or a spec naming a computed accessor of the
	/// record kind, clears both key sets: neither the query layer nor
	/// generic comparison can address a derived value. Returns whether the
	/// auto-disable was applied.
	pub fn check_for_auto_disable_sort_and_search(&mut self, accessors: &[&str]) -> bool {
		let derived = self.values.iter().any(|value| match value {
			ColumnValue::Closure(_) => true,
			ColumnValue::Path(path) => accessors.contains(&path.as_str()),
		});

		if derived {
			self.sort_keys = None;
			self.search_keys = None;
		}

		derived
	}

	/// Sets the HTML flag
	pub fn enable_html(&mut self) -> &mut Self {
		self.html = true;
		self
	}

	/// Sets the responsive breakpoint for the column
	pub fn set_breakpoint(&mut self, breakpoint: u32) -> &mut Self {
		self.breakpoint = breakpoint;
		self
	}

	/// Sets this column to the datatype `date`
	pub fn set_data_type_date(&mut self) -> &mut Self {
		self.datatype = DataType::Date;
		self
	}

	/// Sets this column to the datatype `datetime`
	pub fn set_data_type_date_time(&mut self) -> &mut Self {
		self.datatype = DataType::DateTime;
		self
	}

	/// Sets this column to the datatype `time`
	pub fn set_data_type_time(&mut self) -> &mut Self {
		self.datatype = DataType::Time;
		self
	}

	/// Sets this column to the datatype `bool`
	///
	/// The indicator is markup, so this also enables HTML output.
	pub fn set_data_type_bool(&mut self) -> &mut Self {
		self.enable_html();
		self.datatype = DataType::Bool;
		self
	}

	/// Sets this column to a registered custom datatype
	///
	/// Fails when no formatter is registered under the name.
	pub fn set_data_type_custom(&mut self, name: impl Into<String>) -> Result<&mut Self> {
		let name = name.into();
		if !datatype::has_custom_data_type(&name) {
			return Err(TableError::CustomDataTypeNotFound(name));
		}

		self.datatype = DataType::Custom(name);
		Ok(self)
	}

	/// Returns the column identifier
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the column label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the sort keys
	pub fn sort_keys(&self) -> &[String] {
		self.sort_keys.as_deref().unwrap_or(&[])
	}

	/// Returns whether sorting is enabled for this column
	pub fn is_sort_enabled(&self) -> bool {
		self.sort_keys.is_some()
	}

	/// Returns the search keys
	pub fn search_keys(&self) -> &[String] {
		self.search_keys.as_deref().unwrap_or(&[])
	}

	/// Returns whether searching is enabled for this column
	pub fn is_search_enabled(&self) -> bool {
		self.search_keys.is_some()
	}

	/// Returns the HTML flag
	pub fn is_html_enabled(&self) -> bool {
		self.html
	}

	/// Returns the configured datatype
	pub fn datatype(&self) -> &DataType {
		&self.datatype
	}

	/// Returns additional CSS classes for this column's cells
	pub fn css_classes(&self) -> String {
		if self.breakpoint != 0 {
			format!("breakpoint-{}", self.breakpoint)
		} else {
			String::new()
		}
	}

	/// Resolves the display value for a row
	///
	/// Each value spec is resolved and formatted; multiple specs join with
	/// a single space. Resolution gaps render as the datatype's placeholder,
	/// never as an error.
	pub fn values(&self, record: &dyn Record) -> Result<String> {
		let mut results = Vec::with_capacity(self.values.len());

		for value in &self.values {
			let resolved = match value {
				ColumnValue::Path(path) => resolve_path(record, path),
				ColumnValue::Closure(f) => f(record),
			};
			results.push(self.datatype.format(&resolved)?);
		}

		Ok(results.join(" "))
	}
}
