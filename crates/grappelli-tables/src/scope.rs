//! Named scope filters
//!
//! A simple scope references a named predicate the backing data source
//! recognizes for its record kind. The scope itself carries no filtering
//! logic; applying it is the source's job, and naming a predicate the
//! record kind does not expose is a configuration error.

use crate::error::{Result, TableError};

/// A named, reusable filter predicate reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleScope {
	id: String,
	label: String,
	scope: String,
}

impl SimpleScope {
	/// Creates a new scope reference
	///
	/// The label doubles as the scope id.
	pub fn new(scope: impl Into<String>, label: impl Into<String>) -> Self {
		let label = label.into();
		Self {
			id: label.clone(),
			label,
			scope: scope.into(),
		}
	}

	/// Returns the scope identifier
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the scope label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the name of the referenced predicate
	pub fn scope_name(&self) -> &str {
		&self.scope
	}

	/// Validates this scope against the predicate names a record kind
	/// exposes
	pub fn ensure_known(&self, scope_names: &[&str], entity: &str) -> Result<()> {
		if scope_names.contains(&self.scope.as_str()) {
			Ok(())
		} else {
			Err(TableError::ScopeNotFound {
				scope: self.scope.clone(),
				entity: entity.to_string(),
			})
		}
	}
}
