//! Error types for the data table components

use thiserror::Error;

/// Data table error type
///
/// Configuration errors (scope or custom datatype not found, scopes on an
/// in-memory table) indicate a bug in the table declaration and abort the
/// render. Data-resolution gaps never surface here; they resolve to
/// placeholder values instead.
#[derive(Debug, Error)]
pub enum TableError {
	/// The active scope names a predicate the record kind does not expose
	#[error("Scope '{scope}' not found for entity '{entity}'")]
	ScopeNotFound {
		/// Name of the missing scope
		scope: String,
		/// Entity the scope was looked up on
		entity: String,
	},

	/// A column references a custom datatype that was never registered
	#[error("Custom datatype '{0}' not found")]
	CustomDataTypeNotFound(String),

	/// Scopes were declared on a table backed by an in-memory collection
	#[error("Scopes are not supported for in-memory tables")]
	ScopesUnsupported,

	/// The routing collaborator could not build a URL
	#[error("Route '{route}' could not be resolved: {message}")]
	RouteNotFound {
		/// Route name that failed to resolve
		route: String,
		/// Resolver-provided detail
		message: String,
	},

	/// The query backend failed to execute a composed plan
	#[error("Data source error: {0}")]
	Backend(String),

	/// The session store failed to read or write table state
	#[error("Session store error: {0}")]
	Session(String),
}

/// Result type for data table operations
pub type Result<T> = std::result::Result<T, TableError>;
