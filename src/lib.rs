//! # Grappelli Datatables
//!
//! Reactive data table components for server-rendered Rust web UIs.
//!
//! A table is declared once (columns, scopes, buttons) and bound to either
//! a lazy query-builder source or an in-memory collection. Each render runs
//! the same four-stage pipeline (scope → search → sort → paginate) over the
//! source and hands a paginated view bundle to the host's view layer. Table
//! UI preferences persist per interaction session.
//!
//! The suite never executes queries, renders markup or stores sessions
//! itself; it composes directives for injected collaborators
//! ([`QueryBackend`](tables::QueryBackend),
//! [`SessionStore`](tables::SessionStore),
//! [`RouteResolver`](tables::RouteResolver)) and talks to sibling
//! components through named signals.
//!
//! ## Crates
//!
//! - [`core`]: cell values, row access, filter AST, sorting, pagination
//! - [`tables`]: columns/buttons/scopes, the two sources, the pipeline
//! - [`live`]: signal hub, confirmation modal, session backend, catalogs
//!   (feature `live`, enabled by default)
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use grappelli::prelude::*;
//!
//! struct UserTable;
//!
//! impl TableDefinition for UserTable {
//!     type Row = User;
//!
//!     fn tag(&self) -> &'static str {
//!         "user-table"
//!     }
//!
//!     fn columns(&self, columns: &mut Columns) {
//!         columns.add("first_name");
//!         columns.add("email");
//!         columns.add("admin").set_data_type_bool();
//!     }
//!
//!     fn scopes(&self, scopes: &mut Scopes) {
//!         scopes.add("admins");
//!     }
//! }
//!
//! let source = QuerySource::new(backend, QueryHandle::for_entity("users"));
//! let mut table = DataTable::mount(UserTable, source);
//! let view = table.render().await?;
//! ```

pub use grappelli_core as core;
pub use grappelli_tables as tables;

#[cfg(feature = "live")]
pub use grappelli_live as live;

/// Everything a table declaration typically needs
pub mod prelude {
	pub use grappelli_core::{
		Filter, FilterCondition, FilterOperator, Model, Paginated, Record, SortDirection, Value,
		resolve_path,
	};
	pub use grappelli_tables::{
		Button, Buttons, Column, Columns, Confirmation, DataTable, InMemorySource, QueryBackend,
		QueryHandle, QuerySource, RenderMode, Result, RouteResolver, Scopes, SessionStore,
		SimpleScope, TableDefinition, TableError, TableState, TableView, TabularSource,
	};

	#[cfg(feature = "live")]
	pub use grappelli_live::{ConfirmModal, InMemorySessionStore, MessageCatalog, SignalHub};
}
