//! Declarative data table components for grappelli
//!
//! This crate provides the DataTable component suite: declarative columns
//! with datatype formatting, per-row action buttons, named scope filters,
//! and a four-stage render pipeline (scope → search → sort → paginate)
//! applied uniformly to two backing sources:
//!
//! - [`QuerySource`]: composes filter/sort/paginate directives into a
//!   [`QueryPlan`] for an injected [`QueryBackend`]; queries are never
//!   executed here
//! - [`InMemorySource`]: an eagerly loaded row collection filtered, sorted
//!   and sliced locally
//!
//! Table UI state (sort, search, scope, page size) persists across renders
//! through the [`SessionStore`] collaborator contract.
//!
//! # Example
//!
//! ```rust,ignore
//! use grappelli_tables::{Columns, DataTable, TableDefinition};
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
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod button;
pub mod column;
pub mod datatype;
pub mod error;
pub mod scope;
pub mod source;
pub mod state;
pub mod table;

// Re-exports for convenience
pub use button::{Button, ConfirmRequest, Confirmation, RenderMode, RouteResolver};
pub use column::{Column, ColumnValues};
pub use datatype::{DataType, add_custom_data_type};
pub use error::{Result, TableError};
pub use scope::SimpleScope;
pub use source::memory::InMemorySource;
pub use source::query::{QueryBackend, QueryHandle, QueryPlan, QuerySource};
pub use source::TabularSource;
pub use state::{SessionStore, TableState};
pub use table::{Buttons, Columns, DataTable, Scopes, TableDefinition, TableView, WidgetVisibility};
