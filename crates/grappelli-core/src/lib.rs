//! Core primitives for grappelli data tables
//!
//! This crate provides the data-model layer shared by both table backends:
//!
//! - **Cell values**: the closed [`Value`] scalar model with display
//!   rendering and a total ordering for sorts
//! - **Row access**: the [`Record`]/[`Model`] traits and the dotted-path
//!   interpreter ([`resolve_path`]) used for value resolution through
//!   relations
//! - **Filtering**: the [`Filter`]/[`FilterCondition`] AST that table
//!   sources compose and query backends consume
//! - **Sorting**: [`SortDirection`] with query-parameter semantics
//! - **Pagination**: the length-aware [`Paginated`] result shape both
//!   backends produce
//!
//! Nothing in this crate executes queries or touches storage; it only
//! describes data and directives.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod filter;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod value;

// Re-exports for convenience
pub use filter::{Filter, FilterCondition, FilterOperator};
pub use pagination::Paginated;
pub use record::{Model, Record, resolve_path};
pub use sort::SortDirection;
pub use value::Value;
