//! Tabular data sources
//!
//! The render pipeline is written once against [`TabularSource`]; the two
//! implementations decide how each directive is honored. The query-backed
//! source composes a plan for an injected backend, the in-memory source
//! evaluates everything locally. Stage ordering and tie-break policy live
//! in the pipeline, not here.

use crate::error::Result;
use crate::scope::SimpleScope;
use async_trait::async_trait;
use grappelli_core::{FilterCondition, Paginated, Record, SortDirection};

pub mod memory;
pub mod query;

/// Abstraction over the two backing data source kinds
#[async_trait]
pub trait TabularSource: Send {
	/// Row type this source yields
	type Row: Record;

	/// Computed-accessor names of the row kind, for the column auto-disable
	/// heuristic
	fn accessors(&self) -> &'static [&'static str] {
		&[]
	}

	/// Primary identity field used for default ordering
	fn id_field(&self) -> &str {
		"id"
	}

	/// Whether this source kind can apply named scopes
	fn supports_scopes(&self) -> bool {
		true
	}

	/// Clears directives composed by an earlier render
	///
	/// The host drives the same component instance through many renders;
	/// each render starts from the mounted source state, not from the
	/// previous render's directives.
	fn reset(&mut self);

	/// Applies a named scope predicate
	fn scope(&mut self, scope: &SimpleScope) -> Result<()>;

	/// Applies a search condition
	fn search(&mut self, condition: FilterCondition);

	/// Appends an ordering directive
	fn order_by(&mut self, field: &str, direction: SortDirection);

	/// Executes the composed directives and returns one page of rows
	async fn paginate(&mut self, page: u64, per_page: u64) -> Result<Paginated<Self::Row>>;
}
