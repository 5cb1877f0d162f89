//! In-memory tabular source
//!
//! Wraps a row collection snapshotted at mount time. Every pipeline
//! directive is honored locally: the search condition is evaluated per row
//! (dotted keys resolve nested fields directly), sorting is a stable
//! multi-key sort over resolved values, and pagination slices the filtered
//! sequence into the same [`Paginated`] shape the query source produces.
//!
//! Named scopes require a query layer to interpret them; declaring one on
//! this source is a configuration error.

use crate::error::{Result, TableError};
use crate::scope::SimpleScope;
use crate::source::TabularSource;
use async_trait::async_trait;
use grappelli_core::{FilterCondition, Paginated, Record, SortDirection, pagination, resolve_path};

/// Tabular source over an eagerly loaded row collection
pub struct InMemorySource<R> {
	rows: Vec<R>,
	condition: Option<FilterCondition>,
	order: Vec<(String, SortDirection)>,
}

impl<R> InMemorySource<R>
where
	R: Record + Clone,
{
	/// Creates a source over a row snapshot
	pub fn new(rows: Vec<R>) -> Self {
		Self {
			rows,
			condition: None,
			order: Vec::new(),
		}
	}

	/// Number of rows in the unfiltered snapshot
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns whether the snapshot holds no rows
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

#[async_trait]
impl<R> TabularSource for InMemorySource<R>
where
	R: Record + Clone + Send + Sync,
{
	type Row = R;

	fn supports_scopes(&self) -> bool {
		false
	}

	fn reset(&mut self) {
		self.condition = None;
		self.order.clear();
	}

	fn scope(&mut self, _scope: &SimpleScope) -> Result<()> {
		Err(TableError::ScopesUnsupported)
	}

	fn search(&mut self, condition: FilterCondition) {
		self.condition = Some(condition);
	}

	fn order_by(&mut self, field: &str, direction: SortDirection) {
		self.order.push((field.to_string(), direction));
	}

	async fn paginate(&mut self, page: u64, per_page: u64) -> Result<Paginated<R>> {
		let mut filtered: Vec<R> = match &self.condition {
			Some(condition) => self
				.rows
				.iter()
				.filter(|row| condition.matches(*row as &dyn Record))
				.cloned()
				.collect(),
			None => self.rows.clone(),
		};

		if !self.order.is_empty() {
			let order = self.order.clone();
			filtered.sort_by(|a, b| {
				for (field, direction) in &order {
					let left = resolve_path(a as &dyn Record, field);
					let right = resolve_path(b as &dyn Record, field);
					let ordering = direction.apply(left.compare(&right));
					if !ordering.is_eq() {
						return ordering;
					}
				}
				std::cmp::Ordering::Equal
			});
		}

		let total = filtered.len() as u64;
		let start = (pagination::page_offset(page, per_page) as usize).min(filtered.len());
		let end = (start + per_page as usize).min(filtered.len());
		let items = filtered[start..end].to_vec();

		tracing::debug!(total, page, per_page, "sliced in-memory table page");

		Ok(Paginated::new(items, total, page, per_page))
	}
}
