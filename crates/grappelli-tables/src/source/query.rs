//! Query-backed tabular source
//!
//! Composes scope/filter/sort/pagination directives into a [`QueryPlan`]
//! and hands it to an injected [`QueryBackend`]. No SQL is built or
//! executed here; the backend owns translation and execution. Dotted search
//! keys are lowered into related-record existence conditions at this
//! boundary, since that is what the query layer can express.

use crate::error::Result;
use crate::scope::SimpleScope;
use crate::source::TabularSource;
use async_trait::async_trait;
use grappelli_core::{Filter, FilterCondition, Model, Paginated, SortDirection, pagination};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Metadata snapshot needed to rebuild an equivalent query on a later render
///
/// A reactive host re-creates the component per interaction, so the source
/// cannot hold a live query between renders. This is what survives: the
/// entity, the primary keys captured at mount, the eager-loaded relations
/// and any default filters the mounting query had removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryHandle {
	/// Backing entity name
	pub entity: String,
	/// Primary keys of the mounted result set
	pub id_snapshot: Vec<i64>,
	/// Relations to eager-load when fetching
	pub eager_load: Vec<String>,
	/// Default filters removed from the mounting query (e.g. soft-delete)
	pub removed_default_filters: Vec<String>,
}

impl QueryHandle {
	/// Creates a handle for an entity with no snapshot restrictions
	pub fn for_entity(entity: impl Into<String>) -> Self {
		Self {
			entity: entity.into(),
			id_snapshot: Vec::new(),
			eager_load: Vec::new(),
			removed_default_filters: Vec::new(),
		}
	}

	/// Restricts the handle to a primary-key snapshot
	pub fn with_id_snapshot(mut self, ids: Vec<i64>) -> Self {
		self.id_snapshot = ids;
		self
	}

	/// Adds relations to eager-load
	pub fn with_eager_load<I, S>(mut self, relations: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.eager_load = relations.into_iter().map(Into::into).collect();
		self
	}

	/// Records default filters the mounting query had removed
	pub fn without_default_filters<I, S>(mut self, filters: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.removed_default_filters = filters.into_iter().map(Into::into).collect();
		self
	}
}

/// Composed directives for one page fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPlan {
	/// Named scopes to apply, in declaration order
	pub scopes: Vec<String>,
	/// Search condition, if any
	pub condition: Option<FilterCondition>,
	/// Ordering directives, applied in sequence
	pub order: Vec<(String, SortDirection)>,
	/// Zero-based row offset
	pub offset: u64,
	/// Page size
	pub limit: u64,
}

/// The injected query builder abstraction
///
/// Implementations translate a [`QueryHandle`] plus [`QueryPlan`] into
/// whatever their query layer speaks and execute it. `count` ignores the
/// plan's offset/limit.
#[async_trait]
pub trait QueryBackend<M: Model>: Send + Sync {
	/// Counts the rows matching the plan's scopes and condition
	async fn count(&self, handle: &QueryHandle, plan: &QueryPlan) -> Result<u64>;

	/// Fetches the rows selected by the plan
	async fn fetch(&self, handle: &QueryHandle, plan: &QueryPlan) -> Result<Vec<M>>;
}

/// Tabular source backed by a lazy query builder
pub struct QuerySource<M: Model> {
	backend: Arc<dyn QueryBackend<M>>,
	handle: QueryHandle,
	plan: QueryPlan,
}

impl<M: Model> QuerySource<M> {
	/// Creates a query source over a backend and remount metadata
	pub fn new(backend: Arc<dyn QueryBackend<M>>, handle: QueryHandle) -> Self {
		Self {
			backend,
			handle,
			plan: QueryPlan::default(),
		}
	}

	/// Returns the remount metadata
	pub fn handle(&self) -> &QueryHandle {
		&self.handle
	}

	/// Returns the directives composed so far
	pub fn plan(&self) -> &QueryPlan {
		&self.plan
	}
}

/// Lowers dotted `Contains` fields into related-record existence conditions
///
/// `posts.title contains x` becomes "any related `posts` record whose
/// `title` contains x", the query layer's `EXISTS` shape.
fn lower_relation_fields(condition: FilterCondition) -> FilterCondition {
	match condition {
		FilterCondition::Single(filter) => match filter.field.split_once('.') {
			Some((relation, rest)) => FilterCondition::related_any(
				relation,
				lower_relation_fields(FilterCondition::Single(Filter {
					field: rest.to_string(),
					operator: filter.operator,
					value: filter.value,
				})),
			),
			None => FilterCondition::Single(filter),
		},
		FilterCondition::And(inner) => {
			FilterCondition::And(inner.into_iter().map(lower_relation_fields).collect())
		}
		FilterCondition::Or(inner) => {
			FilterCondition::Or(inner.into_iter().map(lower_relation_fields).collect())
		}
		FilterCondition::Not(inner) => FilterCondition::not(lower_relation_fields(*inner)),
		related @ FilterCondition::RelatedAny { .. } => related,
	}
}

#[async_trait]
impl<M: Model> TabularSource for QuerySource<M> {
	type Row = M;

	fn accessors(&self) -> &'static [&'static str] {
		M::accessors()
	}

	fn id_field(&self) -> &str {
		M::id_field()
	}

	fn reset(&mut self) {
		self.plan = QueryPlan::default();
	}

	fn scope(&mut self, scope: &SimpleScope) -> Result<()> {
		scope.ensure_known(M::scope_names(), M::entity_name())?;
		self.plan.scopes.push(scope.scope_name().to_string());
		Ok(())
	}

	fn search(&mut self, condition: FilterCondition) {
		self.plan.condition = Some(lower_relation_fields(condition));
	}

	fn order_by(&mut self, field: &str, direction: SortDirection) {
		self.plan.order.push((field.to_string(), direction));
	}

	async fn paginate(&mut self, page: u64, per_page: u64) -> Result<Paginated<M>> {
		self.plan.offset = pagination::page_offset(page, per_page);
		self.plan.limit = per_page;

		tracing::debug!(
			entity = %self.handle.entity,
			offset = self.plan.offset,
			limit = self.plan.limit,
			"executing table query plan"
		);

		let total = self.backend.count(&self.handle, &self.plan).await?;
		let items = self.backend.fetch(&self.handle, &self.plan).await?;

		Ok(Paginated::new(items, total, page, per_page))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use grappelli_core::FilterOperator;

	#[test]
	fn test_lowering_splits_on_first_separator() {
		let condition =
			FilterCondition::single(Filter::contains("author.profile.name", "django"));

		let lowered = lower_relation_fields(condition);

		match lowered {
			FilterCondition::RelatedAny {
				relation,
				condition,
			} => {
				assert_eq!(relation, "author");
				match *condition {
					FilterCondition::RelatedAny {
						relation,
						condition,
					} => {
						assert_eq!(relation, "profile");
						match *condition {
							FilterCondition::Single(filter) => {
								assert_eq!(filter.field, "name");
								assert_eq!(filter.operator, FilterOperator::Contains);
							}
							other => panic!("unexpected inner condition: {:?}", other),
						}
					}
					other => panic!("unexpected nested condition: {:?}", other),
				}
			}
			other => panic!("expected RelatedAny, got {:?}", other),
		}
	}

	#[test]
	fn test_plain_fields_stay_single() {
		let condition = FilterCondition::single(Filter::contains("email", "x"));
		assert_eq!(lower_relation_fields(condition.clone()), condition);
	}

	#[test]
	fn test_handle_carries_remount_metadata() {
		let handle = QueryHandle::for_entity("users")
			.with_id_snapshot(vec![1, 2, 3])
			.with_eager_load(["latest_post"])
			.without_default_filters(["soft_delete"]);

		assert_eq!(handle.entity, "users");
		assert_eq!(handle.id_snapshot, [1, 2, 3]);
		assert_eq!(handle.eager_load, ["latest_post"]);
		assert_eq!(handle.removed_default_filters, ["soft_delete"]);
	}
}
