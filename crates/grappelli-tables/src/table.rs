//! The DataTable controller
//!
//! Owns the declared columns/scopes/buttons, the per-session UI state and
//! the render pipeline. Every render re-runs the declaration hooks, then
//! applies the fixed stage order (scope, search, sort, paginate) to the
//! backing source and hands the paginated result plus declaration metadata
//! to the view layer.

use crate::button::Button;
use crate::column::{Column, ColumnValues};
use crate::error::{Result, TableError};
use crate::scope::SimpleScope;
use crate::source::TabularSource;
use crate::state::{SessionStore, TableState, session_meta_data_key};
use grappelli_core::{Filter, FilterCondition, Paginated, Record, SortDirection, Value};
use std::sync::Arc;

/// Column registry built by the `columns()` declaration hook
///
/// Registration is id-keyed: re-declaring a column with the same id
/// replaces the earlier one.
pub struct Columns {
	accessors: &'static [&'static str],
	items: Vec<Column>,
}

impl Columns {
	fn new(accessors: &'static [&'static str]) -> Self {
		Self {
			accessors,
			items: Vec::new(),
		}
	}

	/// Adds a column with the label derived from its first value path
	pub fn add(&mut self, values: impl Into<ColumnValues>) -> &mut Column {
		let values = values.into();
		let label = values.default_label();
		self.add_with_label(values, label)
	}

	/// Adds a column with an explicit label
	pub fn add_with_label(
		&mut self,
		values: impl Into<ColumnValues>,
		label: impl Into<String>,
	) -> &mut Column {
		let mut column = Column::new(values, label);
		column.check_for_auto_disable_sort_and_search(self.accessors);
		self.insert(column)
	}

	/// Adds a closure-valued column
	pub fn add_closure<F>(&mut self, f: F, label: impl Into<String>) -> &mut Column
	where
		F: Fn(&dyn Record) -> Value + Send + Sync + 'static,
	{
		self.add_with_label(ColumnValues::closure(f), label)
	}

	/// Looks up a column by id
	pub fn get(&self, id: &str) -> Option<&Column> {
		self.items.iter().find(|column| column.id() == id)
	}

	/// Iterates the columns in declaration order
	pub fn iter(&self) -> impl Iterator<Item = &Column> {
		self.items.iter()
	}

	/// Number of registered columns
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns whether no columns are registered
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	fn insert(&mut self, column: Column) -> &mut Column {
		match self.items.iter().position(|c| c.id() == column.id()) {
			Some(index) => {
				self.items[index] = column;
				&mut self.items[index]
			}
			None => {
				self.items.push(column);
				self.items.last_mut().expect("just pushed")
			}
		}
	}
}

/// Scope registry built by the `scopes()` declaration hook
#[derive(Default)]
pub struct Scopes {
	items: Vec<SimpleScope>,
}

impl Scopes {
	/// Adds a scope labeled with its own name
	pub fn add(&mut self, scope: impl Into<String>) -> &mut SimpleScope {
		let scope = scope.into();
		let label = scope.clone();
		self.add_with_label(scope, label)
	}

	/// Adds a scope with an explicit label
	pub fn add_with_label(
		&mut self,
		scope: impl Into<String>,
		label: impl Into<String>,
	) -> &mut SimpleScope {
		let scope = SimpleScope::new(scope, label);
		match self.items.iter().position(|s| s.id() == scope.id()) {
			Some(index) => {
				self.items[index] = scope;
				&mut self.items[index]
			}
			None => {
				self.items.push(scope);
				self.items.last_mut().expect("just pushed")
			}
		}
	}

	/// Looks up a scope by id
	pub fn get(&self, id: &str) -> Option<&SimpleScope> {
		self.items.iter().find(|scope| scope.id() == id)
	}

	/// Returns whether no scopes are registered
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// Button registry built by the `buttons()` declaration hook
#[derive(Default)]
pub struct Buttons {
	items: Vec<Button>,
}

impl Buttons {
	/// Adds a button
	pub fn add<I, K, V>(
		&mut self,
		label: impl Into<String>,
		route: impl Into<String>,
		route_params: I,
	) -> &mut Button
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let params = route_params
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect();
		let button = Button::new(label, route, params);
		match self.items.iter().position(|b| b.id() == button.id()) {
			Some(index) => {
				self.items[index] = button;
				&mut self.items[index]
			}
			None => {
				self.items.push(button);
				self.items.last_mut().expect("just pushed")
			}
		}
	}

	/// Iterates the buttons in declaration order
	pub fn iter(&self) -> impl Iterator<Item = &Button> {
		self.items.iter()
	}

	/// Returns whether no buttons are registered
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// A table declaration
///
/// The host calls the hooks once per render; only `columns` is required.
pub trait TableDefinition: Send + Sync {
	/// Row type this table presents
	type Row: Record;

	/// Stable identity of this table type, used as the session key fragment
	fn tag(&self) -> &'static str;

	/// Declares the table's columns
	fn columns(&self, columns: &mut Columns);

	/// Declares the table's scopes
	fn scopes(&self, scopes: &mut Scopes) {
		let _ = scopes;
	}

	/// Declares the table's buttons
	fn buttons(&self, buttons: &mut Buttons) {
		let _ = buttons;
	}
}

/// Visibility flags for the table's UI widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetVisibility {
	/// Scope selector widget
	pub scopes: bool,
	/// Search input widget
	pub search: bool,
	/// Result counter widget
	pub counter: bool,
	/// Pagination widget
	pub pagination: bool,
	/// Page length selector widget
	pub page_length: bool,
}

impl Default for WidgetVisibility {
	fn default() -> Self {
		Self {
			scopes: true,
			search: true,
			counter: true,
			pagination: true,
			page_length: true,
		}
	}
}

/// View-data bundle of one render
#[derive(Debug)]
pub struct TableView<R> {
	/// Paginated result set
	pub results: Paginated<R>,
	/// Registered columns in declaration order
	pub columns: Vec<Column>,
	/// Registered scopes in declaration order
	pub simple_scopes: Vec<SimpleScope>,
	/// Registered buttons in declaration order
	pub buttons: Vec<Button>,
	/// Widget visibility flags
	pub show: WidgetVisibility,
}

/// The data table component
///
/// Binds a [`TableDefinition`] to a [`TabularSource`] and drives the
/// per-render transform pipeline over it.
pub struct DataTable<D, S>
where
	D: TableDefinition,
	S: TabularSource<Row = D::Row>,
{
	definition: D,
	source: S,
	state: TableState,
	page: u64,
	/// Widget visibility flags, tweakable by the host before rendering
	pub show: WidgetVisibility,
	session_store: Option<Arc<dyn SessionStore>>,
	session_key_suffix: Option<String>,
}

impl<D, S> DataTable<D, S>
where
	D: TableDefinition,
	S: TabularSource<Row = D::Row>,
{
	/// Mounts a table without session persistence
	pub fn mount(definition: D, source: S) -> Self {
		Self {
			definition,
			source,
			state: TableState::default(),
			page: 1,
			show: WidgetVisibility::default(),
			session_store: None,
			session_key_suffix: None,
		}
	}

	/// Mounts a table bound to a session store
	///
	/// Previously persisted state is restored immediately; the first render
	/// of a fresh session uses the defaults.
	pub async fn mount_with_session(
		definition: D,
		source: S,
		store: Arc<dyn SessionStore>,
		session_key_suffix: Option<String>,
	) -> Result<Self> {
		let mut table = Self::mount(definition, source);
		table.session_store = Some(store);
		table.session_key_suffix = session_key_suffix;
		table.read_session_meta_data().await?;
		Ok(table)
	}

	/// Returns the current UI state
	pub fn state(&self) -> &TableState {
		&self.state
	}

	/// Returns the current page, 1-indexed
	pub fn page(&self) -> u64 {
		self.page
	}

	/// Changes the sort column
	///
	/// Selecting the current sort column flips the direction; selecting a
	/// new one resets to ascending.
	pub fn change_sort(&mut self, key: impl Into<String>) {
		let key = key.into();
		if self.state.sort.as_deref() == Some(key.as_str()) {
			self.state.sort_direction = self.state.sort_direction.toggle();
		} else {
			self.state.sort = Some(key);
			self.state.sort_direction = SortDirection::Ascending;
		}
	}

	/// Changes the page size and resets to the first page
	pub fn set_per_page(&mut self, per_page: u64) {
		self.state.per_page = per_page.max(1);
		self.page = 1;
	}

	/// Changes the search text and resets to the first page
	pub fn set_search(&mut self, search: impl Into<String>) {
		self.state.search = search.into();
		self.page = 1;
	}

	/// Changes the active scope
	pub fn set_scope(&mut self, scope: Option<String>) {
		self.state.scope = scope.filter(|s| !s.is_empty());
	}

	/// Changes the current page
	pub fn set_page(&mut self, page: u64) {
		self.page = page.max(1);
	}

	/// Renders the table
	///
	/// Re-runs the declaration hooks, applies the pipeline stages in fixed
	/// order and persists the UI state before returning the view bundle.
	pub async fn render(&mut self) -> Result<TableView<D::Row>> {
		let columns = self.declare_columns();
		let scopes = self.declare_scopes()?;
		let buttons = self.declare_buttons();

		self.source.reset();
		self.apply_scope(&scopes)?;
		self.apply_search(&columns);
		self.apply_sort(&columns);

		let results = self
			.source
			.paginate(self.page, self.state.per_page)
			.await?;

		self.write_session_meta_data().await?;

		Ok(TableView {
			results,
			columns: columns.items,
			simple_scopes: scopes.items,
			buttons: buttons.items,
			show: self.show,
		})
	}

	fn declare_columns(&self) -> Columns {
		let mut columns = Columns::new(self.source.accessors());
		self.definition.columns(&mut columns);
		columns
	}

	fn declare_scopes(&self) -> Result<Scopes> {
		let mut scopes = Scopes::default();
		self.definition.scopes(&mut scopes);

		if !scopes.is_empty() && !self.source.supports_scopes() {
			return Err(TableError::ScopesUnsupported);
		}

		Ok(scopes)
	}

	fn declare_buttons(&self) -> Buttons {
		let mut buttons = Buttons::default();
		self.definition.buttons(&mut buttons);
		buttons
	}

	fn apply_scope(&mut self, scopes: &Scopes) -> Result<()> {
		let Some(active) = self.state.scope.clone() else {
			return Ok(());
		};

		let scope = scopes
			.get(&active)
			.ok_or_else(|| TableError::ScopeNotFound {
				scope: active.clone(),
				entity: self.definition.tag().to_string(),
			})?;

		tracing::debug!(scope = %active, "applying table scope");
		self.source.scope(scope)
	}

	fn apply_search(&mut self, columns: &Columns) {
		if let Some(condition) = build_search_condition(columns, &self.state.search) {
			self.source.search(condition);
		}
	}

	fn apply_sort(&mut self, columns: &Columns) {
		let direction = self.state.sort_direction;

		let Some(sort) = self.state.sort.clone() else {
			// Default ordering by primary identity
			let id_field = self.source.id_field().to_string();
			self.source.order_by(&id_field, direction);
			return;
		};

		match columns.get(&sort) {
			// Unknown sort key: fall open to treating it as a literal field
			None => self.source.order_by(&sort, direction),
			Some(column) => {
				for key in column.sort_keys() {
					// Cross-table ordering is not supported
					if !key.contains('.') {
						self.source.order_by(key, direction);
					}
				}
			}
		}
	}

	fn session_key(&self) -> String {
		session_meta_data_key(self.definition.tag(), self.session_key_suffix.as_deref())
	}

	async fn read_session_meta_data(&mut self) -> Result<bool> {
		let Some(store) = &self.session_store else {
			return Ok(false);
		};

		let Some(value) = store.load(&self.session_key()).await? else {
			return Ok(false);
		};

		match serde_json::from_value(value) {
			Ok(state) => {
				self.state = state;
				Ok(true)
			}
			Err(error) => {
				tracing::warn!(%error, "discarding unreadable table session state");
				Ok(false)
			}
		}
	}

	async fn write_session_meta_data(&self) -> Result<()> {
		let Some(store) = &self.session_store else {
			return Ok(());
		};

		let value = serde_json::to_value(&self.state)
			.map_err(|error| TableError::Session(error.to_string()))?;

		tracing::debug!(key = %self.session_key(), "persisting table state");
		store.store(&self.session_key(), value).await
	}
}

/// Builds the OR-combined search condition of one render
///
/// Any search-enabled column's any search key containing any whitespace
/// token is a match. Returns `None` when the search is empty or no column
/// is searchable, making the stage a no-op.
fn build_search_condition(columns: &Columns, search: &str) -> Option<FilterCondition> {
	let tokens: Vec<&str> = search.split_whitespace().collect();
	if tokens.is_empty() {
		return None;
	}

	let mut clauses = Vec::new();
	for column in columns.iter().filter(|c| c.is_search_enabled()) {
		for key in column.search_keys() {
			for token in &tokens {
				clauses.push(FilterCondition::single(Filter::contains(
					key.clone(),
					*token,
				)));
			}
		}
	}

	if clauses.is_empty() {
		None
	} else {
		Some(FilterCondition::or(clauses))
	}
}
