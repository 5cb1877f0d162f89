//! Tests for the in-memory table pipeline

use grappelli_tables::{
	Buttons, Columns, DataTable, InMemorySource, Scopes, TableDefinition, TableError,
};
use rstest::*;
use serde_json::json;

struct CityTable;

impl TableDefinition for CityTable {
	type Row = serde_json::Value;

	fn tag(&self) -> &'static str {
		"city-table"
	}

	fn columns(&self, columns: &mut Columns) {
		columns.add("name");
		columns.add("population");
		columns
			.add_with_label("country.name", "country")
			.set_search_keys(["country.name"]);
	}

	fn buttons(&self, buttons: &mut Buttons) {
		buttons.add("details-button", "cities.show", [("id", ":id")]);
	}
}

fn cities() -> Vec<serde_json::Value> {
	vec![
		json!({"id": 1, "name": "Paris", "population": 2_100_000, "country": {"name": "France"}}),
		json!({"id": 2, "name": "Liberchies", "population": 900, "country": {"name": "Belgium"}}),
		json!({"id": 3, "name": "Samois", "population": 3_000, "country": {"name": "France"}}),
		json!({"id": 4, "name": "Rome", "population": 2_800_000, "country": {"name": "Italy"}}),
		json!({"id": 5, "name": "Berlin", "population": 3_700_000, "country": {"name": "Germany"}}),
	]
}

fn table() -> DataTable<CityTable, InMemorySource<serde_json::Value>> {
	DataTable::mount(CityTable, InMemorySource::new(cities()))
}

fn names(rows: &[serde_json::Value]) -> Vec<&str> {
	rows.iter().map(|row| row["name"].as_str().unwrap()).collect()
}

#[rstest]
#[tokio::test]
async fn test_default_render_orders_by_id() {
	let mut table = table();
	let view = table.render().await.unwrap();

	assert_eq!(view.results.total, 5);
	assert_eq!(
		names(&view.results.items),
		["Paris", "Liberchies", "Samois", "Rome", "Berlin"]
	);
}

#[rstest]
#[tokio::test]
async fn test_search_matches_any_token_in_any_column() {
	let mut table = table();
	table.set_search("rome berlin");

	let view = table.render().await.unwrap();
	assert_eq!(names(&view.results.items), ["Rome", "Berlin"]);
}

#[rstest]
#[tokio::test]
async fn test_search_through_nested_field() {
	let mut table = table();
	table.set_search("france");

	let view = table.render().await.unwrap();
	assert_eq!(names(&view.results.items), ["Paris", "Samois"]);
}

#[rstest]
#[tokio::test]
async fn test_sort_by_column() {
	let mut table = table();
	table.change_sort("population");

	let view = table.render().await.unwrap();
	assert_eq!(
		names(&view.results.items),
		["Liberchies", "Samois", "Paris", "Rome", "Berlin"]
	);

	table.change_sort("population");
	let view = table.render().await.unwrap();
	assert_eq!(
		names(&view.results.items),
		["Berlin", "Rome", "Paris", "Samois", "Liberchies"]
	);
}

#[rstest]
#[tokio::test]
async fn test_unknown_sort_key_falls_open_to_literal_field() {
	let mut table = table();
	// Not a declared column id; resolved per item instead of failing
	table.change_sort("country.name");

	let view = table.render().await.unwrap();
	assert_eq!(
		names(&view.results.items),
		["Liberchies", "Paris", "Samois", "Berlin", "Rome"]
	);
}

#[rstest]
#[tokio::test]
async fn test_pagination_slices_filtered_sequence() {
	let mut table = table();
	table.set_per_page(2);
	table.change_sort("population");

	table.set_page(2);
	let view = table.render().await.unwrap();

	assert_eq!(view.results.total, 5);
	assert_eq!(view.results.total_pages(), 3);
	assert_eq!(names(&view.results.items), ["Paris", "Rome"]);
	assert_eq!(view.results.first_item(), Some(3));
	assert_eq!(view.results.last_item(), Some(4));
}

#[rstest]
#[tokio::test]
async fn test_page_past_the_end_is_empty() {
	let mut table = table();
	table.set_per_page(3);
	table.set_page(4);

	let view = table.render().await.unwrap();
	assert!(view.results.items.is_empty());
	assert_eq!(view.results.total, 5);
}

#[rstest]
#[tokio::test]
async fn test_declaring_scopes_fails_fast() {
	struct ScopedCityTable;

	impl TableDefinition for ScopedCityTable {
		type Row = serde_json::Value;

		fn tag(&self) -> &'static str {
			"scoped-city-table"
		}

		fn columns(&self, columns: &mut Columns) {
			columns.add("name");
		}

		fn scopes(&self, scopes: &mut Scopes) {
			scopes.add("capitals");
		}
	}

	let mut table = DataTable::mount(ScopedCityTable, InMemorySource::new(cities()));

	let error = table.render().await.unwrap_err();
	assert!(matches!(error, TableError::ScopesUnsupported));
}

#[rstest]
#[tokio::test]
async fn test_search_and_sort_compose() {
	let mut table = table();
	table.set_search("france");
	table.change_sort("population");
	table.change_sort("population");

	let view = table.render().await.unwrap();
	assert_eq!(names(&view.results.items), ["Paris", "Samois"]);
}
