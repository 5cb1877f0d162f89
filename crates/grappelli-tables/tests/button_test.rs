//! Tests for per-row action buttons

mod fixtures;

use fixtures::{FakeRouter, User, sample_users};
use grappelli_core::Record;
use grappelli_tables::{Button, Confirmation, RenderMode, TableError};
use rstest::*;

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[rstest]
fn test_defaults(sample_users: Vec<User>) {
	let button = Button::new("details-button", "users.show", params(&[("id", ":id")]));

	assert_eq!(button.id(), "details-button");
	assert_eq!(button.label(), "details-button");
	assert_eq!(button.route(), "users.show");
	assert_eq!(button.target(), "_self");
	assert_eq!(button.icon(), None);
	assert_eq!(button.render_mode(), RenderMode::Label);
	assert_eq!(button.classes(), None);
	assert!(!button.is_confirmation_button());
	assert!(button.is_allowed_to_render(&sample_users[0]));
}

#[rstest]
fn test_static_route_parameter(sample_users: Vec<User>) {
	let button = Button::new("export", "users.show", params(&[("id", "all")]));

	let url = button.url(&sample_users[0], &FakeRouter).unwrap();
	assert_eq!(url, "/users/all");
}

#[rstest]
fn test_dynamic_route_parameter(sample_users: Vec<User>) {
	let button = Button::new("details", "users.show", params(&[("id", ":id")]));

	let url = button.url(&sample_users[3], &FakeRouter).unwrap();
	assert_eq!(url, "/users/4");
}

#[rstest]
fn test_dynamic_relation_route_parameter(sample_users: Vec<User>) {
	// The parameter resolves to the related record's id, not the row's own
	let button = Button::new("read", "posts.show", params(&[("id", ":latest_post.id")]));

	let url = button.url(&sample_users[0], &FakeRouter).unwrap();
	assert_eq!(url, "/posts/10");
}

#[rstest]
fn test_link_target() {
	let mut button = Button::new("details", "users.show", params(&[("id", ":id")]));
	button.set_target("_blank");

	assert_eq!(button.target(), "_blank");
}

#[rstest]
fn test_label_icon() {
	let mut button = Button::new("details", "users.show", params(&[("id", ":id")]));
	button.set_icon("fa fa-eye", true);
	assert_eq!(button.icon(), Some("fa fa-eye"));
	assert_eq!(button.render_mode(), RenderMode::Icon);

	button.set_icon("fa fa-eye", false);
	assert_eq!(button.render_mode(), RenderMode::IconLabel);
}

#[rstest]
fn test_custom_classes() {
	let mut button = Button::new("details", "users.show", params(&[("id", ":id")]));
	button.set_classes(["btn-sm", "btn-outline-primary"]);

	assert_eq!(
		button.classes(),
		Some("btn-sm btn-outline-primary".to_string())
	);
}

#[rstest]
fn test_confirmation(sample_users: Vec<User>) {
	let mut button = Button::new("delete", "users.destroy", params(&[("id", ":id")]));
	button.set_confirmation(Confirmation {
		text: Some("Really delete this user?".to_string()),
		context: Some("warning".to_string()),
		..Confirmation::default()
	});

	assert!(button.is_confirmation_button());

	let request = button.confirm_request(&sample_users[1], &FakeRouter).unwrap();
	assert_eq!(request.url, "/users/2/delete");
	assert_eq!(
		request.options.text.as_deref(),
		Some("Really delete this user?")
	);
	assert_eq!(request.options.context.as_deref(), Some("warning"));
	assert_eq!(request.options.title, None);
}

#[rstest]
fn test_condition(sample_users: Vec<User>) {
	let mut button = Button::new("promote", "users.show", params(&[("id", ":id")]));
	button.set_condition(|row: &dyn Record| {
		row.field("admin") == Some(grappelli_core::Value::Bool(false))
	});

	assert!(button.is_allowed_to_render(&sample_users[0]));
	assert!(!button.is_allowed_to_render(&sample_users[6]));
}

#[rstest]
fn test_unknown_route_fails(sample_users: Vec<User>) {
	let button = Button::new("broken", "users.missing", params(&[]));

	let error = button.url(&sample_users[0], &FakeRouter).unwrap_err();
	assert!(matches!(
		error,
		TableError::RouteNotFound { route, .. } if route == "users.missing"
	));
}
