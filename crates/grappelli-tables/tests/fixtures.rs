//! Common test fixtures for grappelli-tables tests
#![allow(dead_code)]

use async_trait::async_trait;
use grappelli_core::{Model, Record, Value, resolve_path};
use grappelli_tables::{
	QueryBackend, QueryHandle, QueryPlan, Result, RouteResolver, SessionStore, TableError,
};
use parking_lot::RwLock;
use rstest::*;
use std::collections::HashMap;

/// Test post record, reachable from a user through the `latest_post`
/// relation
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
	pub id: i64,
	pub title: String,
}

impl Record for Post {
	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"id" => Some(Value::from(self.id)),
			"title" => Some(Value::from(self.title.clone())),
			_ => None,
		}
	}
}

/// Test user record with a computed accessor and a to-one relation
#[derive(Debug, Clone, PartialEq)]
pub struct User {
	pub id: i64,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub admin: bool,
	pub latest_post: Option<Post>,
}

impl Record for User {
	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"id" => Some(Value::from(self.id)),
			"first_name" => Some(Value::from(self.first_name.clone())),
			"last_name" => Some(Value::from(self.last_name.clone())),
			"email" => Some(Value::from(self.email.clone())),
			"admin" => Some(Value::from(self.admin)),
			_ => None,
		}
	}

	fn accessor(&self, name: &str) -> Option<Value> {
		match name {
			"full_name" => Some(Value::from(format!(
				"{} {}",
				self.first_name, self.last_name
			))),
			_ => None,
		}
	}

	fn relation(&self, name: &str) -> Option<&dyn Record> {
		match name {
			"latest_post" => self.latest_post.as_ref().map(|post| post as &dyn Record),
			_ => None,
		}
	}
}

impl Model for User {
	fn entity_name() -> &'static str {
		"users"
	}

	fn accessors() -> &'static [&'static str] {
		&["full_name"]
	}

	fn scope_names() -> &'static [&'static str] {
		&["admins"]
	}
}

fn user(id: i64, first: &str, last: &str, admin: bool, post_title: Option<&str>) -> User {
	User {
		id,
		first_name: first.to_string(),
		last_name: last.to_string(),
		email: format!("{}.{}@example.org", first.to_lowercase(), last.to_lowercase()),
		admin,
		latest_post: post_title.map(|title| Post {
			id: id * 10,
			title: title.to_string(),
		}),
	}
}

/// Ten users, exactly one of them flagged admin
#[fixture]
pub fn sample_users() -> Vec<User> {
	vec![
		user(1, "Anna", "Abbott", false, Some("Minor Swing")),
		user(2, "Bruno", "Becker", false, Some("Nuages")),
		user(3, "Carla", "Caron", false, None),
		user(4, "Dora", "Dupont", false, Some("Daphne")),
		user(5, "Emil", "Eriksen", false, Some("Tears")),
		user(6, "Frida", "Fischer", false, None),
		user(7, "Greta", "Gruber", true, Some("Belleville")),
		user(8, "Hugo", "Hansen", false, Some("Swing 42")),
		user(9, "Ivana", "Ilic", false, None),
		user(10, "Jonas", "Jensen", false, Some("Douce Ambiance")),
	]
}

/// Query backend evaluating composed plans against fixture rows
///
/// Behaves the way a real backend would: scopes and the search condition
/// restrict the set, ordering directives apply in sequence, `fetch` honors
/// offset and limit while `count` ignores them.
pub struct FakeQueryBackend {
	pub users: Vec<User>,
}

impl FakeQueryBackend {
	pub fn new(users: Vec<User>) -> Self {
		Self { users }
	}

	fn select(&self, handle: &QueryHandle, plan: &QueryPlan) -> Result<Vec<User>> {
		if handle.entity != User::entity_name() {
			return Err(TableError::Backend(format!(
				"unknown entity '{}'",
				handle.entity
			)));
		}

		let mut rows: Vec<User> = self
			.users
			.iter()
			.filter(|user| {
				handle.id_snapshot.is_empty() || handle.id_snapshot.contains(&user.id)
			})
			.cloned()
			.collect();

		for scope in &plan.scopes {
			match scope.as_str() {
				"admins" => rows.retain(|user| user.admin),
				other => {
					return Err(TableError::Backend(format!("unknown scope '{}'", other)));
				}
			}
		}

		if let Some(condition) = &plan.condition {
			rows.retain(|user| condition.matches(user as &dyn Record));
		}

		if !plan.order.is_empty() {
			let order = plan.order.clone();
			rows.sort_by(|a, b| {
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

		Ok(rows)
	}
}

#[async_trait]
impl QueryBackend<User> for FakeQueryBackend {
	async fn count(&self, handle: &QueryHandle, plan: &QueryPlan) -> Result<u64> {
		Ok(self.select(handle, plan)?.len() as u64)
	}

	async fn fetch(&self, handle: &QueryHandle, plan: &QueryPlan) -> Result<Vec<User>> {
		let rows = self.select(handle, plan)?;
		let start = (plan.offset as usize).min(rows.len());
		let end = (start + plan.limit as usize).min(rows.len());
		Ok(rows[start..end].to_vec())
	}
}

/// Minimal session store for round-trip tests
#[derive(Default)]
pub struct MemoryStore {
	values: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn keys(&self) -> Vec<String> {
		self.values.read().keys().cloned().collect()
	}
}

#[async_trait]
impl SessionStore for MemoryStore {
	async fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
		Ok(self.values.read().get(key).cloned())
	}

	async fn store(&self, key: &str, value: serde_json::Value) -> Result<()> {
		self.values.write().insert(key.to_string(), value);
		Ok(())
	}
}

/// Routing collaborator with a fixed route table
pub struct FakeRouter;

impl RouteResolver for FakeRouter {
	fn reverse(&self, name: &str, params: &[(String, String)]) -> Result<String> {
		let pattern = match name {
			"users.show" => "/users/{id}",
			"users.destroy" => "/users/{id}/delete",
			"posts.show" => "/posts/{id}",
			_ => {
				return Err(TableError::RouteNotFound {
					route: name.to_string(),
					message: "no such route".to_string(),
				});
			}
		};

		let mut url = pattern.to_string();
		for (key, value) in params {
			url = url.replace(&format!("{{{}}}", key), value);
		}

		Ok(url)
	}
}
