//! Per-row action buttons
//!
//! A button describes a row action declaratively: a named route with a
//! parameter template, rendering hints, an optional visibility condition
//! and optional confirmation metadata. Template values starting with `:`
//! are dotted paths resolved against the row; final URL construction is
//! delegated to the routing collaborator.

use crate::error::Result;
use grappelli_core::{Record, resolve_path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Routing collaborator contract
///
/// The host framework's router builds the final URL from a route name and
/// resolved parameters; buttons never concatenate URLs themselves.
pub trait RouteResolver: Send + Sync {
	/// Reverses a named route into a URL
	fn reverse(&self, name: &str, params: &[(String, String)]) -> Result<String>;
}

/// How a button renders its face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
	/// Label text only
	Label,
	/// Icon only
	Icon,
	/// Icon followed by the label text
	IconLabel,
}

/// Confirmation metadata of a button
///
/// Unset entries fall back to the `confirm_modal.*` translation keys when
/// the modal opens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
	/// Modal body text
	pub text: Option<String>,
	/// Modal title
	pub title: Option<String>,
	/// Confirm button label
	pub confirm: Option<String>,
	/// Cancel button label
	pub cancel: Option<String>,
	/// CSS styling context (e.g. `danger`, `warning`)
	pub context: Option<String>,
}

/// Payload a confirmation button emits instead of navigating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmRequest {
	/// Resolved target URL to follow on affirmation
	pub url: String,
	/// Confirmation text bundle
	pub options: Confirmation,
}

/// Closure deciding per row whether a button renders
pub type RenderCondition = dyn Fn(&dyn Record) -> bool + Send + Sync;

/// A per-row action button
#[derive(Clone)]
pub struct Button {
	id: String,
	label: String,
	route: String,
	route_params: Vec<(String, String)>,
	target: String,
	icon: Option<String>,
	render_mode: RenderMode,
	classes: Vec<String>,
	confirmation: Option<Confirmation>,
	condition: Option<Arc<RenderCondition>>,
}

impl fmt::Debug for Button {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Button")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("route", &self.route)
			.field("route_params", &self.route_params)
			.field("render_mode", &self.render_mode)
			.finish_non_exhaustive()
	}
}

impl Button {
	/// Creates a new button
	///
	/// The label doubles as the button id. Parameter values starting with
	/// `:` are resolved against the row at render time.
	pub fn new(
		label: impl Into<String>,
		route: impl Into<String>,
		route_params: Vec<(String, String)>,
	) -> Self {
		let label = label.into();
		Self {
			id: label.clone(),
			label,
			route: route.into(),
			route_params,
			target: "_self".to_string(),
			icon: None,
			render_mode: RenderMode::Label,
			classes: Vec::new(),
			confirmation: None,
			condition: None,
		}
	}

	/// Sets the link target
	pub fn set_target(&mut self, target: impl Into<String>) -> &mut Self {
		self.target = target.into();
		self
	}

	/// Sets an icon and chooses the render mode
	///
	/// With `icon_only` the label is dropped from the face (it still serves
	/// as the id and accessible name).
	pub fn set_icon(&mut self, icon: impl Into<String>, icon_only: bool) -> &mut Self {
		self.icon = Some(icon.into());
		self.render_mode = if icon_only {
			RenderMode::Icon
		} else {
			RenderMode::IconLabel
		};
		self
	}

	/// Sets custom CSS classes
	pub fn set_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.classes = classes.into_iter().map(Into::into).collect();
		self
	}

	/// Marks this button as a confirmation button
	///
	/// Such a button emits a confirm request instead of linking directly.
	pub fn set_confirmation(&mut self, confirmation: Confirmation) -> &mut Self {
		self.confirmation = Some(confirmation);
		self
	}

	/// Sets a per-row visibility condition
	pub fn set_condition<F>(&mut self, condition: F) -> &mut Self
	where
		F: Fn(&dyn Record) -> bool + Send + Sync + 'static,
	{
		self.condition = Some(Arc::new(condition));
		self
	}

	/// Returns the button identifier
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the button label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the route name
	pub fn route(&self) -> &str {
		&self.route
	}

	/// Returns the link target
	pub fn target(&self) -> &str {
		&self.target
	}

	/// Returns the icon if one is set
	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}

	/// Returns the render mode
	pub fn render_mode(&self) -> RenderMode {
		self.render_mode
	}

	/// Returns the custom classes joined for the class attribute
	pub fn classes(&self) -> Option<String> {
		if self.classes.is_empty() {
			None
		} else {
			Some(self.classes.join(" "))
		}
	}

	/// Returns the confirmation metadata if set
	pub fn confirmation(&self) -> Option<&Confirmation> {
		self.confirmation.as_ref()
	}

	/// Returns whether this is a confirmation button
	pub fn is_confirmation_button(&self) -> bool {
		self.confirmation.is_some()
	}

	/// Returns true if the button should be rendered for the row
	pub fn is_allowed_to_render(&self, record: &dyn Record) -> bool {
		match &self.condition {
			Some(condition) => condition(record),
			None => true,
		}
	}

	/// Resolves the route parameter template against a row
	///
	/// `:dotted.path` placeholders walk the row's relations; literal values
	/// pass through unchanged.
	pub fn resolve_route_params(&self, record: &dyn Record) -> Vec<(String, String)> {
		self.route_params
			.iter()
			.map(|(key, value)| {
				let resolved = match value.strip_prefix(':') {
					Some(path) => resolve_path(record, path).to_display_string(),
					None => value.clone(),
				};
				(key.clone(), resolved)
			})
			.collect()
	}

	/// Returns the finished URL for a row
	pub fn url(&self, record: &dyn Record, resolver: &dyn RouteResolver) -> Result<String> {
		let params = self.resolve_route_params(record);
		resolver.reverse(&self.route, &params)
	}

	/// Builds the confirm-request payload for a row
	///
	/// Only meaningful for confirmation buttons; a button without
	/// confirmation metadata yields an empty text bundle.
	pub fn confirm_request(
		&self,
		record: &dyn Record,
		resolver: &dyn RouteResolver,
	) -> Result<ConfirmRequest> {
		Ok(ConfirmRequest {
			url: self.url(record, resolver)?,
			options: self.confirmation.clone().unwrap_or_default(),
		})
	}
}
