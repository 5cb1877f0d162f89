//! Translation catalogs for the component texts
//!
//! The components emit translation keys, never final texts; the host's
//! localization layer resolves them. These catalogs provide the default
//! `en` and `de` entries so a host without its own translations still gets
//! sensible labels.

use std::collections::HashMap;

/// A message catalog containing translations for a specific locale
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a translation
	pub fn add(&mut self, key: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(key.into(), translation.into());
	}

	/// Get a translation by key
	pub fn get(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	/// Get a translation by key, falling back to the key itself
	pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
		self.get(key).unwrap_or(key)
	}

	/// Returns whether the catalog has an entry for the key
	pub fn has(&self, key: &str) -> bool {
		self.messages.contains_key(key)
	}
}

/// Default catalogs for the keys the table and modal components consume
pub fn default_catalogs() -> Vec<MessageCatalog> {
	let mut en = MessageCatalog::new("en");
	en.add("datatable.table.actions", "Actions");
	en.add("datatable.table.empty", "There are no records available ...");
	en.add("datatable.table.loading", "Loading items...");
	en.add("datatable.search.placeholder", "Search...");
	en.add(
		"datatable.pagination.count",
		"Show entry :first_item to :last_item from :total_items",
	);
	en.add("datatable.scopes.no_filter", "No filtering");
	en.add("confirm_modal.title", "Are you sure?");
	en.add(
		"confirm_modal.text",
		"Do you really want to perform this action?",
	);
	en.add("confirm_modal.button_confirm", "Confirm");
	en.add("confirm_modal.button_cancel", "Cancel");

	let mut de = MessageCatalog::new("de");
	de.add("datatable.table.actions", "Aktionen");
	de.add("datatable.table.empty", "Es sind keine Datensätze verfügbar...");
	de.add("datatable.table.loading", "Lade Einträge...");
	de.add("datatable.search.placeholder", "Suche...");
	de.add(
		"datatable.pagination.count",
		"Zeige Eintrag :first_item bis :last_item von :total_items",
	);
	de.add("datatable.scopes.no_filter", "Keine Filterung");
	de.add("confirm_modal.title", "Sind Sie sicher?");
	de.add(
		"confirm_modal.text",
		"Wollen Sie diese Aktion wirklich ausführen?",
	);
	de.add("confirm_modal.button_confirm", "Bestätigen");
	de.add("confirm_modal.button_cancel", "Abbrechen");

	vec![en, de]
}
