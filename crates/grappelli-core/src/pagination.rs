//! Length-aware pagination
//!
//! Both table backends produce the same [`Paginated`] shape, so the view
//! layer never needs to know whether a page came from a counted offset query
//! or from slicing an in-memory collection.

use serde::{Deserialize, Serialize};

/// Zero-based start index of a 1-indexed page
pub fn page_offset(page: u64, per_page: u64) -> u64 {
	page.saturating_sub(1) * per_page
}

/// One page of results plus the totals the pagination widgets need
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
	/// Rows of the current page
	pub items: Vec<T>,
	/// Total number of rows across all pages (after filtering)
	pub total: u64,
	/// Current page, 1-indexed
	pub page: u64,
	/// Rows per page
	pub per_page: u64,
}

impl<T> Paginated<T> {
	/// Creates a paginated result
	///
	/// Page and page size are clamped to at least 1.
	pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
		Self {
			items,
			total,
			page: page.max(1),
			per_page: per_page.max(1),
		}
	}

	/// Total number of pages
	pub fn total_pages(&self) -> u64 {
		if self.total == 0 {
			0
		} else {
			self.total.div_ceil(self.per_page)
		}
	}

	/// 1-indexed position of the first row on this page
	///
	/// `None` when the page holds no rows; feeds the
	/// "entry :first to :last of :total" counter.
	pub fn first_item(&self) -> Option<u64> {
		if self.items.is_empty() {
			None
		} else {
			Some(page_offset(self.page, self.per_page) + 1)
		}
	}

	/// 1-indexed position of the last row on this page
	pub fn last_item(&self) -> Option<u64> {
		self.first_item()
			.map(|first| first + self.items.len() as u64 - 1)
	}

	/// Returns whether this page holds no rows
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Whether a page after this one exists
	pub fn has_next_page(&self) -> bool {
		self.page < self.total_pages()
	}

	/// Whether a page before this one exists
	pub fn has_prev_page(&self) -> bool {
		self.page > 1
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_total_pages() {
		let page = Paginated::new(vec![1, 2, 3], 10, 1, 3);
		assert_eq!(page.total_pages(), 4);

		let empty: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
		assert_eq!(empty.total_pages(), 0);
	}

	#[test]
	fn test_item_window() {
		let page = Paginated::new(vec![4, 5, 6], 10, 2, 3);
		assert_eq!(page.first_item(), Some(4));
		assert_eq!(page.last_item(), Some(6));
	}

	#[test]
	fn test_empty_page_has_no_window() {
		let page: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
		assert_eq!(page.first_item(), None);
		assert_eq!(page.last_item(), None);
		assert!(page.is_empty());
	}

	#[test]
	fn test_page_navigation_flags() {
		let page = Paginated::new(vec![4, 5, 6], 10, 2, 3);
		assert!(page.has_next_page());
		assert!(page.has_prev_page());

		let last = Paginated::new(vec![10], 10, 4, 3);
		assert!(!last.has_next_page());
	}
}
