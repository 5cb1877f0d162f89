//! Reactive host surface for grappelli data tables
//!
//! The table components talk to the rest of the page through narrow
//! contracts; this crate provides the host-side pieces:
//!
//! - [`SignalHub`]: named synchronous signals for cross-component events
//!   (a confirmation button reaches the modal by signal name, not by
//!   reference)
//! - [`ConfirmModal`]: the shared destructive-action confirmation
//!   coordinator
//! - [`InMemorySessionStore`]: a session backend for table UI state
//! - [`MessageCatalog`]: default translation catalogs for the keys the
//!   components emit

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod confirm;
pub mod session;
pub mod signal;

// Re-exports for convenience
pub use catalog::{MessageCatalog, default_catalogs};
pub use confirm::ConfirmModal;
pub use session::InMemorySessionStore;
pub use signal::SignalHub;
