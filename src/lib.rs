//! prk-suggest library - fuzzy drug catalog suggestions
//!
//! Catalog loading, ranked lookups, the HTTP boundary and the
//! remote-with-local-fallback client.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod suggest;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use catalog::{CatalogEntry, CatalogStore};
pub use config::Config;
pub use error::SuggestError;
pub use suggest::{SuggestionResult, SuggestionService, suggest};
