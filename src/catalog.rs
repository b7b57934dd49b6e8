mod entry;
mod source;
mod store;

pub use entry::CatalogEntry;
pub use source::{CatalogSource, EmbeddedSource, InMemorySource, JsonFileSource, parse_catalog};
pub use store::{CatalogSnapshot, CatalogStatus, CatalogStore};
