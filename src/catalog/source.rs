//! Catalog sources
//!
//! A source produces the complete catalog or fails with `CatalogUnavailable`.
//! There are no partial results: one malformed entry rejects the whole load.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use super::entry::CatalogEntry;
use crate::error::SuggestError;

const EMBEDDED_CATALOG: &str = include_str!("../../data/prk_sample.json");

/// Somewhere a catalog can be read from
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError>;
}

/// JSON array of entries stored on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError> {
        let origin = self.describe();
        // read_to_string also rejects invalid UTF-8
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SuggestError::catalog_unavailable(&origin, e))?;
        parse_catalog(&contents, &origin)
    }
}

/// Sample catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl CatalogSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded sample catalog".to_string()
    }

    fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError> {
        parse_catalog(EMBEDDED_CATALOG, &self.describe())
    }
}

/// Pre-built entry list
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: Vec<CatalogEntry>,
}

impl InMemorySource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for InMemorySource {
    fn describe(&self) -> String {
        format!("in-memory catalog ({} entries)", self.entries.len())
    }

    fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError> {
        validate(&self.entries, &self.describe())?;
        Ok(self.entries.clone())
    }
}

/// Parse and validate a JSON catalog document
pub fn parse_catalog(json: &str, origin: &str) -> Result<Vec<CatalogEntry>, SuggestError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(json).map_err(|e| SuggestError::catalog_unavailable(origin, e))?;
    validate(&entries, origin)?;
    Ok(entries)
}

fn validate(entries: &[CatalogEntry], origin: &str) -> Result<(), SuggestError> {
    let mut seen = HashSet::new();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.description.trim().is_empty() {
            return Err(SuggestError::catalog_unavailable(
                origin,
                format!("entry {} has an empty description", idx),
            ));
        }
        if entry.code.trim().is_empty() {
            return Err(SuggestError::catalog_unavailable(
                origin,
                format!("entry {} has an empty code", idx),
            ));
        }
        if !seen.insert(entry.code.as_str()) {
            log::warn!("Duplicate catalog code {:?} in {}", entry.code, origin);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
