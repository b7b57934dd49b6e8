//! Catalog snapshot store
//!
//! Loads the catalog lazily on first use and keeps it as an immutable
//! snapshot. The snapshot only changes through an explicit `reload()`.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entry::CatalogEntry;
use super::source::{CatalogSource, EmbeddedSource, JsonFileSource};
use crate::config::CatalogConfig;
use crate::error::SuggestError;

/// Immutable catalog contents plus where and when they were loaded
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
    origin: String,
    loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(entries: Vec<CatalogEntry>, origin: impl Into<String>) -> Self {
        Self {
            entries,
            origin: origin.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Observable state of the store, reported by the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatus {
    pub loaded: bool,
    pub entries: usize,
    pub origin: String,
    /// RFC 3339 timestamp of the current snapshot
    pub loaded_at: Option<String>,
}

pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("origin", &self.source.describe())
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            snapshot: RwLock::new(None),
        }
    }

    /// File source when a path is configured, embedded sample otherwise
    pub fn from_config(config: &CatalogConfig) -> Self {
        match &config.path {
            Some(path) => Self::new(JsonFileSource::new(path)),
            None => Self::new(EmbeddedSource),
        }
    }

    /// Current snapshot, loading it on first use
    ///
    /// A failed first load is not remembered; the next call tries again.
    pub fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, SuggestError> {
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }

        let mut guard = self.write();
        // Another caller may have loaded while we waited for the write lock
        if let Some(snapshot) = guard.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot = Arc::new(self.load_snapshot()?);
        *guard = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Replace the snapshot with a fresh read of the source
    ///
    /// On failure the previous snapshot keeps serving.
    pub fn reload(&self) -> Result<Arc<CatalogSnapshot>, SuggestError> {
        let snapshot = Arc::new(self.load_snapshot()?);
        *self.write() = Some(Arc::clone(&snapshot));
        log::info!(
            "Catalog reloaded from {} ({} entries)",
            snapshot.origin(),
            snapshot.len()
        );
        Ok(snapshot)
    }

    pub fn status(&self) -> CatalogStatus {
        match self.current() {
            Some(snapshot) => CatalogStatus {
                loaded: true,
                entries: snapshot.len(),
                origin: snapshot.origin().to_string(),
                loaded_at: Some(snapshot.loaded_at().to_rfc3339()),
            },
            None => CatalogStatus {
                loaded: false,
                entries: 0,
                origin: self.source.describe(),
                loaded_at: None,
            },
        }
    }

    fn current(&self) -> Option<Arc<CatalogSnapshot>> {
        self.read().clone()
    }

    fn load_snapshot(&self) -> Result<CatalogSnapshot, SuggestError> {
        let origin = self.source.describe();
        log::debug!("Loading catalog from {}", origin);

        match self.source.load() {
            Ok(entries) => {
                log::info!("Catalog loaded from {} ({} entries)", origin, entries.len());
                Ok(CatalogSnapshot::new(entries, origin))
            }
            Err(e) => {
                log::error!("{}", e);
                Err(e)
            }
        }
    }

    // Snapshots are swapped whole, so a poisoned lock still holds a consistent value
    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<CatalogSnapshot>>> {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<CatalogSnapshot>>> {
        self.snapshot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
