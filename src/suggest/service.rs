use std::sync::Arc;

use super::ranker::{Ranker, SuggestionResult};
use crate::catalog::{CatalogStatus, CatalogStore};
use crate::config::SearchConfig;
use crate::error::SuggestError;

/// Suggestion lookups bound to one catalog store
///
/// Cheap to clone; clones share the store and the ranker.
#[derive(Debug, Clone)]
pub struct SuggestionService {
    store: Arc<CatalogStore>,
    ranker: Arc<Ranker>,
}

impl SuggestionService {
    pub fn new(store: Arc<CatalogStore>, config: &SearchConfig) -> Self {
        Self::with_ranker(store, Ranker::from_config(config))
    }

    pub fn with_ranker(store: Arc<CatalogStore>, ranker: Ranker) -> Self {
        Self {
            store,
            ranker: Arc::new(ranker),
        }
    }

    /// Ranked suggestions for a raw query
    ///
    /// Blank queries return an empty list without touching the catalog.
    /// Catalog failures surface as `CatalogUnavailable`.
    pub fn suggest(&self, query: &str) -> Result<Vec<SuggestionResult>, SuggestError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let snapshot = self.store.snapshot()?;
        let results = self.ranker.rank(query, snapshot.entries());
        log::debug!(
            "Query {:?} matched {} of {} entries",
            query,
            results.len(),
            snapshot.len()
        );
        Ok(results)
    }

    pub fn reload(&self) -> Result<CatalogStatus, SuggestError> {
        self.store.reload()?;
        Ok(self.store.status())
    }

    pub fn status(&self) -> CatalogStatus {
        self.store.status()
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn limit(&self) -> usize {
        self.ranker.limit()
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
