//! Shared test utilities for prk-suggest
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::catalog::{CatalogEntry, CatalogSource, CatalogStore};
    use crate::config::SearchConfig;
    use crate::error::SuggestError;
    use crate::suggest::SuggestionService;

    /// The two-entry catalog used by the lookup scenarios
    pub fn scenario_catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Naproxen tablet 250 mg", "N01"),
            CatalogEntry::new("Paracetamol 500 mg", "P01"),
        ]
    }

    /// A broader catalog with near-duplicates and shared prefixes
    pub fn pharmacy_catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Paracetamol tablet 500 mg", "10001"),
            CatalogEntry::new("Paracetamol tablet 1000 mg", "10002"),
            CatalogEntry::new("Ibuprofen tablet 400 mg", "10102"),
            CatalogEntry::new("Naproxen tablet 250 mg", "10201"),
            CatalogEntry::new("Naproxen tablet 500 mg", "10202"),
            CatalogEntry::new("Amoxicilline capsule 500 mg", "20101"),
            CatalogEntry::new("Omeprazol capsule msr 20 mg", "30101"),
            CatalogEntry::new("Metformine tablet 500 mg", "40101"),
            CatalogEntry::new("Metoprolol tablet mga 50 mg", "60101"),
        ]
    }

    /// Source that counts how often it is read
    #[derive(Clone, Default)]
    pub struct CountingSource {
        entries: Vec<CatalogEntry>,
        loads: Arc<AtomicUsize>,
    }

    impl CountingSource {
        pub fn new(entries: Vec<CatalogEntry>) -> Self {
            Self {
                entries,
                loads: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Shared counter, still readable after the source moved into a store
        pub fn counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.loads)
        }
    }

    impl CatalogSource for CountingSource {
        fn describe(&self) -> String {
            "counting source".to_string()
        }

        fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(self.entries.clone())
        }
    }

    /// Source whose next result can be swapped between loads
    #[derive(Clone)]
    pub struct ScriptedSource {
        next: Arc<Mutex<Result<Vec<CatalogEntry>, SuggestError>>>,
    }

    impl ScriptedSource {
        pub fn new(initial: Result<Vec<CatalogEntry>, SuggestError>) -> Self {
            Self {
                next: Arc::new(Mutex::new(initial)),
            }
        }

        pub fn set(&self, next: Result<Vec<CatalogEntry>, SuggestError>) {
            *self.next.lock().unwrap() = next;
        }
    }

    impl CatalogSource for ScriptedSource {
        fn describe(&self) -> String {
            "scripted source".to_string()
        }

        fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError> {
            self.next.lock().unwrap().clone()
        }
    }

    /// Source whose load blocks the calling thread for `delay`
    #[derive(Clone)]
    pub struct SlowSource {
        entries: Vec<CatalogEntry>,
        delay: Duration,
    }

    impl SlowSource {
        pub fn new(entries: Vec<CatalogEntry>, delay: Duration) -> Self {
            Self { entries, delay }
        }
    }

    impl CatalogSource for SlowSource {
        fn describe(&self) -> String {
            "slow source".to_string()
        }

        fn load(&self) -> Result<Vec<CatalogEntry>, SuggestError> {
            std::thread::sleep(self.delay);
            Ok(self.entries.clone())
        }
    }

    pub fn unavailable(reason: &str) -> SuggestError {
        SuggestError::catalog_unavailable("scripted source", reason)
    }

    /// Service over an in-memory catalog with default search settings
    pub fn service_with(entries: Vec<CatalogEntry>) -> SuggestionService {
        let store = CatalogStore::new(crate::catalog::InMemorySource::new(entries));
        SuggestionService::new(Arc::new(store), &SearchConfig::default())
    }
}
