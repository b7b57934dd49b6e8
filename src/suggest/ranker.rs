use std::fmt;

use serde::{Deserialize, Serialize};

use super::matcher::{ApproximateMatcher, Matcher, matcher_for};
use crate::catalog::CatalogEntry;
use crate::config::{DEFAULT_THRESHOLD, SearchConfig};

/// Longer queries are cut here before splitting into terms
pub const MAX_QUERY_CHARS: usize = 128;

/// Longer terms are scored on their leading characters only
pub const MAX_TERM_CHARS: usize = 32;

/// A matched catalog entry as handed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub description: String,
    pub code: String,
}

impl From<&CatalogEntry> for SuggestionResult {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            description: entry.description.clone(),
            code: entry.code.clone(),
        }
    }
}

/// Scores catalog descriptions against a query and keeps the best `limit`
pub struct Ranker {
    matcher: Box<dyn Matcher>,
    threshold: f64,
    limit: usize,
}

impl fmt::Debug for Ranker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranker")
            .field("threshold", &self.threshold)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

impl Ranker {
    pub fn new(matcher: Box<dyn Matcher>, threshold: f64, limit: usize) -> Self {
        Self {
            matcher,
            threshold,
            limit,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(matcher_for(config), config.threshold, config.limit)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Best matches first; equal distances keep catalog order
    pub fn rank(&self, query: &str, catalog: &[CatalogEntry]) -> Vec<SuggestionResult> {
        // Matching cost grows with term length per entry, so bound it up front
        let terms: Vec<&str> = clip_chars(query, MAX_QUERY_CHARS)
            .split_whitespace()
            .map(|term| clip_chars(term, MAX_TERM_CHARS))
            .collect();
        if terms.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = catalog
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                // All terms must match (AND logic)
                let mut total = 0.0;
                for term in &terms {
                    let distance = self
                        .matcher
                        .distance(term, &entry.description)
                        .filter(|&d| d <= self.threshold)?;
                    total += distance;
                }
                Some((idx, total / terms.len() as f64))
            })
            .collect();

        // sort_by is stable, which keeps ties in catalog order
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(self.limit);

        scored
            .into_iter()
            .map(|(idx, _)| SuggestionResult::from(&catalog[idx]))
            .collect()
    }
}

/// Leading `max` characters of `s`, never splitting a character
fn clip_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Rank `catalog` against `query` with the default matcher and threshold
pub fn suggest(query: &str, catalog: &[CatalogEntry], k: usize) -> Vec<SuggestionResult> {
    Ranker::new(Box::new(ApproximateMatcher::default()), DEFAULT_THRESHOLD, k).rank(query, catalog)
}

#[cfg(test)]
#[path = "ranker_tests.rs"]
mod ranker_tests;
