//! Remote-first lookup with a local catalog fallback
//!
//! The remote server is tried first (with bounded retries for transient
//! failures); any remaining failure falls back to a local `SuggestionService`.
//! This policy lives here, outside the matching core. Both sides are held to
//! the local service's limit.

use std::time::Duration;

use serde::Serialize;

use super::remote::{RemoteError, RemoteSuggester};
use crate::config::ClientConfig;
use crate::error::SuggestError;
use crate::suggest::{SuggestionResult, SuggestionService};

const RETRY_BACKOFF_MS: u64 = 100;

/// Which side answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestions {
    pub results: Vec<SuggestionResult>,
    pub origin: Origin,
}

#[derive(Debug, Clone)]
pub struct FallbackSuggester {
    remote: Option<RemoteSuggester>,
    local: SuggestionService,
    retries: u32,
}

impl FallbackSuggester {
    pub fn new(remote: Option<RemoteSuggester>, local: SuggestionService, retries: u32) -> Self {
        Self {
            remote,
            local,
            retries,
        }
    }

    /// Remote side from `[client]` when an endpoint is configured
    pub fn from_config(config: &ClientConfig, local: SuggestionService) -> Result<Self, SuggestError> {
        let remote = config
            .endpoint
            .as_deref()
            .map(|endpoint| RemoteSuggester::new(endpoint, config.timeout()))
            .transpose()?;

        Ok(Self::new(remote, local, config.retries))
    }

    /// Blank queries are answered locally with no I/O at all.
    pub async fn suggest(&self, query: &str) -> Result<Suggestions, SuggestError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Suggestions {
                results: Vec::new(),
                origin: Origin::Local,
            });
        }

        if let Some(remote) = &self.remote {
            match self.try_remote(remote, query).await {
                Ok(mut results) => {
                    results.truncate(self.local.limit());
                    return Ok(Suggestions {
                        results,
                        origin: Origin::Remote,
                    });
                }
                Err(e) => log::warn!(
                    "Remote lookup via {} failed, using local catalog: {}",
                    remote.endpoint(),
                    e
                ),
            }
        }

        // The first local lookup may read the catalog file
        let local = self.local.clone();
        let owned = query.to_string();
        let results = tokio::task::spawn_blocking(move || local.suggest(&owned))
            .await
            .map_err(|e| SuggestError::catalog_unavailable("local lookup", e))??;
        Ok(Suggestions {
            results,
            origin: Origin::Local,
        })
    }

    async fn try_remote(
        &self,
        remote: &RemoteSuggester,
        query: &str,
    ) -> Result<Vec<SuggestionResult>, RemoteError> {
        let mut attempt = 0;
        loop {
            match remote.suggest(query).await {
                Ok(results) => return Ok(results),
                Err(e) if e.is_retryable() && attempt < self.retries => {
                    attempt += 1;
                    log::debug!("Remote attempt {} failed ({}), retrying", attempt, e);
                    tokio::time::sleep(Duration::from_millis(RETRY_BACKOFF_MS * u64::from(attempt)))
                        .await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod fallback_tests;
