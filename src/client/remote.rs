//! Remote suggestion client
//!
//! Calls `GET {endpoint}/suggest?q=` on a running suggestion server.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::error::SuggestError;
use crate::server::SuggestResponse;
use crate::suggest::SuggestionResult;

/// Errors from a single remote lookup
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connect failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not a results envelope
    #[error("Parse error: {0}")]
    Parse(String),
}

impl RemoteError {
    /// Worth another attempt: transport failures and 5xx responses
    pub fn is_retryable(&self) -> bool {
        match self {
            RemoteError::Network(_) => true,
            RemoteError::Api { code, .. } => *code >= 500,
            RemoteError::Parse(_) => false,
        }
    }
}

impl From<RemoteError> for SuggestError {
    fn from(err: RemoteError) -> Self {
        SuggestError::Remote(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct RemoteSuggester {
    client: Client,
    endpoint: String,
}

impl RemoteSuggester {
    /// `endpoint` is the server's base URL, e.g. `http://127.0.0.1:3000`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SuggestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Remote(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn suggest(&self, query: &str) -> Result<Vec<SuggestionResult>, RemoteError> {
        let response = self
            .client
            .get(format!("{}/suggest", self.endpoint))
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RemoteError::Api { code, message });
        }

        let envelope: SuggestResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;

        Ok(envelope.results)
    }
}
