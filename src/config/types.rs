// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_THRESHOLD: f64 = 0.3;
pub const DEFAULT_LIMIT: usize = 12;
pub const DEFAULT_LOCATION_DISTANCE: usize = 100;
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Matching algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchAlgorithm {
    /// Edit-distance substring alignment, tolerant of typos
    #[default]
    Approximate,
    /// fzf-style subsequence scoring
    Subsequence,
}

/// Catalog configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the embedded sample catalog is used when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Search configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Maximum normalized distance a match may have (0.0 = exact, 1.0 = anything)
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Maximum number of suggestions returned per query
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub algorithm: MatchAlgorithm,
    /// Characters from the start of a description at which a match costs a full unit of distance
    #[serde(default = "default_location_distance")]
    pub location_distance: usize,
    #[serde(default)]
    pub ignore_location: bool,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_location_distance() -> usize {
    DEFAULT_LOCATION_DISTANCE
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            algorithm: MatchAlgorithm::Approximate,
            location_distance: DEFAULT_LOCATION_DISTANCE,
            ignore_location: false,
        }
    }
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: default_bind(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Client configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of a running suggestion server, e.g. "http://127.0.0.1:3000"
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_client_timeout_ms")]
    pub timeout_ms: u64,
    /// Extra attempts after the first failed remote call
    #[serde(default = "default_retries")]
    pub retries: u32,
}

fn default_client_timeout_ms() -> u64 {
    2000
}

fn default_retries() -> u32 {
    1
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: None,
            timeout_ms: default_client_timeout_ms(),
            retries: default_retries(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
