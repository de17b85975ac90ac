use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning knobs of the search box, shared by the server render and the
/// hydrated client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Path (or URL) of the JSON search index.
    pub index_url: String,
    /// Quiet period before a keystroke triggers a search.
    pub debounce_ms: u64,
    /// Queries shorter than this (in characters) clear the results.
    pub min_query_chars: usize,
    /// Maximum number of rendered results.
    pub max_results: usize,
    /// Length of the content preview used when a document has no excerpt.
    pub excerpt_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_url: "/search.json".to_string(),
            debounce_ms: 300,
            min_query_chars: 2,
            max_results: 10,
            excerpt_chars: 150,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Host configuration.
///
/// Layered from an optional TOML file and then environment variables
/// prefixed with `DOCS_SEARCH__` (for example `DOCS_SEARCH__SEARCH__MAX_RESULTS=20`).
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
    pub search: SearchConfig,
}

#[cfg(feature = "ssr")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: "docs_search=info,tower_http=info".to_string(),
            search: SearchConfig::default(),
        }
    }
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    pub const DEFAULT_FILE: &'static str = "docs-search.toml";
    const ENV_PREFIX: &'static str = "DOCS_SEARCH";

    /// Load the configuration from `path` (if it exists) and the environment.
    pub fn load(path: &std::path::Path) -> Result<Self, crate::error::AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );
        Self::from_builder(builder)
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml(source: &str) -> Result<Self, crate::error::AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml));
        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, crate::error::AppError> {
        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| crate::error::AppError::Config(e.to_string()))
    }
}
