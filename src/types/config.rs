//! Configuration for the embedding seeder.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_EMBEDDING_DIMENSION, DEFAULT_EMBEDDING_MODEL, DEFAULT_LOCATION, DEFAULT_OUTPUT_DIR,
    DEFAULT_OUTPUT_FILE, DEFAULT_REQUEST_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Global seeder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// Cloud project hosting the embedding model
    pub project_id: Option<String>,

    /// Region of the embedding endpoint
    pub location: String,

    /// Embedding model identifier
    pub embedding_model: String,

    /// Output dimension requested from the model, and size of the
    /// zero-vector sentinel
    pub embedding_dimension: usize,

    /// Directory the dataset is written into
    pub output_dir: PathBuf,

    /// File name of the dataset
    pub output_file: String,

    /// Pause after each embedding call, in milliseconds
    pub request_delay_ms: u64,

    /// HTTP timeout per embedding call, in seconds
    pub request_timeout_secs: u64,

    /// Replacement for the predict URL base (proxies, local testing)
    pub endpoint_override: Option<String>,

    /// Bearer token for the embedding endpoint
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: DEFAULT_LOCATION.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            endpoint_override: None,
            access_token: None,
        }
    }
}

impl SeederConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset; unparseable numbers fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            project_id: get("GOOGLE_CLOUD_PROJECT"),
            location: get("GOOGLE_CLOUD_LOCATION")
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            embedding_model: get("EMBEDDING_MODEL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            embedding_dimension: get("EMBEDDING_DIMENSION")
                .and_then(|s| s.parse().ok())
                .filter(|d| *d > 0)
                .unwrap_or(DEFAULT_EMBEDDING_DIMENSION),
            output_dir: get("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            output_file: get("OUTPUT_FILE").unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            request_delay_ms: get("REQUEST_DELAY_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_DELAY_MS),
            request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            endpoint_override: get("VERTEX_ENDPOINT"),
            access_token: get("GOOGLE_ACCESS_TOKEN"),
        }
    }

    /// Full path of the output dataset.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Pause after each embedding call.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// HTTP timeout per embedding call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SeederConfig::from_lookup(lookup(&[]));
        assert_eq!(config.project_id, None);
        assert_eq!(config.location, "us-central1");
        assert_eq!(config.embedding_model, "text-embedding-004");
        assert_eq!(config.embedding_dimension, 768);
        assert_eq!(config.output_path(), PathBuf::from("data").join("resolved_tickets.csv"));
        assert_eq!(config.request_delay(), Duration::from_secs(1));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = SeederConfig::from_lookup(lookup(&[
            ("GOOGLE_CLOUD_PROJECT", "agora-dev"),
            ("GOOGLE_CLOUD_LOCATION", "europe-west4"),
            ("EMBEDDING_DIMENSION", "256"),
            ("OUTPUT_DIR", "/tmp/out"),
            ("REQUEST_DELAY_MS", "0"),
            ("VERTEX_ENDPOINT", "http://127.0.0.1:9000"),
        ]));
        assert_eq!(config.project_id.as_deref(), Some("agora-dev"));
        assert_eq!(config.location, "europe-west4");
        assert_eq!(config.embedding_dimension, 256);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.request_delay(), Duration::ZERO);
        assert_eq!(config.endpoint_override.as_deref(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = SeederConfig::from_lookup(lookup(&[
            ("EMBEDDING_DIMENSION", "0"),
            ("REQUEST_DELAY_MS", "soon"),
            ("GOOGLE_CLOUD_PROJECT", "  "),
        ]));
        assert_eq!(config.embedding_dimension, 768);
        assert_eq!(config.request_delay_ms, 1000);
        assert_eq!(config.project_id, None);
    }
}
