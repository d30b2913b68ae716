//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration problems; resolution cannot produce a bar
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ProgressBarFeature: Invalid configuration")]
    Missing,

    #[error("ProgressBarFeature: Must pass entity or attribute")]
    NoProgressSource,

    #[error("failed to read scenario file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse scenario JSON in {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
