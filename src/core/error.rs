// src/core/error.rs

// None of these end a scan. Fetch errors become an `Invalid` report, config errors
// fall back to the default rule set and output errors are only shown to the operator.

use std::path::PathBuf;
use thiserror::Error;

/// Why a document could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid or unsupported URL: {0}")]
    InvalidUrl(String),
    #[error("could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },
    #[error("could not read local file {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {0} timed out")]
    Timeout(String),
}

/// Why a configuration file was ignored.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("config must be a mapping of rule names to booleans")]
    NotAMapping,
}

/// Failure persisting the report to the `--output` path.
#[derive(Debug, Error)]
#[error("could not write report to {path}: {source}")]
pub struct OutputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
