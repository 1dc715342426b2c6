//! Error types for cloudhound.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching or decoding a provider feed.
///
/// Every variant is caught at the orchestration boundary and mapped to a
/// non-match for that provider; no feed failure aborts the overall run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed feed: {0}")]
    Parse(String),

    #[error("invalid CIDR prefix: {0}")]
    Prefix(#[from] ipnetwork::IpNetworkError),

    #[error("CSV decode failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("no download link found on confirmation page")]
    LinkNotFound,
}

/// Result type alias for feed operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Configuration loading and saving errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level CLI errors.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid IP address '{0}'")]
    InvalidIp(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
