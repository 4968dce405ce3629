//! Error type for the boundary layer (loading, configuration)
//!
//! Queries never fail; only bootstrapping the service can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for fallible boundary operations
pub type AlertsResult<T> = Result<T, AlertsError>;

#[derive(Debug, Error)]
pub enum AlertsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("configuration error: {0}")]
    Config(String),
}
