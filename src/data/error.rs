//! Dataset store error types

use std::path::PathBuf;

use thiserror::Error;

use crate::data::purpose::DatasetPurpose;

/// Failures surfaced by [`DatasetStore`](crate::data::store::DatasetStore).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no {purpose} dataset found at {path}")]
    NotFound { purpose: DatasetPurpose, path: PathBuf },

    #[error("malformed dataset document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::Io { path: path.into(), source }
    }
}

/// Failures loading a [`DatasetConfig`](crate::data::datasets::DatasetConfig) file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
