//! Matrix codec error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("matrix JSON error: {0}")]
    Json(#[source] serde_json::Error),

    #[error("matrix document has no \"array\" field")]
    MissingField,

    #[error("matrix is not rectangular: row {row} has {found} columns, expected {expected}")]
    NotRectangular { row: usize, expected: usize, found: usize },

    #[error("matrix value at ({row}, {col}) is not finite")]
    NonFinite { row: usize, col: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;
