//! Error handling for tabtex
//!
//! Degenerate input (blank paste, zero data rows) is never an error: the parser
//! returns an empty table and the renderers return an empty string. The variants
//! below cover contract violations at the grid boundary, bad option tokens and
//! the I/O performed by the export helpers.

use std::io;

use thiserror::Error;

/// Error type shared by parsing, grid construction and export
#[derive(Debug, Error)]
pub enum TableError {
    /// A grid row does not have the same width as the first row
    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Unknown float placement token
    #[error("invalid placement '{0}' (expected one of h, t, b, p)")]
    InvalidPlacement(String),

    /// Unknown caption position token
    #[error("invalid caption position '{0}' (expected top or bottom)")]
    InvalidCaptionPosition(String),

    /// Input that is structurally unusable (e.g. a grid document missing a field)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TableError::InvalidInput(message.into())
    }
}

/// Result type for fallible tabtex operations
pub type TableResult<T> = Result<T, TableError>;
