//! Error types for filing operations.
//!
//! This module defines [`FilingError`] which covers every failure that can occur
//! while fetching a filing index, downloading a document or reading a workbook.

use thiserror::Error;

/// Errors that can occur during filing operations.
#[derive(Error, Debug)]
pub enum FilingError {
    /// Network-related errors (connection failures, body read failures, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Http {
        /// The response status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// Error parsing a response from the filings API.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The downloaded document could not be opened as a workbook.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// The workbook has no worksheet with the requested name.
    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using [`FilingError`].
pub type Result<T> = std::result::Result<T, FilingError>;
