//! Error types for pocket query parsing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing a pocket query
#[derive(Debug, Error)]
pub enum PocketQueryError {
    /// Missing or empty configuration value (e.g. no query-owner name)
    #[error("configuration error: {0}")]
    Config(String),

    /// Path does not reference an existing regular file
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Byte buffer is not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Document is not well-formed XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Required element absent (document, waypoint, or log level)
    #[error("missing required element: {0}")]
    MissingElement(String),

    /// Required attribute absent
    #[error("missing required attribute: {0}")]
    MissingAttribute(String),

    /// Element or attribute text did not parse as the expected number
    #[error("invalid {field} value: {value:?}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Raw text that failed to parse
        value: String,
    },

    /// Input document exceeds the size guard
    #[error("document too large: {size} bytes exceeds {limit} bytes limit")]
    TooLarge {
        /// Actual input size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },
}

/// Result type for pocket query operations
pub type Result<T> = std::result::Result<T, PocketQueryError>;
