//! Error types for trainxm
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for trainxm
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("{message}")]
    Parse { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code: {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid source entry '{entry}': {message}")]
    InvalidDescriptor { entry: String, message: String },

    // ============================================================================
    // Generation Errors
    // ============================================================================
    #[error("Type generation failed: {message}")]
    Generation { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure category, independent of the carried payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    Network,
    HttpStatus,
    Config,
    Generation,
    Io,
}

impl Error {
    /// Create a not-found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid descriptor error
    pub fn invalid_descriptor(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// Create a generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Network(_) | Error::InvalidUrl(_) => ErrorKind::Network,
            Error::HttpStatus { .. } => ErrorKind::HttpStatus,
            Error::Config { .. } | Error::InvalidDescriptor { .. } => ErrorKind::Config,
            Error::Generation { .. } => ErrorKind::Generation,
            Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Status code carried by an HTTP status error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error makes the whole batch unusable.
    ///
    /// A malformed single entry is not batch-fatal; only a broken task list is.
    pub fn aborts_batch(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

/// Result type alias for trainxm
pub type Result<T> = std::result::Result<T, Error>;
