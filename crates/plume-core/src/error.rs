//! Error types and handling for Plume formatting operations

use crate::doc::PrintError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Plume operations
#[derive(Debug, Error)]
pub enum PlumeError {
    /// A second rule was registered for a node kind that already has one
    #[error("Rule for node kind \"{node_kind}\" is already registered")]
    DuplicateRule { node_kind: String },

    /// Configuration loading errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// The syntax tree handed over by the parser could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Printer errors
    #[error(transparent)]
    Print(#[from] PrintError),
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Registration,
    Config,
    Parse,
    Io,
    Print,
}

impl PlumeError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlumeError::DuplicateRule { .. } => ErrorKind::Registration,
            PlumeError::ConfigError { .. } => ErrorKind::Config,
            PlumeError::Parse { .. } => ErrorKind::Parse,
            PlumeError::IoError { .. } => ErrorKind::Io,
            PlumeError::Print(_) => ErrorKind::Print,
        }
    }

    /// Registration errors leave the dispatch table ambiguous and cannot be
    /// recovered from. Everything else is scoped to a single input.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Registration)
    }

    /// Create a duplicate-rule registration error
    pub fn duplicate_rule(node_kind: impl Into<String>) -> Self {
        Self::DuplicateRule {
            node_kind: node_kind.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Standard Result type for Plume operations
pub type Result<T> = std::result::Result<T, PlumeError>;
