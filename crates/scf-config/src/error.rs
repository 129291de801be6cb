//! Error types for configuration resolution
//!
//! Covers:
//! - Lookups that violate a `Required` resolution policy
//! - Documents whose values have the wrong shape for a known key
//! - Directory loading (io, syntax, duplicate keys, unsupported formats)

use crate::provider::DocumentKind;
use std::path::PathBuf;

/// Configuration layer error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Key absent and the document kind has no default
    #[error("{kind} configuration '{key}' not found")]
    NotFound {
        /// Kind of document requested
        kind: DocumentKind,
        /// Requested key
        key: String,
    },

    /// Value present but structurally wrong
    #[error("malformed configuration field '{field}': expected {expected}")]
    Malformed {
        /// Offending field path
        field: String,
        /// Human-readable description of the expected shape
        expected: &'static str,
    },

    /// Syntax error in a configuration file
    #[error("syntax error in {path}: {message}")]
    Syntax {
        /// File that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// IO error while reading configuration
    #[error("io error reading {path}: {source}")]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Two files in one directory map to the same key
    #[error("duplicate {kind} configuration '{key}': {first} and {second}")]
    DuplicateKey {
        /// Kind of document
        kind: DocumentKind,
        /// Shared file stem
        key: String,
        /// File seen first
        first: PathBuf,
        /// Conflicting file
        second: PathBuf,
    },

    /// File extension not recognised as a document format
    #[error("unsupported configuration format: '{0}'")]
    UnsupportedFormat(String),

    /// Configuration root is not a directory
    #[error("configuration root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

impl ConfigError {
    /// Create malformed-field error
    #[inline]
    pub fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::Malformed {
            field: field.into(),
            expected,
        }
    }

    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Field name for `Malformed` errors
    #[inline]
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Malformed { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
