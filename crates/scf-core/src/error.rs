//! Error types for SCF Core
//!
//! Provides error handling for:
//! - Configuration that cannot be resolved before analysis starts
//! - Analysis task failures, tagged with the failing task
//! - Malformed configuration detected during synthesis
//! - Bounded analysis runs that exceed their timeout

use crate::types::TaskKind;
use scf_config::{ConfigError, DocumentKind};

/// Failure inside a single analysis task
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Configuration value has the wrong shape
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Entry in a configuration sequence is missing fields or mistyped
    #[error("invalid entry '{field}': {message}")]
    InvalidEntry {
        /// Offending entry, e.g. `switching_barriers[2]`
        field: String,
        /// Deserializer message
        message: String,
    },
}

impl AnalysisError {
    /// Create invalid-entry error
    #[inline]
    pub fn invalid_entry(field: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidEntry {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Offending configuration field, if the failure is structural
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Config(e) => e.field(),
            Self::InvalidEntry { field, .. } => Some(field),
        }
    }
}

/// Main orchestrator error type
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// Required configuration key unknown; no task was launched
    #[error("configuration not found: {kind} '{key}'")]
    ConfigurationNotFound {
        /// Kind of document requested
        kind: DocumentKind,
        /// Requested key
        key: String,
    },

    /// Configuration value has the wrong shape
    #[error("malformed configuration field '{field}': expected {expected}")]
    MalformedConfiguration {
        /// Offending field path
        field: String,
        /// Expected shape
        expected: &'static str,
    },

    /// Any other configuration failure
    #[error("configuration error: {0}")]
    Config(#[source] ConfigError),

    /// First analysis task to fail
    #[error("analysis task '{task}' failed: {source}")]
    TaskFailed {
        /// Which task failed
        task: TaskKind,
        /// Underlying failure
        #[source]
        source: AnalysisError,
    },

    /// Analysis tasks did not finish in time
    #[error("analysis timed out after {duration_ms}ms")]
    Timeout {
        /// Configured limit
        duration_ms: u64,
    },
}

impl OrchestratorError {
    /// Task that produced the failure
    #[inline]
    #[must_use]
    pub fn failed_task(&self) -> Option<TaskKind> {
        match self {
            Self::TaskFailed { task, .. } => Some(*task),
            _ => None,
        }
    }

    /// Offending configuration field, if the failure is structural
    #[must_use]
    pub fn malformed_field(&self) -> Option<&str> {
        match self {
            Self::MalformedConfiguration { field, .. } => Some(field),
            Self::TaskFailed { source, .. } => source.field(),
            Self::Config(e) => e.field(),
            _ => None,
        }
    }

    /// Whether the failure stems from the request or its configuration
    ///
    /// Such failures are deterministic; repeating the call cannot succeed.
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationNotFound { .. }
                | Self::MalformedConfiguration { .. }
                | Self::TaskFailed { .. }
        )
    }
}

impl From<ConfigError> for OrchestratorError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { kind, key } => Self::ConfigurationNotFound { kind, key },
            ConfigError::Malformed { field, expected } => {
                Self::MalformedConfiguration { field, expected }
            }
            other => Self::Config(other),
        }
    }
}

/// Result type alias for orchestrator operations
pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
