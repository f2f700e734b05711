//! Error types for dndate-state.

use std::path::PathBuf;

use dndate_calendar::CalendarError;

/// Error type for all fallible operations in the dndate-state crate.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Returned when the state file cannot be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when the state is not valid JSON or does not match the
    /// calendar state shape.
    #[error("invalid state JSON: {reason}")]
    Json {
        /// Description of the serde failure.
        reason: String,
    },

    /// Returned when the state was written by a newer schema.
    #[error("unsupported schema version {version} (newest supported is {supported})")]
    UnsupportedSchema {
        /// Version found in the state.
        version: u32,
        /// Newest version this crate understands.
        supported: u32,
    },

    /// Returned when a state document is structurally unusable.
    #[error("malformed state: {reason}")]
    Malformed {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the stored calendar fails validation.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl StateError {
    pub(crate) fn json(e: serde_json::Error) -> Self {
        Self::Json {
            reason: e.to_string(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
