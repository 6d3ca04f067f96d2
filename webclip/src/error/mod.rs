//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Generator error type
#[derive(Debug, Error)]
pub enum WebclipError {
    /// Operator supplied unusable input (blank path, path is a file, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operator declined to create the destination root
    #[error("Aborted by user")]
    Aborted,

    /// Directory creation, file write or file read failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path the failing operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template document could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Interactive prompt failed (no terminal, closed stdin, ...)
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Two templates share a filename
    #[error("Duplicate template filename: {0}")]
    DuplicateFilename(String),

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Coarse error classification reported to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blank or unusable input
    InvalidInput,
    /// Operator declined
    Aborted,
    /// Filesystem failure
    Io,
    /// Catch-all
    Unexpected,
}

impl WebclipError {
    /// Build an [`WebclipError::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Aborted => ErrorKind::Aborted,
            Self::Io { .. } => ErrorKind::Io,
            Self::Serialize(_)
            | Self::Prompt(_)
            | Self::Config(_)
            | Self::DuplicateFilename(_)
            | Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::InvalidInput
            | ErrorKind::Aborted
            | ErrorKind::Io
            | ErrorKind::Unexpected => 1,
        }
    }
}

impl From<figment::Error> for WebclipError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = WebclipError> = std::result::Result<T, E>;
