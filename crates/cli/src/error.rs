// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Boxed error raised by an analyzer or attribution backend.
pub type CollaboratorSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Culprit error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or missing argument
    #[error("validation error: {0}")]
    Validation(String),

    /// Keys not accepted by a typed option set
    #[error("validation error: unknown {context} key(s): {}", .keys.join(", "))]
    UnknownKeys { context: String, keys: Vec<String> },

    /// Target file does not exist
    #[error("validation error: file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Line number outside the attributed range
    #[error("line {line} out of range (file has {count} attributed lines)")]
    OutOfRange { line: u32, count: usize },

    /// Failure surfaced by the analyzer or the attribution backend
    #[error("{name}: {source}")]
    Collaborator {
        name: &'static str,
        #[source]
        source: CollaboratorSource,
    },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap a collaborator failure, keeping the original error as source.
    pub fn collaborator(name: &'static str, err: anyhow::Error) -> Self {
        Error::Collaborator {
            name,
            source: err.into(),
        }
    }

    /// True for the validation class (bad arguments, unknown keys, missing file).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::UnknownKeys { .. } | Error::FileNotFound { .. }
        )
    }
}

/// Result type using culprit Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Nothing to report
    Success = 0,
    /// Violations were reported
    ViolationsFound = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Collaborator or internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation(_) | Error::UnknownKeys { .. } | Error::FileNotFound { .. } => {
                ExitCode::ConfigError
            }
            Error::Config { .. } => ExitCode::ConfigError,
            Error::OutOfRange { .. } => ExitCode::InternalError,
            Error::Collaborator { .. } | Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
