//! Shared error and exit-code handling for CLI commands.

use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// A command-level error with a category for exit-code mapping.
///
/// Clap owns usage errors (exit code 2); everything a command itself can
/// fail on maps to exit code 1 with a message on stderr.
#[derive(Debug)]
pub enum CliError {
    /// Bad input: invalid values, unknown names, malformed files.
    Validation(String),
    /// File system or serialization failure.
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Io(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}
