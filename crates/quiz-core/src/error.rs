//! Error types for the personality quiz.

use thiserror::Error;

/// A shared error type for the quiz workspace.
///
/// User-correctable input (a malformed answer, an early results request) is
/// answered with a guidance message by the router and never becomes an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Value rejected while parsing a domain type
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuizError {
    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, QuizError>`.
pub type Result<T> = std::result::Result<T, QuizError>;
