//! Error types for gitbr

use thiserror::Error;

/// Result type alias for gitbr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gitbr operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external command could not be spawned or terminated abnormally
    #[error("Failed to run `{command}`: {message}")]
    Execution {
        /// The command line that was attempted
        command: String,
        /// What went wrong
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an execution error for a program invocation
    pub fn execution(program: &str, args: &[&str], message: impl Into<String>) -> Self {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");

        Self::Execution {
            command,
            message: message.into(),
        }
    }
}
