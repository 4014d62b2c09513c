/*!
 * Error types for the rpydialog application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that stop dialog extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A dialog line names a speaker id that no `define` declared
    #[error("Unknown character id '{id}' in label '{label}' at {origin}:{line_number}: {line}")]
    UnknownCharacter {
        /// The unresolved id
        id: String,
        /// Label the line belongs to
        label: String,
        /// Source the line was read from
        origin: String,
        /// 1-based line number in the source
        line_number: usize,
        /// Trimmed line content
        line: String,
    },
}

/// Errors in the application configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Narrator name is empty
    #[error("Narrator name must not be empty")]
    EmptyNarrator,

    /// Script extension is unusable
    #[error("Invalid script extension: '{0}'")]
    InvalidExtension(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from script processing
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Error from configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
