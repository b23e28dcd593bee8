use std::io;

use thiserror::Error;

use super::validation::ValidationError;

/// Library-wide error type for seo-brief operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The form record failed the validation gate.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Input file extension is not one of json, yaml, yml, toml.
    #[error("Unsupported input format '{0}': expected .json, .yaml, .yml or .toml")]
    UnsupportedInputFormat(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Clipboard access or write failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Prompt assembly aborted unexpectedly.
    #[error("An error occurred while generating the prompt. Please try again.")]
    PromptBuildFailed,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}
