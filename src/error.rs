//! Error types for gendata
//!
//! This module defines the error hierarchy for the whole pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! A generation call either succeeds completely or surfaces exactly one of these.

use thiserror::Error;

/// The main error type for gendata
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Language \"{lang}\" is not supported (available: {available})")]
    UnknownLanguage { lang: String, available: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("{what} is empty")]
    EmptyInput { what: String },

    #[error("Data format '{format}' is not supported, only 'json' is allowed")]
    UnsupportedDataFormat { format: String },

    #[error("Unsupported root value: expected a JSON object or array, got {kind}")]
    UnsupportedRoot { kind: String },

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Syntax error: {message} at offset {offset}")]
    Syntax {
        message: String,
        tag: String,
        offset: usize,
    },

    #[error("Template error in '{name}': {message}")]
    Template { name: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an empty input error ("template", "data", ...)
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyInput { what: what.into() }
    }

    /// Create a macro syntax error for an unbalanced or repeated tag
    pub fn syntax(message: impl Into<String>, tag: impl Into<String>, offset: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            tag: tag.into(),
            offset,
        }
    }

    /// Create a template error
    pub fn template(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wrap a minijinja failure with the identity of the template that raised it
    pub fn from_minijinja(name: impl Into<String>, err: &minijinja::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        Self::template(name, message)
    }

    /// Check if this error was caused by the caller's input rather than the environment
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Other(_))
    }
}

/// Result type alias for gendata
pub type Result<T> = std::result::Result<T, Error>;
