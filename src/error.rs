//! Error types for multi-pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for multi-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid page number {page}: pages start at 1")]
    InvalidPage { page: usize },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Source Errors
    // ============================================================================
    #[error("Source '{source_name}' failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("Source '{source_name}' returned {actual} items, expected {expected}")]
    ShortFetch {
        source_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Source '{source_name}' returned {actual} items for a limit of {limit}")]
    OverFetch {
        source_name: String,
        limit: usize,
        actual: usize,
    },

    #[error("No data source registered at index {index}")]
    SourceIndex { index: usize },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a source error
    pub fn source_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a context error wrapping `source`
    pub fn context(message: impl Into<String>, source: Error) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through any added context
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this error was raised before any source was touched
    pub fn is_config_error(&self) -> bool {
        matches!(
            self.root(),
            Error::Config { .. }
                | Error::InvalidPage { .. }
                | Error::YamlParse(_)
                | Error::JsonParse(_)
        )
    }

    /// Check if this error originates from a data source
    pub fn is_source_error(&self) -> bool {
        matches!(
            self.root(),
            Error::Source { .. }
                | Error::ShortFetch { .. }
                | Error::OverFetch { .. }
                | Error::SourceIndex { .. }
                | Error::Anyhow(_)
        )
    }
}

/// Result type alias for multi-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::context(message, e.into()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::context(f(), e.into()))
    }
}
