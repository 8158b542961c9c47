//! Error types for Rowscope.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for Rowscope operations.
#[derive(Error, Debug)]
pub enum RowscopeError {
    /// Errors reported by the collaborating storage/query engine
    /// (malformed queries, missing tables, etc.)
    #[error("Engine error: {0}")]
    Engine(String),

    /// Configuration errors (invalid config file, bad field values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal invariant violations (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RowscopeError {
    /// Creates an engine error with the given message.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Engine(_) => "Engine Error",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using RowscopeError.
pub type Result<T> = std::result::Result<T, RowscopeError>;
