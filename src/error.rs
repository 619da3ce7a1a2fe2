//! Error handling for the LiftLog-RS application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for LiftLog-RS operations
#[derive(Error, Debug)]
pub enum LiftLogError {
    /// Errors related to the workout store (corrupt data, failed writes)
    #[error("Store error: {0}")]
    Store(String),

    /// A requested entity does not exist
    #[error("{kind} not found: id {id}")]
    NotFound { kind: &'static str, id: u64 },

    /// Rejected input (empty routine, bad status transition, etc.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LiftLogError>,
    },
}

impl LiftLogError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LiftLogError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a not-found error for an entity kind
    pub fn not_found(kind: &'static str, id: u64) -> Self {
        LiftLogError::NotFound { kind, id }
    }
}

/// Result type alias for LiftLog-RS operations
pub type Result<T> = std::result::Result<T, LiftLogError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LiftLogError::InvalidInput("routine has no items".to_string());
        assert_eq!(err.to_string(), "Invalid input: routine has no items");
    }

    #[test]
    fn test_not_found_display() {
        let err = LiftLogError::not_found("routine", 42);
        assert_eq!(err.to_string(), "routine not found: id 42");
    }

    #[test]
    fn test_error_with_context() {
        let err = LiftLogError::Store("truncated file".to_string());
        let with_ctx = err.with_context("Failed to open workout store");
        assert!(with_ctx.to_string().contains("Failed to open workout store"));
        assert!(with_ctx.to_string().contains("truncated file"));
    }

    #[test]
    fn test_result_context() {
        let res: Result<()> = Err(LiftLogError::Config("missing data dir".to_string()));
        let res = res.context("Loading app state");
        assert!(res.unwrap_err().to_string().contains("Loading app state"));
    }
}
