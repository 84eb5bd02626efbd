//! Error types for voxfit_io crate.
//!
//! Field-level problems in a loaded document are never errors; they resolve to
//! defaults and are reported through [`crate::fields::LoadOutcome`]. The
//! variants here cover malformed documents and the file boundary.

use thiserror::Error;

/// Main error type for voxfit_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Markup serialization or parsing errors
    #[error("Markup error: {0}")]
    Markup(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for voxfit_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a new markup error.
    #[must_use]
    pub fn markup<S: Into<String>>(msg: S) -> Self {
        Self::Markup(msg.into())
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a new not found error.
    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::markup("unexpected end tag");
        assert_eq!(err.to_string(), "Markup error: unexpected end tag");
    }

    #[test]
    fn test_error_context() {
        let err = IoError::not_found("Voxelyze_Sim_Result").with_context("reading result.xml");
        let msg = err.to_string();
        assert!(msg.contains("reading result.xml"));
        assert!(msg.contains("Voxelyze_Sim_Result"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::FileSystem(_)));
    }
}
