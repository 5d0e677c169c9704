//! Custom error types for the study guide
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for study guide operations
#[derive(Error, Debug)]
pub enum GuideError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// A step index outside the catalog
    #[error("Step {index} is out of range: the guide has {len} steps")]
    StepOutOfRange { index: usize, len: usize },
}

impl GuideError {
    /// Create an out-of-range error for a zero-based step index
    pub fn step_out_of_range(index: usize, len: usize) -> Self {
        Self::StepOutOfRange { index, len }
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::StepOutOfRange { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for GuideError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GuideError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for GuideError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for study guide operations
pub type GuideResult<T> = Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuideError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_out_of_range_error() {
        let err = GuideError::step_out_of_range(7, 5);
        assert_eq!(
            err.to_string(),
            "Step 7 is out of range: the guide has 5 steps"
        );
        assert!(err.is_out_of_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guide_err: GuideError = io_err.into();
        assert!(matches!(guide_err, GuideError::Io(_)));
    }
}
