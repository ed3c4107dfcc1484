//! Error types for the assetpath library.
//!
//! The path algorithms themselves are total and never fail. Errors only
//! arise at the edges: building an asset path from an empty string,
//! compiling a sanitizer pattern, loading configuration, or converting a
//! failed pipeline outcome into a `Result`.

use thiserror::Error;

/// Result type alias for operations that may fail with an assetpath error.
///
/// # Examples
///
/// ```
/// use assetpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("Assets/model.prefab".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the assetpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be used for the requested operation.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A segment sanitizer pattern failed to compile.
    #[error("invalid sanitizer pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A pipeline step reported failure.
    ///
    /// The message is exactly the one produced by the failing step.
    #[error("{message}")]
    StepFailed {
        /// Message produced by the failing step.
        message: String,
    },
}

impl Error {
    /// Check if this error came from a failed pipeline step.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetpath::Error;
    ///
    /// let err = Error::StepFailed { message: "boom".into() };
    /// assert!(err.is_step_failure());
    /// ```
    #[must_use]
    pub fn is_step_failure(&self) -> bool {
        matches!(self, Self::StepFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: String::new(),
            reason: "asset path must not be empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "alternate_separator".to_string(),
            message: "must differ from '/'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("alternate_separator"));
        assert!(display.contains("must differ"));
    }

    #[test]
    fn test_step_failed_passes_message_through() {
        let err = Error::StepFailed {
            message: "Target is not Humanoid-model".to_string(),
        };
        assert_eq!(err.to_string(), "Target is not Humanoid-model");
        assert!(err.is_step_failure());
    }

    #[test]
    fn test_invalid_pattern_conversion() {
        let regex_err = regex::Regex::new("[unclosed").unwrap_err();
        let err: Error = regex_err.into();
        assert!(format!("{err}").contains("invalid sanitizer pattern"));
        assert!(!err.is_step_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
