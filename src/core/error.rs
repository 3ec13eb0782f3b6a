//! Error types for the star forge
//!
//! This module provides structured error handling using thiserror.
//! The pure pipeline can only fail with [`StarmapError::Encoding`]; the other
//! variants belong to configuration loading and report persistence.

use thiserror::Error;

use super::encoder::Charset;

/// Result type alias for starmap operations
pub type Result<T> = std::result::Result<T, StarmapError>;

/// Errors that can occur while forging, charting or saving stars
#[derive(Error, Debug)]
pub enum StarmapError {
    /// Input text holds a character the declared charset cannot represent
    #[error("cannot encode {character:?} at position {position} as {charset}")]
    Encoding {
        charset: Charset,
        character: char,
        position: usize,
    },

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StarmapError>,
    },
}

impl StarmapError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StarmapError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        StarmapError::InvalidConfig {
            message: message.into(),
        }
    }

    /// True when this error (or the error it wraps) is an encoding failure.
    pub fn is_encoding(&self) -> bool {
        match self {
            StarmapError::Encoding { .. } => true,
            StarmapError::WithContext { source, .. } => source.is_encoding(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_display() {
        let err = StarmapError::Encoding {
            charset: Charset::Ascii,
            character: 'é',
            position: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'é'"));
        assert!(msg.contains("position 3"));
        assert!(msg.contains("ascii"));
    }

    #[test]
    fn test_error_with_context() {
        let err = StarmapError::invalid_config("bad value");
        let wrapped = err.with_context("loading config");
        assert!(wrapped.to_string().contains("loading config"));
        assert!(wrapped.to_string().contains("bad value"));
    }

    #[test]
    fn test_is_encoding_sees_through_context() {
        let err = StarmapError::Encoding {
            charset: Charset::Latin1,
            character: 'ж',
            position: 0,
        }
        .with_context("word #1");
        assert!(err.is_encoding());
        assert!(!StarmapError::invalid_config("x").is_encoding());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StarmapError = io_err.into();
        assert!(matches!(err, StarmapError::Io(_)));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(StarmapError::invalid_config("test"));
        let err = result.context("during processing").unwrap_err();
        assert!(err.to_string().contains("during processing"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: StarmapError = json_err.into();
        assert!(matches!(err, StarmapError::Json(_)));
    }
}
