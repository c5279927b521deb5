//! # Error Types

use crate::support::regex::ErrorWrapper;

/// Errors from mailprep operations.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// A required special token is missing from the vocabulary.
    #[error("vocabulary has no entry for special token {token:?}")]
    MissingSpecialToken {
        /// The missing token.
        token: String,
    },

    /// Token index out of range for the target type.
    #[error("token index ({index}) out of range for the index type")]
    TokenOutOfRange {
        /// The index which did not fit.
        index: u64,
    },

    /// The preparer configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (vocab lines, integers, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Regex compile or match failure.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),
}

/// Result type for mailprep operations.
pub type PrepResult<T> = core::result::Result<T, PrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PrepError::MissingSpecialToken {
            token: "<pad>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "vocabulary has no entry for special token \"<pad>\""
        );

        let err = PrepError::TokenOutOfRange { index: 70_000 };
        assert_eq!(
            err.to_string(),
            "token index (70000) out of range for the index type"
        );
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PrepError = io.into();
        assert!(matches!(err, PrepError::Io(_)));
        assert_eq!(err.to_string(), "gone");
    }
}
