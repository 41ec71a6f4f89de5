//! Unified error handling for recase-core.
//!
//! The taxonomy is deliberately small: decoding can fail when flat text
//! carries no recoverable casing structure, and encoding can fail when an
//! [`Identifier`](crate::Identifier) holds a word the target convention
//! cannot spell unambiguously. Everything else is total.

use thiserror::Error;

/// Root error type for codec operations.
///
/// All errors are:
/// - Cloneable (pure values, no live resources)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Decode was given text inconsistent with the source convention in a
    /// way that cannot be structurally resolved.
    #[error("malformed {format} input '{input}': {reason}")]
    MalformedInput {
        format: &'static str,
        input: String,
        reason: String,
    },

    /// Encode was given a word the target convention cannot represent
    /// unambiguously (empty, non-alphanumeric, or mis-cased for its state).
    #[error("word '{word}' cannot be encoded: {reason}")]
    InvalidIdentifierValue { word: String, reason: String },
}

impl CodecError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedInput { format, reason, .. } => vec![
                format!("The input does not parse as {format}: {reason}"),
                "Check that you selected the right source format".into(),
                "Identifiers may only contain letters, digits, and the format's separator".into(),
            ],
            Self::InvalidIdentifierValue { word, reason } => vec![
                format!("The word '{word}' is not encodable: {reason}"),
                "Words must be non-empty and alphanumeric".into(),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedInput { .. } => ErrorCategory::Decode,
            Self::InvalidIdentifierValue { .. } => ErrorCategory::Encode,
        }
    }
}

/// Which direction of the codec the error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Decode,
    Encode,
}

/// Convenient result type alias.
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_is_decode_category() {
        let err = CodecError::MalformedInput {
            format: "underscore",
            input: "the fox".into(),
            reason: "unexpected character ' '".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Decode);
        assert!(err.to_string().contains("underscore"));
    }

    #[test]
    fn invalid_word_is_encode_category() {
        let err = CodecError::InvalidIdentifierValue {
            word: String::new(),
            reason: "empty word".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Encode);
    }

    #[test]
    fn suggestions_are_never_empty() {
        let err = CodecError::InvalidIdentifierValue {
            word: "a_b".into(),
            reason: "contains separator".into(),
        };
        assert!(!err.suggestions().is_empty());
    }
}
