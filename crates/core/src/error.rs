//! Matching error model.

use thiserror::Error;

/// Result type used across the matching layer.
pub type MatchResult<T> = Result<T, MatchError>;

/// Matching-level error.
///
/// "No match" is never an error; these cover inputs that cannot take part in
/// matching at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A manufacturer name or product keyword did not compile as a pattern.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A value failed validation (e.g. unknown configuration value).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl MatchError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
