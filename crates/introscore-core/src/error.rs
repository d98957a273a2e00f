//! Error types and exit codes for introscore
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, backend failure)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or unusable rubric, bad phrase file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unusable rubric or phrase file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during introscore operations
#[derive(Error, Debug)]
pub enum ScoreError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("rubric file not found: {path:?}")]
    RubricNotFound { path: PathBuf },

    #[error("invalid rubric in {path:?}: {reason}")]
    InvalidRubric { path: PathBuf, reason: String },

    #[error("invalid phrase file {path:?}: {reason}")]
    InvalidPhraseFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary backend failed: {0}")]
    Dictionary(String),

    #[error("sentiment backend failed: {0}")]
    Sentiment(String),

    #[error("{0}")]
    Other(String),
}

impl ScoreError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ScoreError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unusable rubric file
    pub fn invalid_rubric(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ScoreError::InvalidRubric {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScoreError::UsageError(_) | ScoreError::InvalidValue { .. } => ExitCode::Usage,

            ScoreError::RubricNotFound { .. }
            | ScoreError::InvalidRubric { .. }
            | ScoreError::InvalidPhraseFile { .. } => ExitCode::Data,

            ScoreError::Io(_)
            | ScoreError::Json(_)
            | ScoreError::Dictionary(_)
            | ScoreError::Sentiment(_)
            | ScoreError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            ScoreError::UsageError(_) => "usage_error",
            ScoreError::InvalidValue { .. } => "invalid_value",
            ScoreError::RubricNotFound { .. } => "rubric_not_found",
            ScoreError::InvalidRubric { .. } => "invalid_rubric",
            ScoreError::InvalidPhraseFile { .. } => "invalid_phrase_file",
            ScoreError::Io(_) => "io_error",
            ScoreError::Json(_) => "json_error",
            ScoreError::Dictionary(_) => "dictionary_error",
            ScoreError::Sentiment(_) => "sentiment_error",
            ScoreError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for introscore operations
pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            ScoreError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ScoreError::RubricNotFound {
                path: PathBuf::from("r.csv")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            ScoreError::Dictionary("down".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = ScoreError::invalid_rubric("r.csv", "no 'Overall Rubrics' section");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_rubric");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Overall Rubrics"));
    }

    #[test]
    fn test_exit_code_to_i32() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }
}
