//! Errors raised while validating exam records and loading result files.

use std::path::PathBuf;

use thiserror::Error;

/// A student score outside the permitted range 1-5.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("score value ({value}) out of range 1-5")]
pub struct ScoreError {
    /// The rejected value.
    pub value: i64,
}

/// Errors raised while constructing an [`Exam`](crate::model::Exam).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExamError {
    /// A slot received the wrong kind of participant.
    #[error("exam {slot} slot expects {expected}, got {found}")]
    Property {
        slot: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The date string does not match `DD-MM-YYYYTHH:MM`.
    #[error("invalid exam date {value:?}: expected DD-MM-YYYYTHH:MM ({reason})")]
    Date { value: String, reason: String },
}

/// Why a single raw record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record (or a nested section) is not a JSON object.
    #[error("{path} is not an object")]
    NotAnObject { path: String },

    /// A required field is absent.
    #[error("missing field `{path}`")]
    MissingField { path: String },

    /// A field is present but holds the wrong kind of value.
    #[error("field `{path}` must be {expected}")]
    InvalidType { path: String, expected: &'static str },

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Exam(#[from] ExamError),
}

/// Failure to load the whole results file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON array of exam records", .path.display())]
    NotAnArray { path: PathBuf },
}

impl RecordError {
    /// Returns `true` if the record failed domain validation rather than
    /// structural lookup.
    pub fn is_validation(&self) -> bool {
        matches!(self, RecordError::Score(_) | RecordError::Exam(_))
    }
}
