//! Error taxonomy for the grading pipeline.
//!
//! Two classes with different blast radii: `ConfigError` aborts a grading
//! run before any output is produced, `RecordError` costs exactly one
//! submission and lets the run continue. Keeping them as separate types
//! means callers cannot accidentally absorb a fatal configuration problem
//! with per-record handling.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration problems. A run that hits one of these produces no
/// output at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The answer key file could not be read.
    #[error("failed to read answer key {path}: {source}")]
    KeyUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The answer key is not valid JSON or is missing a required field.
    #[error("invalid answer key {path}: {message}")]
    KeyMalformed { path: PathBuf, message: String },

    /// The answer key parsed but cannot grade anything.
    #[error("answer key for '{exam_id}' is incomplete: {message}")]
    KeyIncomplete { exam_id: String, message: String },

    /// No answer key exists for the requested exam.
    #[error("no answer key found for exam '{exam_id}'")]
    KeyNotFound { exam_id: String },
}

/// Per-record failure: one submission is excluded, the run continues.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The file is not valid JSON, or lacks the required `answers` array.
    #[error("malformed submission {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// The file could not be read at all.
    #[error("unreadable submission {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
