//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the file-backed stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A submission for this `(roll_no, exam_id)` already exists. Second
    /// attempts are rejected, never overwritten.
    #[error("submission already exists for roll '{roll_no}' on exam '{exam_id}'")]
    DuplicateSubmission { roll_no: String, exam_id: String },

    /// The requested exam is not in the catalog.
    #[error("exam '{exam_id}' not found in {dir}")]
    ExamNotFound { exam_id: String, dir: PathBuf },

    /// The directory could not be read.
    #[error("failed to read directory {dir}: {source}")]
    DirUnreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file write failed.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded for writing.
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}
