//! Submission store.
//!
//! One JSON file per `(roll_no, exam_id)`. Reads are snapshot loads in
//! filename order; writes reject duplicates rather than overwrite.

use std::path::{Path, PathBuf};

use examgrade_core::error::RecordError;
use examgrade_core::model::SubmissionRecord;

use crate::catalog::json_files_sorted;
use crate::error::StoreError;

/// A snapshot of every readable submission in the store, plus the per-file
/// failures that were excluded from it.
#[derive(Debug)]
pub struct SubmissionSnapshot {
    /// Structurally valid records, in filename order.
    pub records: Vec<SubmissionRecord>,
    /// One entry per excluded file.
    pub skipped: Vec<RecordError>,
}

/// File-backed store of submission records.
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    dir: PathBuf,
}

impl SubmissionStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Load every `.json` record in the store, in filename order.
    ///
    /// A file that cannot be read or parsed costs exactly that one record:
    /// it is logged, collected into `skipped`, and the load continues.
    pub fn snapshot(&self) -> Result<SubmissionSnapshot, StoreError> {
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        for path in json_files_sorted(&self.dir)? {
            match load_submission(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("excluding submission: {}", e);
                    skipped.push(e);
                }
            }
        }

        Ok(SubmissionSnapshot { records, skipped })
    }

    /// Persist one submission, rejecting a second attempt for the same
    /// `(roll_no, exam_id)` before anything is written.
    pub fn save(&self, record: &SubmissionRecord) -> Result<PathBuf, StoreError> {
        let roll_no = record.roll_no_or_sentinel();
        let exam_id = record.exam_id.as_deref().unwrap_or("unidentified");
        let path = self.dir.join(format!("{roll_no}_{exam_id}.json"));

        if path.exists() {
            return Err(StoreError::DuplicateSubmission {
                roll_no: roll_no.to_string(),
                exam_id: exam_id.to_string(),
            });
        }

        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::WriteFailed {
            path: self.dir.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, json).map_err(|source| StoreError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

fn load_submission(path: &Path) -> Result<SubmissionRecord, RecordError> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| RecordError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
