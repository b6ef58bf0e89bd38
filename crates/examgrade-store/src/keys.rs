//! Answer key store.
//!
//! Loading the one key a grading run depends on is fatal on any structural
//! problem; enumerating a directory of keys for listing or validation is
//! skip-and-warn like the other stores.

use std::path::{Path, PathBuf};

use examgrade_core::error::ConfigError;
use examgrade_core::model::{AnswerKey, ExamDefinition};

use crate::catalog::{json_files_sorted, ValidationWarning};
use crate::error::StoreError;

/// Parse a single answer key file. Any failure is a fatal configuration
/// error: a run must refuse to score against a partial key.
pub fn load_answer_key(path: &Path) -> Result<AnswerKey, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::KeyUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::KeyMalformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Keys loaded from a directory, for lookup by exam id.
#[derive(Debug, Clone)]
pub struct AnswerKeyStore {
    keys: Vec<AnswerKey>,
}

impl AnswerKeyStore {
    /// Load every parseable key under `dir`, in filename order, skipping
    /// malformed files with a warning.
    pub fn from_dir(dir: &Path) -> Result<Self, StoreError> {
        let mut keys = Vec::new();
        for path in json_files_sorted(dir)? {
            match load_answer_key(&path) {
                Ok(key) => keys.push(key),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
        Ok(Self { keys })
    }

    /// All loaded keys.
    pub fn list(&self) -> &[AnswerKey] {
        &self.keys
    }

    /// The key for one exam; fatal when absent.
    pub fn get(&self, exam_id: &str) -> Result<&AnswerKey, ConfigError> {
        self.keys
            .iter()
            .find(|key| key.exam_id == exam_id)
            .ok_or_else(|| ConfigError::KeyNotFound {
                exam_id: exam_id.to_string(),
            })
    }

    /// Whether a key exists for the exam.
    pub fn has_key_for(&self, exam_id: &str) -> bool {
        self.keys.iter().any(|key| key.exam_id == exam_id)
    }
}

/// Cross-check a key against its exam definition.
pub fn validate_key_against_exam(
    key: &AnswerKey,
    exam: &ExamDefinition,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if key.answers.len() != exam.questions.len() {
        warnings.push(ValidationWarning {
            exam_id: Some(key.exam_id.clone()),
            message: format!(
                "key has {} answers but exam has {} questions",
                key.answers.len(),
                exam.questions.len()
            ),
        });
    }

    for (index, (answer, question)) in key.answers.iter().zip(exam.questions.iter()).enumerate() {
        let listed = question
            .options
            .iter()
            .any(|option| option.trim().eq_ignore_ascii_case(answer.trim()));
        if !listed {
            warnings.push(ValidationWarning {
                exam_id: Some(key.exam_id.clone()),
                message: format!(
                    "question {}: correct answer '{}' is not among the options",
                    index + 1,
                    answer
                ),
            });
        }
    }

    warnings
}
