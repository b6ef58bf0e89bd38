//! Exam definition catalog.
//!
//! Loads exam definitions from a directory of JSON files and answers
//! catalog-lookup calls, replacing interactive directory-scan selection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use examgrade_core::model::ExamDefinition;

use crate::error::StoreError;

/// Parse a single exam definition file.
pub fn load_exam(path: &Path) -> Result<ExamDefinition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read exam file: {}", path.display()))?;
    let exam: ExamDefinition = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse exam: {}", path.display()))?;
    Ok(exam)
}

/// Load all `.json` exam definitions from a directory, in filename order.
/// Malformed files are skipped with a warning.
pub fn load_exam_directory(dir: &Path) -> Result<Vec<ExamDefinition>> {
    let mut exams = Vec::new();

    for path in json_files_sorted(dir)? {
        match load_exam(&path) {
            Ok(exam) => exams.push(exam),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(exams)
}

/// List the `.json` files of a directory sorted by filename, for a fixed,
/// reproducible iteration order.
pub(crate) fn json_files_sorted(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    if !dir.is_dir() {
        return Err(StoreError::DirUnreadable {
            dir: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| StoreError::DirUnreadable {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Read-only catalog of exam question sets.
#[derive(Debug, Clone)]
pub struct ExamCatalog {
    dir: PathBuf,
    exams: Vec<ExamDefinition>,
}

impl ExamCatalog {
    /// Load every exam definition under `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let exams = load_exam_directory(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            exams,
        })
    }

    /// All exams, in filename order.
    pub fn list(&self) -> &[ExamDefinition] {
        &self.exams
    }

    /// Look an exam up by id.
    pub fn get(&self, exam_id: &str) -> Result<&ExamDefinition, StoreError> {
        self.exams
            .iter()
            .find(|exam| exam.exam_id == exam_id)
            .ok_or_else(|| StoreError::ExamNotFound {
                exam_id: exam_id.to_string(),
                dir: self.dir.clone(),
            })
    }
}

/// A warning from exam validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The exam id (if attributable).
    pub exam_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a single exam definition for authoring mistakes.
pub fn validate_exam(exam: &ExamDefinition) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if exam.exam_id.trim().is_empty() {
        warnings.push(ValidationWarning {
            exam_id: None,
            message: "exam_id is empty".into(),
        });
    }

    if exam.questions.is_empty() {
        warnings.push(ValidationWarning {
            exam_id: Some(exam.exam_id.clone()),
            message: "exam has no questions".into(),
        });
    }

    for (index, question) in exam.questions.iter().enumerate() {
        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                exam_id: Some(exam.exam_id.clone()),
                message: format!("question {} has no text", index + 1),
            });
        }
        if question.options.is_empty() {
            warnings.push(ValidationWarning {
                exam_id: Some(exam.exam_id.clone()),
                message: format!("question {} has no options", index + 1),
            });
        }
    }

    warnings
}

/// Validate a whole catalog: per-exam warnings plus duplicate-id detection.
pub fn validate_catalog(exams: &[ExamDefinition]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    for exam in exams {
        if !seen_ids.insert(&exam.exam_id) {
            warnings.push(ValidationWarning {
                exam_id: Some(exam.exam_id.clone()),
                message: format!("duplicate exam id: {}", exam.exam_id),
            });
        }
        warnings.extend(validate_exam(exam));
    }

    warnings
}
