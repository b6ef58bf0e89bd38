//! The `examgrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examgrade_store::catalog::{load_exam_directory, validate_catalog};
use examgrade_store::config::load_config_from;
use examgrade_store::keys::validate_key_against_exam;
use examgrade_store::AnswerKeyStore;

pub fn execute(
    config_path: Option<PathBuf>,
    exams: Option<PathBuf>,
    answer_keys: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let exams_dir = exams.unwrap_or_else(|| config.exams_dir.clone());
    let keys_dir = answer_keys.unwrap_or_else(|| config.answer_keys_dir.clone());

    let exams = load_exam_directory(&exams_dir)?;
    println!("Exam catalog: {} exam(s)", exams.len());

    let mut warnings = validate_catalog(&exams);

    if keys_dir.is_dir() {
        let keys = AnswerKeyStore::from_dir(&keys_dir)?;
        for exam in &exams {
            match keys.get(&exam.exam_id) {
                Ok(key) => warnings.extend(validate_key_against_exam(key, exam)),
                Err(_) => {
                    println!("  [{}] NOTE: no answer key on file", exam.exam_id);
                }
            }
        }
    }

    for w in &warnings {
        let prefix = w
            .exam_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All exams valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
