//! The `examgrade list` command.

use std::path::PathBuf;

use anyhow::Result;

use examgrade_store::config::load_config_from;
use examgrade_store::{AnswerKeyStore, ExamCatalog};

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    use comfy_table::{Cell, Table};

    let config = load_config_from(config_path.as_deref())?;
    let catalog = ExamCatalog::from_dir(&config.exams_dir)?;

    if catalog.list().is_empty() {
        println!("No exams found in {}. Run `examgrade init` to create a sample.",
            config.exams_dir.display());
        return Ok(());
    }

    let keys = if config.answer_keys_dir.is_dir() {
        Some(AnswerKeyStore::from_dir(&config.answer_keys_dir)?)
    } else {
        None
    };

    let mut table = Table::new();
    table.set_header(vec!["Exam ID", "Topic", "Questions", "Answer Key"]);

    for exam in catalog.list() {
        let has_key = keys
            .as_ref()
            .is_some_and(|store| store.has_key_for(&exam.exam_id));
        table.add_row(vec![
            Cell::new(&exam.exam_id),
            Cell::new(exam.topic.as_deref().unwrap_or("-")),
            Cell::new(exam.questions.len()),
            Cell::new(if has_key { "yes" } else { "no" }),
        ]);
    }

    println!("{table}");
    Ok(())
}
