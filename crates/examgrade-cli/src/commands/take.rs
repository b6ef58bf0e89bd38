//! The `examgrade take` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use examgrade_deliver::{administer, ConsolePrompter, StudentIdentity};
use examgrade_store::config::load_config_from;
use examgrade_store::{ExamCatalog, StoreError, SubmissionStore};

pub fn execute(
    config_path: Option<PathBuf>,
    exam_id: String,
    name: Option<String>,
    roll: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let catalog = ExamCatalog::from_dir(&config.exams_dir)?;
    let exam = catalog.get(&exam_id)?;

    let student_name = match name {
        Some(n) => n,
        None => prompt_line("Enter your name: ")?,
    };
    let roll_no = match roll {
        Some(r) => r,
        None => prompt_line("Enter your roll number: ")?,
    };

    println!("\n{}", "-".repeat(40));
    println!("Exam ID: {}", exam.exam_id);
    println!("Topic: {}", exam.topic.as_deref().unwrap_or("N/A"));
    println!("{}", "-".repeat(40));

    let record = administer(
        exam,
        StudentIdentity {
            student_name,
            roll_no,
        },
        &mut ConsolePrompter::new(),
    )?;

    let store = SubmissionStore::new(&config.submissions_dir);
    match store.save(&record) {
        Ok(path) => {
            println!("\nExam completed.");
            println!("Submission saved at: {}", path.display());
            Ok(())
        }
        Err(e @ StoreError::DuplicateSubmission { .. }) => {
            anyhow::bail!("{e}; the earlier submission stands")
        }
        Err(e) => Err(e.into()),
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
