//! The `examgrade grade` command.

use std::path::PathBuf;

use anyhow::Result;

use examgrade_core::engine::ScoringEngine;
use examgrade_core::results::ResultCollection;
use examgrade_core::summary::summarize;
use examgrade_store::config::load_config_from;
use examgrade_store::keys::load_answer_key;
use examgrade_store::{AnswerKeyStore, SubmissionStore};
use examgrade_report::{write_csv_report, write_html_report};

pub fn execute(
    config_path: Option<PathBuf>,
    exam_id: Option<String>,
    answer_key_path: Option<PathBuf>,
    submissions: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    // Any problem with the key is fatal before a single submission is read.
    let key = match (&answer_key_path, &exam_id) {
        (Some(path), _) => load_answer_key(path)?,
        (None, Some(id)) => {
            let store = AnswerKeyStore::from_dir(&config.answer_keys_dir)?;
            store.get(id)?.clone()
        }
        (None, None) => {
            anyhow::bail!("pass either --exam-id or --answer-key to select the key to grade with")
        }
    };

    let engine = ScoringEngine::new(key)?;
    tracing::info!(exam_id = %engine.key().exam_id, "grading run starting");

    let submissions_dir = submissions.unwrap_or_else(|| config.submissions_dir.clone());
    let snapshot = SubmissionStore::new(&submissions_dir).snapshot()?;
    if !snapshot.skipped.is_empty() {
        eprintln!(
            "Warning: {} submission file(s) were malformed and excluded.",
            snapshot.skipped.len()
        );
    }

    let collection = engine.evaluate(&snapshot.records);

    print_results(&collection);

    // Artifacts are written only after the whole run evaluated.
    let output_dir = output.unwrap_or_else(|| config.results_dir.clone());
    std::fs::create_dir_all(&output_dir)?;
    let stem = format!("results-{}", collection.exam_id);

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "csv", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output_dir.join(format!("{stem}.json"));
                collection.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "csv" => {
                let path = output_dir.join(format!("{stem}.csv"));
                write_csv_report(&collection, &path)?;
                eprintln!("CSV grade sheet: {}", path.display());
            }
            "html" => {
                let path = output_dir.join(format!("{stem}.html"));
                write_html_report(&collection, &path)?;
                eprintln!("HTML grade sheet: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_results(collection: &ResultCollection) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Roll No", "Student", "Score", "Max", "Time (s)"]);

    for record in &collection.results {
        table.add_row(vec![
            Cell::new(&record.roll_no),
            Cell::new(&record.student_name),
            Cell::new(record.score),
            Cell::new(record.max_score),
            Cell::new(record.time_taken_seconds.to_string()),
        ]);
    }

    eprintln!("\n{table}");

    let summary = summarize(collection);
    eprintln!(
        "\nGraded {} submission(s) for '{}': mean {:.1}, highest {}, lowest {}, {} with full marks",
        summary.graded,
        collection.exam_id,
        summary.mean_score,
        summary.highest,
        summary.lowest,
        summary.full_marks,
    );
    if summary.timing_gaps > 0 {
        eprintln!(
            "{} result(s) have no usable timing data.",
            summary.timing_gaps
        );
    }
}
