//! examgrade-deliver — The exam delivery component.
//!
//! Presents an exam's questions through a `Prompter` and produces exactly
//! one `SubmissionRecord` per sitting. The prompter is the only seam to the
//! terminal, so the session logic is testable with a scripted
//! implementation.

use anyhow::Result;
use chrono::Utc;

use examgrade_core::model::{ExamDefinition, Question, SubmissionRecord};

pub mod console;
pub mod scripted;

pub use console::ConsolePrompter;
pub use scripted::ScriptedPrompter;

/// Who is sitting the exam.
#[derive(Debug, Clone)]
pub struct StudentIdentity {
    pub student_name: String,
    pub roll_no: String,
}

/// Collects one raw answer line per question.
pub trait Prompter {
    /// Present question `index` (0-based) and return the student's raw
    /// input. An empty line means the question was left blank.
    fn read_answer(&mut self, index: usize, question: &Question) -> std::io::Result<String>;
}

/// Administer one exam sitting and build its submission record.
///
/// Timing is stamped around the questions: `start_time` before the first
/// prompt, `end_time` after the last. The record always carries every
/// identity and timing field; persistence (and duplicate rejection) is the
/// submission store's job.
pub fn administer(
    exam: &ExamDefinition,
    identity: StudentIdentity,
    prompter: &mut dyn Prompter,
) -> Result<SubmissionRecord> {
    let start_time = now_stamp();

    let mut answers = Vec::with_capacity(exam.questions.len());
    for (index, question) in exam.questions.iter().enumerate() {
        let raw = prompter.read_answer(index, question)?;
        answers.push(resolve_answer(&raw, question));
    }

    let end_time = now_stamp();

    tracing::info!(
        exam_id = %exam.exam_id,
        roll_no = %identity.roll_no,
        questions = exam.questions.len(),
        "exam sitting complete"
    );

    Ok(SubmissionRecord {
        exam_id: Some(exam.exam_id.clone()),
        student_name: Some(identity.student_name),
        roll_no: Some(identity.roll_no),
        start_time: Some(start_time),
        end_time: Some(end_time),
        answers,
    })
}

/// Turn one raw input line into the recorded answer.
///
/// A 1-based number selecting an option records that option's literal text
/// (answers are stored as text, never as an index). An empty line records a
/// blank. Anything else is recorded as typed, trimmed.
pub fn resolve_answer(raw: &str, question: &Question) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(choice) = trimmed.parse::<usize>() {
        if choice >= 1 && choice <= question.options.len() {
            return question.options[choice - 1].clone();
        }
    }
    trimmed.to_string()
}

fn now_stamp() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
