//! Core record types for examgrade.
//!
//! These are the persisted artifacts the whole system exchanges: exam
//! definitions, student submissions, and answer keys. Field names match the
//! JSON files on disk and must stay stable.

use serde::{Deserialize, Serialize};

/// Sentinel carried in place of an identity field a submission never had.
pub const MISSING_IDENTITY: &str = "unknown";

/// An authored question set with a unique identifier.
///
/// Immutable once authored; the delivery component reads it, the grading
/// side never needs it (grading works off the answer key alone).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamDefinition {
    /// Unique identifier for this exam.
    pub exam_id: String,
    /// Human-readable topic.
    #[serde(default)]
    pub topic: Option<String>,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the student.
    pub text: String,
    /// Candidate answers, in presentation order. An answer is recorded as
    /// the selected option's literal text, never its index, so reordering
    /// options between authoring and grading does not break scoring.
    pub options: Vec<String>,
}

/// One student's recorded answers and timing for one exam attempt.
///
/// Written once by the delivery component, immutable afterwards, uniquely
/// identified by `(roll_no, exam_id)`. Every field except `answers` is
/// optional at parse time: an absent or malformed field degrades one output
/// field during scoring instead of invalidating the whole record. A record
/// without an `answers` array is structurally invalid and never reaches the
/// scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Exam this submission belongs to. Submissions whose id does not match
    /// the answer key under evaluation are silently skipped.
    #[serde(default)]
    pub exam_id: Option<String>,
    /// Student's name as entered at delivery time.
    #[serde(default)]
    pub student_name: Option<String>,
    /// Roll number; half of the submission's uniqueness key.
    #[serde(default)]
    pub roll_no: Option<String>,
    /// ISO-8601 timestamp stamped before the first question. Kept as the raw
    /// string; parsing happens at scoring time.
    #[serde(default)]
    pub start_time: Option<String>,
    /// ISO-8601 timestamp stamped after the last question.
    #[serde(default)]
    pub end_time: Option<String>,
    /// One entry per question, positionally aligned with the answer key.
    /// A blank answer is an empty string, never absent. The list may be
    /// shorter than the question count if trailing questions were skipped.
    pub answers: Vec<String>,
}

impl SubmissionRecord {
    /// Roll number for display and file naming, with the missing sentinel.
    pub fn roll_no_or_sentinel(&self) -> &str {
        self.roll_no.as_deref().unwrap_or(MISSING_IDENTITY)
    }

    /// Student name for display, with the missing sentinel.
    pub fn student_name_or_sentinel(&self) -> &str {
        self.student_name.as_deref().unwrap_or(MISSING_IDENTITY)
    }
}

/// Authoritative correct answers and per-question weight for one exam.
///
/// Authored once by the grading authority and read-only during scoring.
/// All fields are required: a key that fails to parse is a fatal
/// configuration error, never a degraded record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerKey {
    /// Exam this key grades.
    pub exam_id: String,
    /// Uniform mark value per question. No per-question weighting.
    pub marks_per_question: u32,
    /// Canonical correct answer text per question, positionally aligned
    /// with `SubmissionRecord::answers`.
    pub answers: Vec<String>,
}

impl AnswerKey {
    /// Maximum attainable score under this key.
    pub fn max_score(&self) -> u32 {
        self.answers.len() as u32 * self.marks_per_question
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_optional_fields_default() {
        let json = r#"{"answers": ["Paris", ""]}"#;
        let sub: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert!(sub.exam_id.is_none());
        assert!(sub.start_time.is_none());
        assert_eq!(sub.answers.len(), 2);
        assert_eq!(sub.roll_no_or_sentinel(), MISSING_IDENTITY);
        assert_eq!(sub.student_name_or_sentinel(), MISSING_IDENTITY);
    }

    #[test]
    fn submission_without_answers_is_invalid() {
        let json = r#"{"exam_id": "E1", "roll_no": "R1"}"#;
        assert!(serde_json::from_str::<SubmissionRecord>(json).is_err());
    }

    #[test]
    fn answer_key_requires_all_fields() {
        let missing_marks = r#"{"exam_id": "E1", "answers": ["a"]}"#;
        assert!(serde_json::from_str::<AnswerKey>(missing_marks).is_err());

        let missing_answers = r#"{"exam_id": "E1", "marks_per_question": 2}"#;
        assert!(serde_json::from_str::<AnswerKey>(missing_answers).is_err());
    }

    #[test]
    fn answer_key_max_score() {
        let key = AnswerKey {
            exam_id: "E1".into(),
            marks_per_question: 2,
            answers: vec!["Paris".into(), "42".into(), "blue".into()],
        };
        assert_eq!(key.max_score(), 6);
    }

    #[test]
    fn exam_definition_serde_roundtrip() {
        let exam = ExamDefinition {
            exam_id: "geo-101".into(),
            topic: Some("Geography".into()),
            questions: vec![Question {
                text: "Capital of France?".into(),
                options: vec!["Paris".into(), "Lyon".into()],
            }],
        };
        let json = serde_json::to_string(&exam).unwrap();
        let back: ExamDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back.exam_id, "geo-101");
        assert_eq!(back.questions[0].options.len(), 2);
    }
}
