//! The scoring engine.
//!
//! Consumes one answer key and a snapshot of candidate submissions, and
//! produces one result per submission that belongs to the key's exam. The
//! engine itself has no side effects beyond the returned collection;
//! persistence is the caller's concern.

use chrono::{DateTime, NaiveDateTime};

use crate::error::ConfigError;
use crate::model::{AnswerKey, SubmissionRecord};
use crate::results::{ResultCollection, ResultRecord, TimeTaken};

/// Grades submissions against a single validated answer key.
pub struct ScoringEngine {
    key: AnswerKey,
}

impl ScoringEngine {
    /// Validate the key and build an engine for it.
    ///
    /// A key with an empty `exam_id` or an empty answer list is refused
    /// outright: scoring against a partial key would silently misgrade
    /// every submission.
    pub fn new(key: AnswerKey) -> Result<Self, ConfigError> {
        if key.exam_id.trim().is_empty() {
            return Err(ConfigError::KeyIncomplete {
                exam_id: key.exam_id.clone(),
                message: "exam_id is empty".into(),
            });
        }
        if key.answers.is_empty() {
            return Err(ConfigError::KeyIncomplete {
                exam_id: key.exam_id.clone(),
                message: "answers list is empty".into(),
            });
        }
        Ok(Self { key })
    }

    /// The key this engine grades against.
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// Grade every submission belonging to this engine's exam.
    ///
    /// Submissions with an absent or different `exam_id` are expected
    /// cross-exam noise and are skipped without error. Output order is the
    /// iteration order of `submissions`; no re-sorting.
    pub fn evaluate(&self, submissions: &[SubmissionRecord]) -> ResultCollection {
        let mut results = Vec::new();

        for submission in submissions {
            match submission.exam_id.as_deref() {
                Some(id) if id == self.key.exam_id => {}
                other => {
                    tracing::debug!(
                        roll_no = submission.roll_no_or_sentinel(),
                        submission_exam = other.unwrap_or("<none>"),
                        key_exam = %self.key.exam_id,
                        "skipping submission from another exam"
                    );
                    continue;
                }
            }
            results.push(self.grade(submission));
        }

        ResultCollection {
            exam_id: self.key.exam_id.clone(),
            results,
        }
    }

    fn grade(&self, submission: &SubmissionRecord) -> ResultRecord {
        if submission.answers.len() > self.key.answers.len() {
            tracing::warn!(
                roll_no = submission.roll_no_or_sentinel(),
                given = submission.answers.len(),
                expected = self.key.answers.len(),
                "submission has more answers than the key; extra entries ignored"
            );
        }

        // zip truncates to the shorter list: trailing questions a student
        // left blank count as wrong, and stray extra entries never score.
        let matches = submission
            .answers
            .iter()
            .zip(self.key.answers.iter())
            .filter(|(given, correct)| answers_match(given, correct))
            .count() as u32;

        ResultRecord {
            roll_no: submission.roll_no_or_sentinel().to_string(),
            student_name: submission.student_name_or_sentinel().to_string(),
            score: matches * self.key.marks_per_question,
            max_score: self.key.max_score(),
            time_taken_seconds: elapsed_seconds(
                submission.start_time.as_deref(),
                submission.end_time.as_deref(),
            ),
        }
    }
}

/// Two answers match iff they are identical after trimming leading and
/// trailing whitespace and folding case. No semantic equivalence: "A" and
/// "Option A" never match.
pub fn answers_match(given: &str, correct: &str) -> bool {
    normalize(given) == normalize(correct)
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whole seconds between two raw timestamps, or the unavailable marker when
/// either is absent or unparseable.
fn elapsed_seconds(start: Option<&str>, end: Option<&str>) -> TimeTaken {
    match (
        start.and_then(parse_timestamp),
        end.and_then(parse_timestamp),
    ) {
        (Some(start), Some(end)) => TimeTaken::Seconds((end - start).num_seconds()),
        _ => TimeTaken::Unavailable,
    }
}

/// Accepts RFC 3339 (offset-aware) or naive ISO-8601 timestamps, the two
/// forms delivery components have written historically.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    raw.parse::<NaiveDateTime>().ok()
}
