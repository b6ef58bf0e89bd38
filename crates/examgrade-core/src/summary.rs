//! Aggregate statistics over a grading run.

use serde::{Deserialize, Serialize};

use crate::results::{ResultCollection, TimeTaken};

/// Summary figures for one graded exam, for the CLI table and report
/// headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSummary {
    /// Number of graded submissions.
    pub graded: usize,
    /// Mean score across graded submissions (0.0 when none).
    pub mean_score: f64,
    /// Highest score awarded.
    pub highest: u32,
    /// Lowest score awarded.
    pub lowest: u32,
    /// Submissions that scored the maximum.
    pub full_marks: usize,
    /// Results whose elapsed time was unavailable.
    pub timing_gaps: usize,
    /// Mean elapsed seconds over results that have a time (None when none do).
    pub mean_time_seconds: Option<f64>,
}

/// Compute summary statistics for a result collection.
pub fn summarize(collection: &ResultCollection) -> GradeSummary {
    let graded = collection.results.len();

    let mut highest = 0u32;
    let mut lowest = u32::MAX;
    let mut total = 0u64;
    let mut full_marks = 0usize;
    let mut timing_gaps = 0usize;
    let mut time_total = 0i64;
    let mut timed = 0usize;

    for record in &collection.results {
        highest = highest.max(record.score);
        lowest = lowest.min(record.score);
        total += u64::from(record.score);
        if record.score == record.max_score {
            full_marks += 1;
        }
        match record.time_taken_seconds {
            TimeTaken::Seconds(secs) => {
                time_total += secs;
                timed += 1;
            }
            TimeTaken::Unavailable => timing_gaps += 1,
        }
    }

    GradeSummary {
        graded,
        mean_score: if graded == 0 {
            0.0
        } else {
            total as f64 / graded as f64
        },
        highest,
        lowest: if graded == 0 { 0 } else { lowest },
        full_marks,
        timing_gaps,
        mean_time_seconds: if timed == 0 {
            None
        } else {
            Some(time_total as f64 / timed as f64)
        },
    }
}
