//! Result types with JSON persistence.
//!
//! A `ResultCollection` is the terminal artifact of a grading run. It is
//! fully deterministic — no run ids, no creation timestamps — so grading
//! the same snapshot twice serializes to byte-identical files.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Elapsed exam time in whole seconds, or an explicit marker that the
/// submission's timestamps were missing or unparseable.
///
/// The marker is deliberate: a data-quality gap must never be reported as a
/// zero-second completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeTaken {
    /// Whole seconds between `start_time` and `end_time`.
    Seconds(i64),
    /// One or both timestamps were absent or failed to parse.
    Unavailable,
}

const UNAVAILABLE: &str = "unavailable";

impl fmt::Display for TimeTaken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeTaken::Seconds(secs) => write!(f, "{secs}"),
            TimeTaken::Unavailable => write!(f, "{UNAVAILABLE}"),
        }
    }
}

// Serialized as a bare number or the string "unavailable", matching the
// artifact format rather than an enum encoding.
impl Serialize for TimeTaken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TimeTaken::Seconds(secs) => serializer.serialize_i64(*secs),
            TimeTaken::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for TimeTaken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeTakenVisitor;

        impl Visitor<'_> for TimeTakenVisitor {
            type Value = TimeTaken;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a whole number of seconds or the string \"{UNAVAILABLE}\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TimeTaken, E> {
                Ok(TimeTaken::Seconds(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TimeTaken, E> {
                i64::try_from(v)
                    .map(TimeTaken::Seconds)
                    .map_err(|_| E::custom("seconds value out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TimeTaken, E> {
                if v == UNAVAILABLE {
                    Ok(TimeTaken::Unavailable)
                } else {
                    Err(E::custom(format!("unexpected time marker: {v}")))
                }
            }
        }

        deserializer.deserialize_any(TimeTakenVisitor)
    }
}

/// Derived score and elapsed time for one submission. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Copied verbatim from the submission, or the missing-identity sentinel.
    pub roll_no: String,
    /// Copied verbatim from the submission, or the missing-identity sentinel.
    pub student_name: String,
    /// Matching positions × marks per question.
    pub score: u32,
    /// Key answer count × marks per question.
    pub max_score: u32,
    /// Elapsed time, or the unavailable marker.
    pub time_taken_seconds: TimeTaken,
}

/// The ordered output of one grading run: one entry per evaluated
/// submission, in the order the submissions were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCollection {
    /// Exam the run graded.
    pub exam_id: String,
    /// One record per matching, structurally valid submission.
    pub results: Vec<ResultRecord>,
}

impl ResultCollection {
    /// Save the collection as pretty-printed JSON. Written in one shot after
    /// the run completes; never streamed or partially written.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize results")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        Ok(())
    }

    /// Load a previously saved collection.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read results from {}", path.display()))?;
        let collection: ResultCollection =
            serde_json::from_str(&content).context("failed to parse results JSON")?;
        Ok(collection)
    }
}
