//! CSV grade sheet export.
//!
//! One row per result record with RFC 4180 quoting; the timing sentinel
//! serializes as the literal `unavailable`.

use std::path::Path;

use anyhow::Result;

use examgrade_core::results::ResultCollection;

/// Quote a field when it contains a delimiter, quote, or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render a result collection as CSV text.
pub fn generate_csv(collection: &ResultCollection) -> String {
    let mut csv = String::from("roll_no,student_name,score,max_score,time_taken_seconds\n");

    for record in &collection.results {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&record.roll_no),
            csv_field(&record.student_name),
            record.score,
            record.max_score,
            record.time_taken_seconds,
        ));
    }

    csv
}

/// Write the CSV grade sheet to a file.
pub fn write_csv_report(collection: &ResultCollection, path: &Path) -> Result<()> {
    let csv = generate_csv(collection);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use examgrade_core::results::{ResultRecord, TimeTaken};

    fn record(roll: &str, name: &str, time: TimeTaken) -> ResultRecord {
        ResultRecord {
            roll_no: roll.into(),
            student_name: name.into(),
            score: 2,
            max_score: 4,
            time_taken_seconds: time,
        }
    }

    #[test]
    fn csv_rows_and_header() {
        let collection = ResultCollection {
            exam_id: "E1".into(),
            results: vec![record("R1", "Ada", TimeTaken::Seconds(330))],
        };
        let csv = generate_csv(&collection);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "roll_no,student_name,score,max_score,time_taken_seconds"
        );
        assert_eq!(lines.next().unwrap(), "R1,Ada,2,4,330");
    }

    #[test]
    fn csv_quotes_awkward_fields() {
        let collection = ResultCollection {
            exam_id: "E1".into(),
            results: vec![record("R1", "Lovelace, Ada \"the first\"", TimeTaken::Unavailable)],
        };
        let csv = generate_csv(&collection);
        assert!(csv.contains("\"Lovelace, Ada \"\"the first\"\"\""));
        assert!(csv.contains(",unavailable"));
    }

    #[test]
    fn csv_write_to_file() {
        let collection = ResultCollection {
            exam_id: "E1".into(),
            results: vec![record("R1", "Ada", TimeTaken::Seconds(10))],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_csv_report(&collection, &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("R1,Ada"));
    }
}
