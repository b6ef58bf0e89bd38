//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn examgrade() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("examgrade").unwrap()
}

#[test]
fn help_output() {
    examgrade()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Offline multiple-choice exam administration and grading",
        ));
}

#[test]
fn version_output() {
    examgrade()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("examgrade"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created examgrade.toml"))
        .stdout(predicate::str::contains("Created exams/sample-exam.json"))
        .stdout(predicate::str::contains(
            "Created answer_keys/sample-exam.json",
        ));

    assert!(dir.path().join("examgrade.toml").exists());
    assert!(dir.path().join("exams/sample-exam.json").exists());
    assert!(dir.path().join("answer_keys/sample-exam.json").exists());
    assert!(dir.path().join("submissions").is_dir());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_sample_exam() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 exam(s)"))
        .stdout(predicate::str::contains("All exams valid"));
}

#[test]
fn validate_reports_key_mismatch() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Truncate the key so it no longer covers every question.
    std::fs::write(
        dir.path().join("answer_keys/sample-exam.json"),
        r#"{"exam_id": "sample-exam", "marks_per_question": 2, "answers": ["Paris"]}"#,
    )
    .unwrap();

    examgrade()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("3 questions"));
}

#[test]
fn list_shows_catalog() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("sample-exam"))
        .stdout(predicate::str::contains("General Knowledge"))
        .stdout(predicate::str::contains("yes"));
}

#[test]
fn take_then_grade_round_trip() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Answer the three sample questions by option number: all correct.
    examgrade()
        .current_dir(dir.path())
        .args(["take", "--exam-id", "sample-exam", "--name", "Ada", "--roll", "R1"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Submission saved"));

    examgrade()
        .current_dir(dir.path())
        .args(["grade", "--exam-id", "sample-exam"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Graded 1 submission(s)"));

    let results = std::fs::read_to_string(dir.path().join("results/results-sample-exam.json"))
        .unwrap();
    assert!(results.contains("\"roll_no\": \"R1\""));
    assert!(results.contains("\"score\": 6"));
    assert!(results.contains("\"max_score\": 6"));
}

#[test]
fn take_rejects_duplicate_submission() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["take", "--exam-id", "sample-exam", "--name", "Ada", "--roll", "R1"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["take", "--exam-id", "sample-exam", "--name", "Ada", "--roll", "R1"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn take_unknown_exam_fails() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["take", "--exam-id", "no-such-exam", "--name", "Ada", "--roll", "R1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn grade_requires_a_key_selector() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("grade")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--exam-id or --answer-key"));
}

#[test]
fn grade_with_missing_key_fails() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["grade", "--exam-id", "unknown-exam"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no answer key found"));
}

#[test]
fn grade_with_malformed_key_fails_without_output() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let key = dir.path().join("broken-key.json");
    std::fs::write(&key, r#"{"exam_id": "sample-exam"}"#).unwrap();

    examgrade()
        .current_dir(dir.path())
        .args(["grade", "--answer-key"])
        .arg(&key)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid answer key"));

    assert!(!dir.path().join("results").exists());
}

#[test]
fn grade_is_idempotent_on_disk() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["take", "--exam-id", "sample-exam", "--name", "Ada", "--roll", "R1"])
        .write_stdin("1\n4\n\n")
        .assert()
        .success();

    let results_path = dir.path().join("results/results-sample-exam.json");

    examgrade()
        .current_dir(dir.path())
        .args(["grade", "--exam-id", "sample-exam"])
        .assert()
        .success();
    let first = std::fs::read(&results_path).unwrap();

    examgrade()
        .current_dir(dir.path())
        .args(["grade", "--exam-id", "sample-exam"])
        .assert()
        .success();
    let second = std::fs::read(&results_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn grade_all_formats() {
    let dir = TempDir::new().unwrap();
    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["take", "--exam-id", "sample-exam", "--name", "Ada", "--roll", "R1"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .args(["grade", "--exam-id", "sample-exam", "--format", "all"])
        .assert()
        .success();

    assert!(dir.path().join("results/results-sample-exam.json").exists());
    assert!(dir.path().join("results/results-sample-exam.csv").exists());
    assert!(dir.path().join("results/results-sample-exam.html").exists());
}
