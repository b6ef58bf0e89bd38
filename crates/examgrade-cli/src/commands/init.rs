//! The `examgrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create examgrade.toml
    if std::path::Path::new("examgrade.toml").exists() {
        println!("examgrade.toml already exists, skipping.");
    } else {
        std::fs::write("examgrade.toml", SAMPLE_CONFIG)?;
        println!("Created examgrade.toml");
    }

    // Create sample exam
    std::fs::create_dir_all("exams")?;
    let exam_path = std::path::Path::new("exams/sample-exam.json");
    if exam_path.exists() {
        println!("exams/sample-exam.json already exists, skipping.");
    } else {
        std::fs::write(exam_path, SAMPLE_EXAM)?;
        println!("Created exams/sample-exam.json");
    }

    // Create its answer key
    std::fs::create_dir_all("answer_keys")?;
    let key_path = std::path::Path::new("answer_keys/sample-exam.json");
    if key_path.exists() {
        println!("answer_keys/sample-exam.json already exists, skipping.");
    } else {
        std::fs::write(key_path, SAMPLE_KEY)?;
        println!("Created answer_keys/sample-exam.json");
    }

    std::fs::create_dir_all("submissions")?;

    println!("\nNext steps:");
    println!("  1. Run: examgrade list");
    println!("  2. Run: examgrade take --exam-id sample-exam");
    println!("  3. Run: examgrade grade --exam-id sample-exam");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examgrade configuration

exams_dir = "exams"
answer_keys_dir = "answer_keys"
submissions_dir = "submissions"
results_dir = "results"
"#;

const SAMPLE_EXAM: &str = r#"{
    "exam_id": "sample-exam",
    "topic": "General Knowledge",
    "questions": [
        {
            "text": "What is the capital of France?",
            "options": ["Paris", "London", "Berlin", "Madrid"]
        },
        {
            "text": "What is 6 times 7?",
            "options": ["42", "36", "49", "54"]
        },
        {
            "text": "Which planet is known as the Red Planet?",
            "options": ["Mars", "Venus", "Jupiter", "Mercury"]
        }
    ]
}
"#;

const SAMPLE_KEY: &str = r#"{
    "exam_id": "sample-exam",
    "marks_per_question": 2,
    "answers": ["Paris", "42", "Mars"]
}
"#;
