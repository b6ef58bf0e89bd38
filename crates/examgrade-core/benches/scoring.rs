use criterion::{black_box, criterion_group, criterion_main, Criterion};

use examgrade_core::engine::ScoringEngine;
use examgrade_core::model::{AnswerKey, SubmissionRecord};

fn make_key(questions: usize) -> AnswerKey {
    AnswerKey {
        exam_id: "bench".into(),
        marks_per_question: 2,
        answers: (0..questions).map(|i| format!("answer {i}")).collect(),
    }
}

fn make_submissions(count: usize, questions: usize) -> Vec<SubmissionRecord> {
    (0..count)
        .map(|n| SubmissionRecord {
            exam_id: Some("bench".into()),
            student_name: Some(format!("Student {n}")),
            roll_no: Some(format!("R{n}")),
            start_time: Some("2024-01-01T10:00:00".into()),
            end_time: Some("2024-01-01T10:45:00".into()),
            answers: (0..questions)
                .map(|i| {
                    if (n + i) % 3 == 0 {
                        format!("Answer {i} ")
                    } else {
                        "wrong".into()
                    }
                })
                .collect(),
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &(count, questions) in &[(10usize, 20usize), (100, 20), (1000, 50)] {
        let engine = ScoringEngine::new(make_key(questions)).unwrap();
        let submissions = make_submissions(count, questions);

        group.bench_function(format!("{count}subs_{questions}q"), |b| {
            b.iter(|| engine.evaluate(black_box(&submissions)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
