//! Benchmark for match performance over a realistic catalog size

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use college_match_core::catalog::{CollegeRecord, Degree, ExamRequirement, StreamOffering};
use college_match_core::{Criteria, MatchEngine, TierPolicy};

/// Build a synthetic catalog of mixed abroad/domestic records
fn create_test_catalog(size: usize) -> Vec<CollegeRecord> {
    let countries = ["USA", "Germany", "Canada", "Australia", "UK"];
    let specializations = [
        "Cybersecurity",
        "Data Science",
        "Marketing",
        "Mechanical Design",
        "Cloud Computing",
    ];

    (0..size)
        .map(|i| CollegeRecord {
            name: format!("University {}", i),
            location: countries[i % countries.len()].to_string(),
            college_type: if i % 3 == 0 { "India" } else { "Abroad" }.to_string(),
            university_type: if i % 2 == 0 { "Public" } else { "Private" }.to_string(),
            chances: (i % 101) as f64,
            min_percentage: Some(40.0 + (i % 55) as f64),
            degrees: vec![Degree {
                level: if i % 2 == 0 { "Master" } else { "Bachelor" }.to_string(),
                streams: vec![StreamOffering::Detailed {
                    name: "Computer Science and Engineering".to_string(),
                    specializations: vec![specializations[i % specializations.len()].to_string()],
                }],
                tuition_fee: Some(5000.0 + (i % 50) as f64 * 1000.0),
                duration: Some("2 years".to_string()),
                exams: vec![
                    ExamRequirement {
                        name: "GRE".to_string(),
                        min_score: 290.0 + (i % 40) as f64,
                    },
                    ExamRequirement {
                        name: "TOEFL".to_string(),
                        min_score: 80.0 + (i % 25) as f64,
                    },
                ],
                ..Default::default()
            }],
            ..Default::default()
        })
        .collect()
}

fn create_criteria() -> Criteria {
    let mut criteria = Criteria {
        country: Some("USA".to_string()),
        degree_level: Some("Master".to_string()),
        specialization: Some("Computer Science".to_string()),
        budget: Some(40000.0),
        ..Default::default()
    };
    criteria.exam_scores.insert("GRE".to_string(), 318.0);
    criteria.exam_scores.insert("IELTS".to_string(), 7.5);
    criteria
}

fn benchmark_match(c: &mut Criterion) {
    let engine = MatchEngine::new(create_test_catalog(1000));
    let criteria = create_criteria();

    c.bench_function("match_chances_policy_1000", |b| {
        b.iter(|| {
            let report = engine.run(black_box(&criteria), TierPolicy::AdmissionChances);
            black_box(report.counts())
        })
    });

    c.bench_function("match_buffer_policy_1000", |b| {
        b.iter(|| {
            let report = engine.run(
                black_box(&criteria),
                TierPolicy::StudentBuffer { percentage: 78.0 },
            );
            black_box(report.counts())
        })
    });

    let empty = Criteria::default();
    c.bench_function("match_identity_1000", |b| {
        b.iter(|| {
            let report = engine.run(black_box(&empty), TierPolicy::AdmissionChances);
            black_box(report.matched)
        })
    });
}

criterion_group!(benches, benchmark_match);
criterion_main!(benches);
