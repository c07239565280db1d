//! Exam compatibility checking
//!
//! Decides whether a student's submitted scores satisfy a degree's required
//! exams. Entrance exams must all be met; language exams need only one, with
//! an IELTS to TOEFL score conversion when the student submitted IELTS but
//! the degree asks for TOEFL.


use crate::catalog::Degree;
use ahash::AHashMap;

/// Exam name -> submitted score
pub type ExamScores = AHashMap<String, f64>;

/// Entrance exams: every required one must be met
pub const ENTRANCE_EXAMS: [&str; 3] = ["GRE", "GMAT", "SAT/ACT"];

/// Language exams: any one suffices
pub const LANGUAGE_EXAMS: [&str; 2] = ["TOEFL", "IELTS"];

/// Fixed conversion heuristic: IELTS 9.0 lands near the TOEFL ceiling
pub const IELTS_TO_TOEFL_FACTOR: f64 = 13.33;

/// TOEFL score ceiling
pub const TOEFL_MAX_SCORE: f64 = 120.0;

/// Convert an IELTS band to its TOEFL equivalent, capped at the ceiling
#[inline]
pub fn ielts_to_toefl(ielts: f64) -> f64 {
    (ielts * IELTS_TO_TOEFL_FACTOR).round().min(TOEFL_MAX_SCORE)
}

fn is_entrance_exam(name: &str) -> bool {
    ENTRANCE_EXAMS.contains(&name)
}

fn is_language_exam(name: &str) -> bool {
    LANGUAGE_EXAMS.contains(&name)
}

/// Check whether the submitted scores satisfy the degree's required exams.
///
/// A degree without exams is trivially eligible. Exam names outside the
/// entrance/language sets impose no requirement.
pub fn is_exam_eligible(degree: &Degree, scores: &ExamScores) -> bool {
    if degree.exams.is_empty() {
        return true;
    }

    let entrance_valid = degree
        .exams
        .iter()
        .filter(|exam| is_entrance_exam(&exam.name))
        .all(|exam| {
            scores
                .get(&exam.name)
                .map_or(false, |score| *score >= exam.min_score)
        });

    let language_exams: Vec<_> = degree
        .exams
        .iter()
        .filter(|exam| is_language_exam(&exam.name))
        .collect();

    let language_valid = language_exams.is_empty()
        || language_exams.iter().any(|exam| match exam.name.as_str() {
            "TOEFL" => {
                if let Some(toefl) = scores.get("TOEFL") {
                    *toefl >= exam.min_score
                } else if let Some(ielts) = scores.get("IELTS") {
                    ielts_to_toefl(*ielts) >= exam.min_score
                } else {
                    false
                }
            }
            "IELTS" => scores
                .get("IELTS")
                .map_or(false, |score| *score >= exam.min_score),
            _ => false,
        });

    entrance_valid && language_valid
}

/// Check the student's percentage against the degree's required qualification.
///
/// A degree that does not list the qualification poses no constraint, same as
/// the no-exams edge case.
pub fn meets_qualification(degree: &Degree, qualification: &str, student_percentage: f64) -> bool {
    match degree
        .qualifications
        .iter()
        .find(|q| q.name == qualification)
    {
        Some(q) => student_percentage >= q.min_percentage,
        None => true,
    }
}
