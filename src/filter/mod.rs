//! Predicate filter chain
//!
//! Narrows the candidate list by every populated criterion, conjunctively.
//! String criteria use case-insensitive substring containment; numeric
//! criteria use threshold comparisons. Each degree-scoped predicate is
//! independently existential over the college's degrees, matching the
//! original screens: a different degree may satisfy each criterion.
//! Missing record fields are non-matches, never errors.

mod synonym;


pub use synonym::*;

use crate::catalog::{CollegeRecord, Degree};
use crate::criteria::{populated, Criteria};
use crate::exam::is_exam_eligible;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_degree<F>(college: &CollegeRecord, pred: F) -> bool
where
    F: Fn(&Degree) -> bool,
{
    college.degrees.iter().any(pred)
}

fn matches_duration(degree: &Degree, wanted: &str) -> bool {
    if let Some(duration) = &degree.duration {
        if duration.eq_ignore_ascii_case(wanted) {
            return true;
        }
    }
    // Domestic shape stores a month count; the screen compares against the
    // rendered "N months" string
    degree
        .duration_months
        .map_or(false, |months| format!("{} months", months).eq_ignore_ascii_case(wanted))
}

fn matches_specialization(college: &CollegeRecord, target: &str) -> bool {
    any_degree(college, |deg| {
        deg.streams.iter().any(|stream| {
            stream
                .specializations()
                .iter()
                .any(|spec| specialization_matches(spec, target))
        })
    })
}

fn matches_criteria(college: &CollegeRecord, criteria: &Criteria) -> bool {
    if let Some(name) = populated(&criteria.name) {
        if !contains_ci(&college.name, name) {
            return false;
        }
    }
    if let Some(college_type) = populated(&criteria.college_type) {
        if !contains_ci(&college.college_type, college_type) {
            return false;
        }
    }
    if let Some(country) = populated(&criteria.country) {
        if !contains_ci(&college.location, country) {
            return false;
        }
    }
    if let Some(state) = populated(&criteria.state) {
        let matched = college
            .state
            .as_deref()
            .map_or(false, |s| contains_ci(s, state));
        if !matched {
            return false;
        }
    }
    if let Some(level) = populated(&criteria.degree_level) {
        if !any_degree(college, |deg| contains_ci(&deg.level, level)) {
            return false;
        }
    }
    if let Some(stream) = populated(&criteria.stream) {
        let matched = any_degree(college, |deg| {
            deg.streams.iter().any(|s| contains_ci(s.name(), stream))
        });
        if !matched {
            return false;
        }
    }
    if let Some(specialization) = populated(&criteria.specialization) {
        if !matches_specialization(college, specialization) {
            return false;
        }
    }
    if let Some(board) = populated(&criteria.board) {
        let matched = college
            .accepted_boards
            .iter()
            .any(|b| contains_ci(b, board));
        if !matched {
            return false;
        }
    }
    if let Some(major) = populated(&criteria.major) {
        let matched = college
            .recommended_courses
            .iter()
            .any(|course| contains_ci(course, major));
        if !matched {
            return false;
        }
    }
    if let Some(university_type) = populated(&criteria.university_type) {
        if !contains_ci(&college.university_type, university_type) {
            return false;
        }
    }
    if let Some(duration) = populated(&criteria.duration) {
        if !any_degree(college, |deg| matches_duration(deg, duration)) {
            return false;
        }
    }
    if let Some(budget) = criteria.budget {
        let matched = any_degree(college, |deg| {
            deg.tuition_fee.map_or(false, |fee| fee <= budget)
        });
        if !matched {
            return false;
        }
    }
    if let Some(percentage) = criteria.student_percentage {
        // A record without minPercentage is a non-match when the criterion
        // is set
        let matched = college
            .min_percentage
            .map_or(false, |min| min <= percentage);
        if !matched {
            return false;
        }
    }
    if !criteria.exam_scores.is_empty() {
        let matched = any_degree(college, |deg| is_exam_eligible(deg, &criteria.exam_scores));
        if !matched {
            return false;
        }
    }

    true
}

/// Produce the subset of candidates matching every populated criterion.
///
/// Returns a new vector in input order; never mutates the input. Empty
/// criteria are the identity.
pub fn filter_candidates(candidates: &[CollegeRecord], criteria: &Criteria) -> Vec<CollegeRecord> {
    candidates
        .iter()
        .filter(|college| matches_criteria(college, criteria))
        .cloned()
        .collect()
}
