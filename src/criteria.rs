//! Student search criteria
//!
//! Built once when the search wizard completes, read-only afterward, and
//! discarded when the student leaves the results view. An unset field never
//! narrows results; empty strings count as unset so pass-through form state
//! behaves the same as an omitted field.

use crate::exam::ExamScores;
use serde::{Deserialize, Serialize};

/// The student's search and eligibility inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    /// Free-text college name search
    pub name: Option<String>,
    /// "Abroad" or "India"
    pub college_type: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub degree_level: Option<String>,
    pub stream: Option<String>,
    pub specialization: Option<String>,
    pub board: Option<String>,
    pub major: Option<String>,
    pub university_type: Option<String>,
    /// Display string, e.g. "2 years" or "48 months"
    pub duration: Option<String>,
    /// Upper bound on yearly tuition
    pub budget: Option<f64>,
    /// The student's own academic percentage, compared against each
    /// college's `minPercentage`
    pub student_percentage: Option<f64>,
    /// Exam name -> submitted score
    pub exam_scores: ExamScores,
}

impl Criteria {
    /// True when no field is populated, in which case filtering is the identity
    pub fn is_empty(&self) -> bool {
        self.text_fields().into_iter().all(|f| populated(f).is_none())
            && self.budget.is_none()
            && self.student_percentage.is_none()
            && self.exam_scores.is_empty()
    }

    fn text_fields(&self) -> [&Option<String>; 11] {
        [
            &self.name,
            &self.college_type,
            &self.country,
            &self.state,
            &self.degree_level,
            &self.stream,
            &self.specialization,
            &self.board,
            &self.major,
            &self.university_type,
            &self.duration,
        ]
    }
}

/// Treat empty and whitespace-only strings as unset
pub(crate) fn populated(field: &Option<String>) -> Option<&str> {
    match field {
        Some(s) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Criteria::default().is_empty());
    }

    #[test]
    fn test_blank_string_counts_as_unset() {
        let criteria = Criteria {
            country: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert!(populated(&criteria.country).is_none());
    }

    #[test]
    fn test_populated_field() {
        let criteria = Criteria {
            specialization: Some("Computer Science".to_string()),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
        assert_eq!(populated(&criteria.specialization), Some("Computer Science"));
    }

    #[test]
    fn test_exam_scores_count_as_populated() {
        let mut criteria = Criteria::default();
        criteria.exam_scores.insert("GRE".to_string(), 315.0);
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_deserialize_from_wizard_payload() {
        let json = r#"{
            "country": "USA",
            "degreeLevel": "Master",
            "budget": 50000,
            "examScores": {"GRE": 320, "IELTS": 7.5}
        }"#;
        let criteria: Criteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.country.as_deref(), Some("USA"));
        assert_eq!(criteria.budget, Some(50000.0));
        assert_eq!(criteria.exam_scores.get("IELTS"), Some(&7.5));
        assert!(criteria.name.is_none());
    }
}
