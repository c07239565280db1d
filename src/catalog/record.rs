//! College record structure

use crate::catalog::Degree;
use serde::{Deserialize, Serialize};

/// A college as returned by the listing endpoints.
///
/// Treated as an immutable value once fetched; the engine never mutates
/// records. Covers both the abroad shape (`degrees`, `location`) and the
/// domestic shape (`degreesOffered`, `state`, `acceptedBoards`,
/// `minPercentage`, `recommendedCourses`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CollegeRecord {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub college_type: String,
    #[serde(default)]
    pub university_type: String,
    /// Admission likelihood 0-100; under the buffer policy it is read as the
    /// minimum percentage the college asks for
    #[serde(default)]
    pub chances: f64,
    #[serde(default, alias = "degreesOffered")]
    pub degrees: Vec<Degree>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub accepted_boards: Vec<String>,
    #[serde(default)]
    pub min_percentage: Option<f64>,
    #[serde(default)]
    pub recommended_courses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abroad_shape() {
        let json = r#"{
            "_id": "663a",
            "name": "MIT",
            "location": "Cambridge, USA",
            "type": "Abroad",
            "universityType": "Private",
            "chances": 35,
            "degrees": [{"level": "Master", "tuitionFee": 53000}]
        }"#;
        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("663a"));
        assert_eq!(record.college_type, "Abroad");
        assert_eq!(record.chances, 35.0);
        assert_eq!(record.degrees.len(), 1);
        assert!(record.state.is_none());
    }

    #[test]
    fn test_domestic_shape() {
        let json = r#"{
            "name": "IIT Madras",
            "type": "India",
            "state": "Tamil Nadu",
            "chances": 92,
            "minPercentage": 75,
            "acceptedBoards": ["CBSE", "State Board"],
            "recommendedCourses": ["Computer Science", "Mechanical"],
            "degreesOffered": [{"level": "Bachelor", "durationMonths": 48, "streams": ["Engineering"]}]
        }"#;
        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.state.as_deref(), Some("Tamil Nadu"));
        assert_eq!(record.min_percentage, Some(75.0));
        assert_eq!(record.degrees[0].duration_months, Some(48));
        assert_eq!(record.degrees[0].streams[0].name(), "Engineering");
    }
}
