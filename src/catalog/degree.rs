//! Degree program structures

use serde::{Deserialize, Serialize};

/// A stream offered inside a degree.
///
/// The abroad listing endpoint sends objects (`{"name": ..,
/// "specializations": [..]}`) while the domestic endpoint sends bare strings;
/// both shapes must parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamOffering {
    Detailed {
        name: String,
        #[serde(default)]
        specializations: Vec<String>,
    },
    Bare(String),
}

impl StreamOffering {
    pub fn name(&self) -> &str {
        match self {
            StreamOffering::Detailed { name, .. } => name,
            StreamOffering::Bare(name) => name,
        }
    }

    pub fn specializations(&self) -> &[String] {
        match self {
            StreamOffering::Detailed { specializations, .. } => specializations,
            StreamOffering::Bare(_) => &[],
        }
    }
}

/// An exam the degree requires, with its minimum acceptable score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequirement {
    pub name: String,
    pub min_score: f64,
}

/// An academic qualification the degree requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationRequirement {
    pub name: String,
    pub min_percentage: f64,
}

/// A degree program offered by a college
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub streams: Vec<StreamOffering>,
    #[serde(default)]
    pub tuition_fee: Option<f64>,
    /// Abroad shape: a display string such as "2 years"
    #[serde(default)]
    pub duration: Option<String>,
    /// Domestic shape: numeric month count
    #[serde(default)]
    pub duration_months: Option<u32>,
    /// Missing or empty means the degree requires no exams
    #[serde(default)]
    pub exams: Vec<ExamRequirement>,
    #[serde(default)]
    pub qualifications: Vec<QualificationRequirement>,
}
