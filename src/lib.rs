//! College Match Core - eligibility tiering and filter engine
//!
//! This crate implements the matching core of the student-college portal:
//! given a student's search criteria and an already-fetched college catalog,
//! it produces the subset matching every populated criterion and partitions
//! it into three admission-likelihood tiers. Python bindings for the backend
//! are available behind the `python` feature.

pub mod catalog;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod exam;
pub mod filter;
pub mod tier;

#[cfg(feature = "python")]
mod python;

pub use catalog::{load_catalog, CollegeRecord, Degree};
pub use criteria::Criteria;
pub use engine::{MatchEngine, MatchReport};
pub use error::{MatchError, Result};
pub use exam::{ielts_to_toefl, is_exam_eligible, meets_qualification, ExamScores};
pub use filter::filter_candidates;
pub use tier::{classify, classify_by_buffer, classify_by_chances, TierBuckets, TierPolicy};
