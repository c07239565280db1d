//! Match engine orchestrating the filter and tiering pipeline

use crate::catalog::{load_catalog, CollegeRecord};
use crate::criteria::Criteria;
use crate::error::Result;
use crate::filter::filter_candidates;
use crate::tier::{classify, TierBuckets, TierPolicy};
use serde::Serialize;

/// Owns a fetched catalog and runs searches against it.
///
/// The catalog is immutable for the engine's lifetime; every search
/// recomputes the filtered and tiered result from scratch.
pub struct MatchEngine {
    colleges: Vec<CollegeRecord>,
}

impl MatchEngine {
    pub fn new(colleges: Vec<CollegeRecord>) -> Self {
        Self { colleges }
    }

    /// Build an engine straight from the listing endpoint's JSON payload
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(load_catalog(json)?))
    }

    pub fn catalog(&self) -> &[CollegeRecord] {
        &self.colleges
    }

    /// Filter by the criteria, then partition the matches under the policy
    pub fn run(&self, criteria: &Criteria, policy: TierPolicy) -> MatchReport {
        let matched = filter_candidates(&self.colleges, criteria);
        let matched_count = matched.len();
        MatchReport {
            total: self.colleges.len(),
            matched: matched_count,
            buckets: classify(matched, policy),
        }
    }
}

/// The outcome of one search: tiered buckets plus match bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub total: usize,
    pub matched: usize,
    pub buckets: TierBuckets,
}

impl MatchReport {
    /// (low, mid, high) bucket sizes
    pub fn counts(&self) -> (usize, usize, usize) {
        self.buckets.counts()
    }

    /// Nothing matched; the UI surfaces its "no results, adjust filters"
    /// message off this
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
