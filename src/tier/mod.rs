//! Tiering classifiers for filtered results
//!
//! Two threshold policies exist in the product and encode different business
//! rules for what counts as "safe"; they are kept distinct behind
//! [`TierPolicy`] rather than reconciled. Each screen picks its policy
//! explicitly instead of scattering inline constants.


use crate::catalog::CollegeRecord;
use serde::Serialize;

/// Records at or below this admission chance land in the low tier
pub const HOPE_MAX_CHANCES: f64 = 50.0;

/// Records at or below this admission chance (and above the low bound) land
/// in the mid tier
pub const APPROACH_MAX_CHANCES: f64 = 80.0;

/// Buffer width for the student-percentage policy
pub const BUFFER_MARGIN: f64 = 10.0;

/// Which threshold policy a screen applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TierPolicy {
    /// Fixed breakpoints on the record's `chances`: low <= 50,
    /// 50 < mid <= 80, high > 80
    AdmissionChances,
    /// Compare the student's percentage against each record's required
    /// `chances` with a 10-point buffer
    StudentBuffer { percentage: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Low,
    Mid,
    High,
}

impl TierPolicy {
    /// Display labels for (low, mid, high), least to most likely admission
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            TierPolicy::AdmissionChances => ["Hope", "Approach", "Secured"],
            TierPolicy::StudentBuffer { .. } => ["Elite", "Target", "Guaranteed"],
        }
    }

    fn tier_of(&self, record: &CollegeRecord) -> Tier {
        match self {
            TierPolicy::AdmissionChances => {
                if record.chances <= HOPE_MAX_CHANCES {
                    Tier::Low
                } else if record.chances <= APPROACH_MAX_CHANCES {
                    Tier::Mid
                } else {
                    Tier::High
                }
            }
            TierPolicy::StudentBuffer { percentage } => {
                if *percentage < record.chances {
                    Tier::Low
                } else if *percentage < record.chances + BUFFER_MARGIN {
                    Tier::Mid
                } else {
                    Tier::High
                }
            }
        }
    }
}

/// Three disjoint admission-likelihood buckets plus the policy that produced
/// them
#[derive(Debug, Clone, Serialize)]
pub struct TierBuckets {
    pub policy: TierPolicy,
    pub low: Vec<CollegeRecord>,
    pub mid: Vec<CollegeRecord>,
    pub high: Vec<CollegeRecord>,
}

impl TierBuckets {
    pub fn labels(&self) -> [&'static str; 3] {
        self.policy.labels()
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.low.len(), self.mid.len(), self.high.len())
    }

    pub fn total(&self) -> usize {
        self.low.len() + self.mid.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition records into three tiers under the given policy.
///
/// Consumes the input so every record lands in exactly one bucket; relative
/// order within a bucket follows the input order.
pub fn classify(records: Vec<CollegeRecord>, policy: TierPolicy) -> TierBuckets {
    let mut buckets = TierBuckets {
        policy,
        low: Vec::new(),
        mid: Vec::new(),
        high: Vec::new(),
    };

    for record in records {
        match policy.tier_of(&record) {
            Tier::Low => buckets.low.push(record),
            Tier::Mid => buckets.mid.push(record),
            Tier::High => buckets.high.push(record),
        }
    }

    buckets
}

/// Classify by the fixed admission-chance breakpoints (Hope/Approach/Secured)
pub fn classify_by_chances(records: Vec<CollegeRecord>) -> TierBuckets {
    classify(records, TierPolicy::AdmissionChances)
}

/// Classify by the student-percentage buffer rule (Elite/Target/Guaranteed)
pub fn classify_by_buffer(records: Vec<CollegeRecord>, percentage: f64) -> TierBuckets {
    classify(records, TierPolicy::StudentBuffer { percentage })
}
