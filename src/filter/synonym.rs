//! Specialization synonym table
//!
//! Broadens specialization matching one-directionally: a search target maps
//! to related terms, so a degree specialization containing any related term
//! also counts. The reverse lookup is deliberately not provided.

use ahash::AHashMap;
use once_cell::sync::Lazy;

static RELATED_SPECIALIZATIONS: Lazy<AHashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut map = AHashMap::new();
        map.insert(
            "computer science",
            &[
                "software engineering",
                "ai",
                "data science",
                "cybersecurity",
                "cloud computing",
            ][..],
        );
        map
    });

/// Related terms for a search target, if the table has an entry
pub fn related_terms(target: &str) -> Option<&'static [&'static str]> {
    RELATED_SPECIALIZATIONS
        .get(target.to_lowercase().as_str())
        .copied()
}

/// Whether a degree specialization satisfies the search target: exact match
/// (case-insensitive) or containment of any related term
pub fn specialization_matches(specialization: &str, target: &str) -> bool {
    let spec = specialization.to_lowercase();
    if spec == target.to_lowercase() {
        return true;
    }
    related_terms(target)
        .map_or(false, |terms| terms.iter().any(|term| spec.contains(term)))
}
