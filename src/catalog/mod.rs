//! Catalog module for college listing data
//!
//! This module handles deserialization of the college catalog from the JSON
//! payload the listing endpoints return.

mod degree;
mod record;

pub use degree::*;
pub use record::*;

use crate::error::Result;

/// Deserialize a catalog from a JSON array of college records
pub fn load_catalog(json: &str) -> Result<Vec<CollegeRecord>> {
    let records: Vec<CollegeRecord> = serde_json::from_str(json)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_mixed_shapes() {
        let json = r#"[
            {"name": "MIT", "type": "Abroad", "location": "USA", "chances": 35,
             "degrees": [{"level": "Master", "streams": [{"name": "Engineering"}]}]},
            {"name": "IIT Madras", "type": "India", "state": "Tamil Nadu", "chances": 92,
             "degreesOffered": [{"level": "Bachelor", "streams": ["Engineering"]}]}
        ]"#;
        let catalog = load_catalog(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "MIT");
        assert_eq!(catalog[1].degrees[0].level, "Bachelor");
    }

    #[test]
    fn test_load_catalog_rejects_malformed_json() {
        assert!(load_catalog("{not json").is_err());
    }

    #[test]
    fn test_load_catalog_empty() {
        assert!(load_catalog("[]").unwrap().is_empty());
    }
}
