//! Catalog API response types.
//!
//! Issue records are kept opaque: the backend's CSV-derived columns are not a
//! stable schema, so no shape is validated client-side. Endpoints with a
//! fixed shape (stats, series titles, creators) get typed structs.

use serde::{Deserialize, Serialize};

/// One catalogued issue record, as returned by the backend.
///
/// Opaque JSON; use [`get`](Self::get) for ad-hoc field access.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Issue(pub serde_json::Value);

impl Issue {
    /// The record's `issue_id`, if present and integral.
    pub fn id(&self) -> Option<u64> {
        self.0.get("issue_id").and_then(|v| v.as_u64())
    }

    /// Which dataset the record came from (`original` or `variant`).
    pub fn dataset(&self) -> Option<&str> {
        self.0.get("dataset").and_then(|v| v.as_str())
    }

    /// Ad-hoc access to any field of the record.
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }
}

/// Response shape of `GET /series/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesTitles {
    pub series_titles: Vec<String>,
}

/// Response shape of `GET /creators/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Creators {
    pub creators: Vec<String>,
}

/// Response shape of `GET /stats/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_originals: u64,
    pub total_variants: u64,
    pub total_issues: u64,
    pub series_count_originals: u64,
    pub series_count_variants: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE_JSON: &str = r#"{
        "issue_id": 1045,
        "series_id": 9,
        "series_title": "Fantastic Four",
        "release_date": "1963-03-01",
        "is_variant": false,
        "dataset": "original"
    }"#;

    #[test]
    fn test_issue_is_opaque() {
        let issue: Issue = serde_json::from_str(ISSUE_JSON).unwrap();
        assert_eq!(issue.id(), Some(1045));
        assert_eq!(issue.dataset(), Some("original"));
        assert_eq!(issue.get("series_title").and_then(|v| v.as_str()), Some("Fantastic Four"));
        assert!(issue.get("nonexistent").is_none());
    }

    #[test]
    fn test_issue_tolerates_unknown_shape() {
        // no shape is enforced client-side
        let issue: Issue = serde_json::from_str(r#"{"anything": [1, 2, 3]}"#).unwrap();
        assert_eq!(issue.id(), None);
        assert_eq!(issue.dataset(), None);
    }

    #[test]
    fn test_issue_roundtrips_verbatim() {
        let issue: Issue = serde_json::from_str(ISSUE_JSON).unwrap();
        let expected: serde_json::Value = serde_json::from_str(ISSUE_JSON).unwrap();
        assert_eq!(serde_json::to_value(&issue).unwrap(), expected);
    }

    #[test]
    fn test_deserialize_stats() {
        let json = r#"{
            "total_originals": 31467,
            "total_variants": 10421,
            "total_issues": 41888,
            "series_count_originals": 2094,
            "series_count_variants": 1408
        }"#;
        let stats: CatalogStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_issues, 41888);
        assert_eq!(stats.total_originals + stats.total_variants, stats.total_issues);
    }

    #[test]
    fn test_deserialize_series_titles() {
        let json = r#"{"series_titles": ["Fantastic Four", "The Amazing Spider-Man"]}"#;
        let titles: SeriesTitles = serde_json::from_str(json).unwrap();
        assert_eq!(titles.series_titles.len(), 2);
    }

    #[test]
    fn test_deserialize_creators() {
        let json = r#"{"creators": ["Stan Lee", "Jack Kirby"]}"#;
        let creators: Creators = serde_json::from_str(json).unwrap();
        assert_eq!(creators.creators, vec!["Stan Lee", "Jack Kirby"]);
    }
}
