//! Catalog API request types and validation.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Which dataset an issues query runs against.
///
/// The backend defaults to `original` when the parameter is omitted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    #[default]
    Original,
    Variant,
    All,
}

/// Query parameters for `GET /issues/`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct IssuesRequest {
    /// Dataset to query: original, variant, or all.
    pub dataset: Dataset,

    /// Case-insensitive series title substring filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_title: Option<String>,

    /// Exact series ID filter. Takes precedence over `series_title`
    /// server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<u64>,

    /// Release-year filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Variant-flag filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_variant: Option<bool>,

    /// Maximum number of records to return (server default: 1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl IssuesRequest {
    /// The full-collection request: every issue in both datasets, up to
    /// `limit` records.
    pub fn all(limit: u32) -> Self {
        Self { dataset: Dataset::All, limit: Some(limit), ..Default::default() }
    }

    /// Validate the request parameters before sending.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(limit) = self.limit
            && limit == 0
        {
            return Err(ApiError::InvalidRequest("limit must be greater than 0".to_string()));
        }

        if let Some(title) = &self.series_title
            && title.trim().is_empty()
        {
            return Err(ApiError::InvalidRequest("series_title filter cannot be blank".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_collection_request() {
        let req = IssuesRequest::all(100_000);
        assert_eq!(req.dataset, Dataset::All);
        assert_eq!(req.limit, Some(100_000));
        assert!(req.series_title.is_none());
        assert!(req.series_id.is_none());
        assert!(req.year.is_none());
        assert!(req.is_variant.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_dataset_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Dataset::All).unwrap(), "\"all\"");
        assert_eq!(serde_json::to_string(&Dataset::Original).unwrap(), "\"original\"");
        assert_eq!(serde_json::to_string(&Dataset::Variant).unwrap(), "\"variant\"");
    }

    #[test]
    fn test_none_filters_are_skipped() {
        let req = IssuesRequest::all(100_000);
        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["dataset"], "all");
        assert_eq!(obj["limit"], 100_000);
    }

    #[test]
    fn test_validate_zero_limit() {
        let req = IssuesRequest { limit: Some(0), ..Default::default() };
        assert!(matches!(req.validate(), Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_blank_series_title() {
        let req = IssuesRequest { series_title: Some("   ".to_string()), ..Default::default() };
        assert!(matches!(req.validate(), Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_filters() {
        let req = IssuesRequest {
            dataset: Dataset::Original,
            series_title: Some("Fantastic Four".to_string()),
            year: Some(1963),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }
}
