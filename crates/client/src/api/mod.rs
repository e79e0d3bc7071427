//! Comic catalog REST API client.
//!
//! Thin client over the catalog backend:
//!
//! - **Endpoints**: `/issues/`, `/issues/{id}`, `/issues/{id}/variants`,
//!   `/issues/{id}/original`, `/series/`, `/creators/`, `/stats/`
//! - **Transport**: plain GET requests, JSON bodies. No authentication.
//! - **Errors**: 404 maps to [`ApiError::NotFound`] with the backend's
//!   `detail` message when present; other non-success statuses map to
//!   [`ApiError::HttpError`].

pub mod error;
pub mod request;
pub mod response;

pub use error::ApiError;
pub use request::{Dataset, IssuesRequest};
pub use response::{CatalogStats, Creators, Issue, SeriesTitles};

use longbox_core::AppConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Catalog API client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client from application configuration.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;

        let base = url::Url::parse(&config.api_base_url).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;

        Ok(Self { http, base_url: base.as_str().trim_end_matches('/').to_string() })
    }

    /// Base URL the client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /issues/`: list issues matching the request filters.
    ///
    /// A successful response with an absent or `null` body yields an empty
    /// list, not a parse error.
    pub async fn list_issues(&self, req: &IssuesRequest) -> Result<Vec<Issue>, ApiError> {
        req.validate()?;
        let issues: Option<Vec<Issue>> = self.get_json("/issues/", Some(req)).await?;

        Ok(issues.unwrap_or_default())
    }

    /// `GET /issues/{issue_id}`: fetch a single issue.
    ///
    /// Without the `is_variant` hint the backend checks the original dataset
    /// first, then the variant dataset.
    pub async fn get_issue(&self, issue_id: u64, is_variant: Option<bool>) -> Result<Issue, ApiError> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            is_variant: Option<bool>,
        }

        self.get_json(&format!("/issues/{issue_id}"), Some(&Query { is_variant })).await
    }

    /// `GET /issues/{original_issue_id}/variants`: the original issue
    /// followed by its variant covers.
    pub async fn list_variants(&self, original_issue_id: u64) -> Result<Vec<Issue>, ApiError> {
        self.get_json::<Vec<Issue>, ()>(&format!("/issues/{original_issue_id}/variants"), None)
            .await
    }

    /// `GET /issues/{variant_issue_id}/original`: resolve a variant back to
    /// its original issue.
    pub async fn get_original(&self, variant_issue_id: u64) -> Result<Issue, ApiError> {
        self.get_json::<Issue, ()>(&format!("/issues/{variant_issue_id}/original"), None)
            .await
    }

    /// `GET /series/`: distinct series titles, optionally prefix-filtered.
    pub async fn list_series_titles(&self, prefix: Option<&str>, limit: Option<u32>) -> Result<Vec<String>, ApiError> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            prefix: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
        }

        let titles: SeriesTitles = self.get_json("/series/", Some(&Query { prefix, limit })).await?;

        Ok(titles.series_titles)
    }

    /// `GET /creators/`: distinct creator credits, optionally
    /// prefix-filtered.
    pub async fn list_creators(&self, prefix: Option<&str>, limit: Option<u32>) -> Result<Vec<String>, ApiError> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            prefix: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
        }

        let creators: Creators = self.get_json("/creators/", Some(&Query { prefix, limit })).await?;

        Ok(creators.creators)
    }

    /// `GET /stats/`: catalog-wide counts backing the stats view.
    pub async fn stats(&self) -> Result<CatalogStats, ApiError> {
        self.get_json::<CatalogStats, ()>("/stats/", None).await
    }

    /// Issue a GET request and parse the JSON body.
    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let start = Instant::now();
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(error_detail(response).await));
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::HttpError { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        // an absent body reads as JSON null
        let body = if bytes.is_empty() { &b"null"[..] } else { &bytes[..] };
        let parsed = serde_json::from_slice(body).map_err(|e| ApiError::Parse(e.to_string()))?;

        tracing::debug!("GET {} -> {} in {:?} ({} bytes)", path, status, start.elapsed(), bytes.len());

        Ok(parsed)
    }
}

/// Best-effort extraction of the backend's `{"detail": ...}` error body.
async fn error_detail(response: reqwest::Response) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }

    let url = response.url().path().to_string();

    match response.json::<Detail>().await {
        Ok(body) => body.detail,
        Err(_) => url,
    }
}
