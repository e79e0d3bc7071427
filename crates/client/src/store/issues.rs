//! Fetch-once, cache-forever store for the full issue list.
//!
//! The store performs a single full-collection fetch per session and holds
//! the result in memory until process exit (stale-forever policy; there is no
//! invalidation or refresh). Concurrent fetch calls are de-duplicated with an
//! in-flight guard, so racing callers issue one request between them.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};

use crate::api::{ApiError, CatalogClient, Issue, IssuesRequest};

/// User-facing message for any failed fetch, regardless of cause.
const FETCH_FAILED: &str = "Failed to fetch issues.";

/// Seam between the store and the catalog API, mockable in tests.
#[async_trait]
pub trait IssuesApi: Send + Sync {
    /// List issues matching the request filters.
    async fn list_issues(&self, req: &IssuesRequest) -> Result<Vec<Issue>, ApiError>;
}

#[async_trait]
impl IssuesApi for CatalogClient {
    async fn list_issues(&self, req: &IssuesRequest) -> Result<Vec<Issue>, ApiError> {
        CatalogClient::list_issues(self, req).await
    }
}

/// Observable state of the issue cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuesSnapshot {
    /// Cached issue records, in backend order. Empty until the first
    /// successful fetch.
    pub issues: Vec<Issue>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Fixed failure message from the most recent failed fetch, cleared when
    /// a fetch starts.
    pub error: Option<String>,
}

/// Fetch-once accessor for the full issue collection.
///
/// Cloneable handle; all clones share the same cache.
#[derive(Clone)]
pub struct IssuesStore {
    api: Arc<dyn IssuesApi>,
    state: Arc<watch::Sender<IssuesSnapshot>>,
    fetch_limit: u32,
    // serializes the fetch critical section so racing calls issue one request
    in_flight: Arc<Mutex<()>>,
}

impl IssuesStore {
    /// Create a store over the given API with the given full-collection
    /// record limit.
    pub fn new(api: Arc<dyn IssuesApi>, fetch_limit: u32) -> Self {
        let (tx, _rx) = watch::channel(IssuesSnapshot::default());

        Self { api, state: Arc::new(tx), fetch_limit, in_flight: Arc::new(Mutex::new(())) }
    }

    /// Fetch the full issue collection unless it is already cached.
    ///
    /// No-op when the cached list is non-empty. On failure the list is left
    /// unchanged and the error field is set to a fixed message; no retry.
    pub async fn fetch_issues(&self) {
        if !self.state.borrow().issues.is_empty() {
            return;
        }

        let _guard = self.in_flight.lock().await;

        // a racing caller may have populated the cache while we waited
        if !self.state.borrow().issues.is_empty() {
            return;
        }

        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.api.list_issues(&IssuesRequest::all(self.fetch_limit)).await;

        self.state.send_modify(|s| {
            match result {
                Ok(issues) => {
                    tracing::debug!("cached {} issues", issues.len());
                    s.issues = issues;
                }
                Err(e) => {
                    tracing::warn!("issue fetch failed: {}", e);
                    s.error = Some(FETCH_FAILED.to_string());
                }
            }
            s.loading = false;
        });
    }

    /// Snapshot of the current cache state.
    pub fn snapshot(&self) -> IssuesSnapshot {
        self.state.borrow().clone()
    }

    /// Cached issue records; empty until the first successful fetch.
    pub fn issues(&self) -> Vec<Issue> {
        self.state.borrow().issues.clone()
    }

    /// Subscribe to cache state changes.
    pub fn subscribe(&self) -> watch::Receiver<IssuesSnapshot> {
        self.state.subscribe()
    }
}
