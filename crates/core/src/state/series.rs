//! Series listing filter/sort/pagination state.
//!
//! A flat record of scalar fields read and written directly by views. The
//! state lives for the process lifetime; there is no reset operation and no
//! persistence. Writers win in arrival order, last writer wins.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Sort key for the series listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Year,
    Issues,
}

/// Filter/sort/pagination parameters for the series listing.
///
/// Field values are not validated; consumers set them directly through
/// [`SeriesState::update`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesFilter {
    /// Free-text series search query.
    pub query: String,
    /// Series entries currently held for the listing, opaque to this crate.
    pub list: Vec<serde_json::Value>,
    /// Lower bound of the release-year range filter.
    pub filter_start_year: i32,
    /// Upper bound of the release-year range filter.
    pub filter_end_year: i32,
    /// Minimum issue count a series must have, if set.
    pub filter_min_issues: Option<u32>,
    /// Include unlimited (ongoing) series.
    pub filter_unlimited: bool,
    /// Include one-shot series.
    pub filter_one_shot: bool,
    /// Include standard comic formats.
    pub filter_comic_formats: bool,
    /// Active sort key.
    pub sort_by: SortKey,
    /// Current page of the listing, 1-based.
    pub current_page: u32,
}

impl Default for SeriesFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            list: Vec::new(),
            filter_start_year: 1900,
            filter_end_year: Local::now().year(),
            filter_min_issues: None,
            filter_unlimited: false,
            filter_one_shot: false,
            filter_comic_formats: true,
            sort_by: SortKey::Title,
            current_page: 1,
        }
    }
}

/// Owned, injectable handle to the shared series filter state.
///
/// Views receive the handle by clone; all clones observe the same state.
/// Mutation goes through [`update`](Self::update), which notifies
/// subscribers.
#[derive(Debug, Clone)]
pub struct SeriesState {
    tx: watch::Sender<SeriesFilter>,
}

impl SeriesState {
    /// Create state holding the default filter.
    pub fn new() -> Self {
        Self::with_filter(SeriesFilter::default())
    }

    /// Create state holding a specific filter.
    pub fn with_filter(filter: SeriesFilter) -> Self {
        let (tx, _rx) = watch::channel(filter);
        Self { tx }
    }

    /// Snapshot of the current filter.
    pub fn get(&self) -> SeriesFilter {
        self.tx.borrow().clone()
    }

    /// Apply a mutation to the filter and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut SeriesFilter)) {
        self.tx.send_modify(f);
    }

    /// Subscribe to filter changes.
    ///
    /// The receiver observes snapshots of the filter after each
    /// [`update`](Self::update); intermediate states may be skipped if the
    /// subscriber lags.
    pub fn subscribe(&self) -> watch::Receiver<SeriesFilter> {
        self.tx.subscribe()
    }
}

impl Default for SeriesState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = SeriesFilter::default();
        assert_eq!(filter.query, "");
        assert!(filter.list.is_empty());
        assert_eq!(filter.filter_start_year, 1900);
        assert_eq!(filter.filter_end_year, Local::now().year());
        assert_eq!(filter.filter_min_issues, None);
        assert!(!filter.filter_unlimited);
        assert!(!filter.filter_one_shot);
        assert!(filter.filter_comic_formats);
        assert_eq!(filter.sort_by, SortKey::Title);
        assert_eq!(filter.current_page, 1);
    }

    #[test]
    fn test_sort_key_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SortKey::Title).unwrap(), "\"title\"");
        assert_eq!(serde_json::to_string(&SortKey::Year).unwrap(), "\"year\"");
    }

    #[test]
    fn test_update_is_visible_to_all_clones() {
        let state = SeriesState::new();
        let view = state.clone();

        state.update(|f| f.query = "spider".to_string());

        assert_eq!(view.get().query, "spider");
    }

    #[test]
    fn test_update_notifies_subscribers() {
        let state = SeriesState::new();
        let mut rx = state.subscribe();

        assert!(!rx.has_changed().unwrap());
        state.update(|f| f.current_page = 3);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current_page, 3);
    }

    #[test]
    fn test_last_writer_wins() {
        let state = SeriesState::new();

        state.update(|f| f.filter_start_year = 1960);
        state.update(|f| f.filter_start_year = 1975);

        assert_eq!(state.get().filter_start_year, 1975);
    }
}
