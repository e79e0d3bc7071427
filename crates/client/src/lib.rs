//! Client code for longbox.
//!
//! This crate provides the catalog REST API client and the session-scoped
//! issue cache store built on top of it.

pub mod api;
pub mod store;

pub use api::{ApiError, CatalogClient, CatalogStats, Creators, Dataset, Issue, IssuesRequest, SeriesTitles};

pub use store::{IssuesApi, IssuesSnapshot, IssuesStore};
