//! Session-scoped in-memory stores over the catalog API.

pub mod issues;

pub use issues::{IssuesApi, IssuesSnapshot, IssuesStore};
