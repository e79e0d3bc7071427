//! Shared UI state containers.
//!
//! State lives in explicitly owned handles that views receive by clone, with
//! change notification over a watch channel instead of implicit reactivity.

pub mod series;

pub use series::{SeriesFilter, SeriesState, SortKey};
