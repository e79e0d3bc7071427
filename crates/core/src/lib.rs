//! Core types and shared functionality for longbox.
//!
//! This crate provides:
//! - Route table mapping URL paths to catalog views
//! - Series filter state with an explicit subscription interface
//! - Configuration structures

pub mod config;
pub mod route;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use route::{Resolution, RouteError, RouteTable, View};
pub use state::{SeriesFilter, SeriesState, SortKey};
