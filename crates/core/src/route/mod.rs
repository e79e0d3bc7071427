//! Route table mapping URL paths to catalog views.
//!
//! The table is an ordered list of entries; the first pattern that matches
//! wins. Entries either produce a [`View`] from the extracted parameters or
//! redirect to another path, which is then re-matched against the table.
//!
//! Deep-linkable paths:
//!
//! - `/series`: series listing
//! - `/series/:seriesId`: issues of one series
//! - `/issue/:originalIssueId/variant/:variantIssueId?`: issue detail, with
//!   an optionally selected variant cover
//! - `/issue/:originalIssueId`: issue detail, no variant selected
//! - `/stats`: catalog statistics
//! - `/`: redirects to `/stats`
//!
//! Unmatched paths resolve to [`View::NotFound`] rather than being undefined.

pub mod pattern;

pub use pattern::{Params, Pattern, PatternError};

use pattern::strip_query;

/// Upper bound on redirect hops while resolving a path.
const MAX_REDIRECTS: usize = 8;

/// Error type for route table construction failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("duplicate route pattern: {0}")]
    DuplicatePattern(String),
}

/// A catalog view with its typed inputs, as resolved from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The series listing.
    SeriesList,
    /// Issues of a single series.
    Series { series_id: String },
    /// Detail for one issue, with an optionally selected variant cover.
    IssueDetail {
        original_issue_id: String,
        /// `None` when the path carries no variant segment.
        variant_issue_id: Option<String>,
    },
    /// Catalog statistics.
    Stats,
    /// No route matched the path.
    NotFound { path: String },
}

/// Outcome of matching a path against the table, one step at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A route matched and produced a view.
    Matched { name: &'static str, view: View },
    /// A route matched and redirects to another path.
    Redirect { name: &'static str, to: &'static str },
    /// No route matched.
    NotFound,
}

enum Target {
    View(fn(&Params) -> View),
    Redirect(&'static str),
}

struct RouteEntry {
    pattern: Pattern,
    name: &'static str,
    target: Target,
}

/// Ordered route table; first match wins.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The canonical catalog route table.
    ///
    /// # Errors
    ///
    /// Returns `RouteError` if the entries fail pattern parsing or
    /// uniqueness validation.
    pub fn catalog() -> Result<Self, RouteError> {
        let entries = vec![
            ("/series", "SeriesList", Target::View(|_| View::SeriesList)),
            (
                "/series/:seriesId",
                "Series",
                Target::View(|params| View::Series {
                    series_id: params.get("seriesId").unwrap_or_default().to_string(),
                }),
            ),
            (
                "/issue/:originalIssueId/variant/:variantIssueId?",
                "IssueDetail",
                Target::View(issue_detail),
            ),
            ("/issue/:originalIssueId", "IssueDetail", Target::View(issue_detail)),
            ("/stats", "Stats", Target::View(|_| View::Stats)),
            ("/", "Root", Target::Redirect("/stats")),
        ];

        Self::try_from_entries(entries)
    }

    /// Build a table from `(pattern, name, target)` entries, rejecting
    /// duplicate patterns.
    fn try_from_entries(entries: Vec<(&str, &'static str, Target)>) -> Result<Self, RouteError> {
        let mut table = Self { entries: Vec::with_capacity(entries.len()) };

        for (raw, name, target) in entries {
            if table.entries.iter().any(|e| e.pattern.raw() == raw) {
                return Err(RouteError::DuplicatePattern(raw.to_string()));
            }

            table.entries.push(RouteEntry { pattern: Pattern::parse(raw)?, name, target });
        }

        Ok(table)
    }

    /// Match a path against the table without following redirects.
    ///
    /// The query string and fragment are stripped before matching; only path
    /// segments participate.
    pub fn match_path(&self, path: &str) -> Resolution {
        let path = strip_query(path);

        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(path) {
                return match &entry.target {
                    Target::View(build) => Resolution::Matched { name: entry.name, view: build(&params) },
                    Target::Redirect(to) => Resolution::Redirect { name: entry.name, to },
                };
            }
        }

        Resolution::NotFound
    }

    /// Resolve a path to a view, following redirects.
    ///
    /// Total: every input yields a view. Unmatched paths and redirect cycles
    /// resolve to [`View::NotFound`].
    pub fn resolve(&self, path: &str) -> View {
        let mut current = strip_query(path).to_string();

        for _ in 0..MAX_REDIRECTS {
            match self.match_path(&current) {
                Resolution::Matched { view, .. } => return view,
                Resolution::Redirect { name, to } => {
                    tracing::debug!("route {} redirects {} -> {}", name, current, to);
                    current = to.to_string();
                }
                Resolution::NotFound => return View::NotFound { path: current },
            }
        }

        tracing::warn!("redirect limit exceeded resolving {}", path);
        View::NotFound { path: current }
    }
}

fn issue_detail(params: &Params) -> View {
    View::IssueDetail {
        original_issue_id: params.get("originalIssueId").unwrap_or_default().to_string(),
        variant_issue_id: params.get("variantIssueId").map(|v| v.to_string()),
    }
}
