//! Path pattern parsing and matching.
//!
//! Patterns are slash-separated segment lists. A segment is either a static
//! literal (`series`), a required parameter (`:seriesId`), or an optional
//! parameter (`:variantIssueId?`). Optional parameters may only appear as the
//! final segment.

use std::collections::HashMap;

/// Error type for pattern parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,

    #[error("pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("parameter segment has no name in pattern: {0}")]
    EmptyParamName(String),

    #[error("optional parameter must be the final segment in pattern: {0}")]
    OptionalNotLast(String),

    #[error("duplicate parameter name '{name}' in pattern: {pattern}")]
    DuplicateParamName { name: String, pattern: String },
}

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    OptionalParam(String),
}

/// Parameters extracted from a matched path.
///
/// Every parameter named by the pattern is present. Optional parameters whose
/// segment was absent from the path map to `None` (the null sentinel), never
/// to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, Option<String>>,
}

impl Params {
    /// Value of a parameter, or `None` if it is unknown or its optional
    /// segment was absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }

    /// Whether the pattern declared a parameter with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn insert(&mut self, name: &str, value: Option<String>) {
        self.values.insert(name.to_string(), value);
    }
}

/// A parsed path pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse a pattern string like `/issue/:originalIssueId/variant/:variantIssueId?`.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        let parts: Vec<&str> = if raw == "/" { Vec::new() } else { raw[1..].split('/').collect() };

        let mut segments = Vec::with_capacity(parts.len());
        let mut seen_names: Vec<String> = Vec::new();

        for (idx, part) in parts.iter().enumerate() {
            let segment = if let Some(param) = part.strip_prefix(':') {
                let (name, optional) = match param.strip_suffix('?') {
                    Some(name) => (name, true),
                    None => (param, false),
                };

                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(raw.to_string()));
                }
                if optional && idx != parts.len() - 1 {
                    return Err(PatternError::OptionalNotLast(raw.to_string()));
                }
                if seen_names.iter().any(|n| n == name) {
                    return Err(PatternError::DuplicateParamName {
                        name: name.to_string(),
                        pattern: raw.to_string(),
                    });
                }
                seen_names.push(name.to_string());

                if optional { Segment::OptionalParam(name.to_string()) } else { Segment::Param(name.to_string()) }
            } else {
                Segment::Static((*part).to_string())
            };

            segments.push(segment);
        }

        Ok(Self { raw: raw.to_string(), segments })
    }

    /// The pattern string this was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Match a path against this pattern, extracting parameters.
    ///
    /// The path is expected to be pre-normalized (no query string or
    /// fragment). Parameter values are passed through verbatim, without
    /// percent-decoding. Returns `None` on mismatch.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let segments = split_path(path);

        let required = self
            .segments
            .iter()
            .filter(|s| !matches!(s, Segment::OptionalParam(_)))
            .count();
        if segments.len() < required || segments.len() > self.segments.len() {
            return None;
        }

        let mut params = Params::default();

        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if segments.get(idx).copied() != Some(expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = segments.get(idx)?;
                    params.insert(name, Some((*value).to_string()));
                }
                Segment::OptionalParam(name) => {
                    params.insert(name, segments.get(idx).map(|v| (*v).to_string()));
                }
            }
        }

        Some(params)
    }
}

/// Strip the query string and fragment from a path.
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Split a path into non-empty segments, ignoring a trailing slash.
fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static() {
        let pattern = Pattern::parse("/series").unwrap();
        assert_eq!(pattern.raw(), "/series");
        assert!(pattern.matches("/series").is_some());
        assert!(pattern.matches("/stats").is_none());
    }

    #[test]
    fn test_parse_root() {
        let pattern = Pattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/series").is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Pattern::parse(""), Err(PatternError::Empty)));
    }

    #[test]
    fn test_parse_missing_leading_slash() {
        let result = Pattern::parse("series");
        assert!(matches!(result, Err(PatternError::MissingLeadingSlash(_))));
    }

    #[test]
    fn test_parse_empty_param_name() {
        assert!(matches!(Pattern::parse("/series/:"), Err(PatternError::EmptyParamName(_))));
        assert!(matches!(Pattern::parse("/series/:?"), Err(PatternError::EmptyParamName(_))));
    }

    #[test]
    fn test_parse_optional_not_last() {
        let result = Pattern::parse("/issue/:variantIssueId?/detail");
        assert!(matches!(result, Err(PatternError::OptionalNotLast(_))));
    }

    #[test]
    fn test_parse_duplicate_param_name() {
        let result = Pattern::parse("/issue/:id/variant/:id");
        assert!(matches!(result, Err(PatternError::DuplicateParamName { .. })));
    }

    #[test]
    fn test_match_required_param() {
        let pattern = Pattern::parse("/series/:seriesId").unwrap();
        let params = pattern.matches("/series/1234").unwrap();
        assert_eq!(params.get("seriesId"), Some("1234"));
    }

    #[test]
    fn test_match_param_passes_value_verbatim() {
        let pattern = Pattern::parse("/series/:seriesId").unwrap();
        let params = pattern.matches("/series/Amazing%20Spider-Man").unwrap();
        assert_eq!(params.get("seriesId"), Some("Amazing%20Spider-Man"));
    }

    #[test]
    fn test_match_missing_required_param() {
        let pattern = Pattern::parse("/series/:seriesId").unwrap();
        assert!(pattern.matches("/series").is_none());
    }

    #[test]
    fn test_match_optional_param_present() {
        let pattern = Pattern::parse("/issue/:originalIssueId/variant/:variantIssueId?").unwrap();
        let params = pattern.matches("/issue/A1/variant/V2").unwrap();
        assert_eq!(params.get("originalIssueId"), Some("A1"));
        assert_eq!(params.get("variantIssueId"), Some("V2"));
    }

    #[test]
    fn test_match_optional_param_absent() {
        let pattern = Pattern::parse("/issue/:originalIssueId/variant/:variantIssueId?").unwrap();
        let params = pattern.matches("/issue/A1/variant").unwrap();
        assert_eq!(params.get("originalIssueId"), Some("A1"));
        // null sentinel, not an empty string
        assert!(params.contains("variantIssueId"));
        assert_eq!(params.get("variantIssueId"), None);
    }

    #[test]
    fn test_match_too_many_segments() {
        let pattern = Pattern::parse("/series/:seriesId").unwrap();
        assert!(pattern.matches("/series/1234/extra").is_none());
    }

    #[test]
    fn test_match_ignores_trailing_slash() {
        let pattern = Pattern::parse("/series").unwrap();
        assert!(pattern.matches("/series/").is_some());
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/series?sort=title"), "/series");
        assert_eq!(strip_query("/series#top"), "/series");
        assert_eq!(strip_query("/series"), "/series");
        assert_eq!(strip_query("/series?a=1#frag"), "/series");
    }
}
