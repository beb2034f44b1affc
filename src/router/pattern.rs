//! Route patterns and path templates.
//!
//! Two matching flavors exist, for the two lookup tables:
//!
//! - [`RoutePattern`]: pre-middleware patterns. A trailing `*` makes the
//!   pattern a prefix match (`/admin*` matches `/admin` and everything
//!   under it); otherwise equality is required.
//! - [`PathTemplate`]: exact-route templates with `:name` parameter
//!   segments (`/blog/:post`), used to recognize concrete URLs and
//!   capture their parameters.
//!
//! Matching is O(pattern length) and side-effect free; no regex.

use std::collections::HashMap;

/// Captured `:name` parameters from a matched path.
pub type Params = HashMap<String, String>;

/// A pre-middleware pattern: exact path or trailing-wildcard prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(String),
    Prefix(String),
}

impl RoutePattern {
    /// Parse a pattern string; a trailing `*` marks a prefix match.
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix('*') {
            Some(prefix) => Self::Prefix(prefix.to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    /// Whether `path` satisfies this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A route template with optional `:name` parameter segments.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(raw: &str) -> Self {
        let segments = split(raw)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The template string exactly as registered.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Match a concrete path against the template, capturing parameters.
    /// Segment counts must agree; literals must be equal.
    pub fn capture(&self, path: &str) -> Option<Params> {
        let segments: Vec<&str> = split(path).collect();
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            match expected {
                Segment::Literal(literal) => {
                    if literal != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), actual.to_string());
                }
            }
        }
        Some(params)
    }
}

/// Path segments, ignoring empty pieces from leading/trailing slashes.
fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pattern_requires_equality() {
        let pattern = RoutePattern::parse("/blog");
        assert!(pattern.matches("/blog"));
        assert!(!pattern.matches("/blog/post"));
        assert!(!pattern.matches("/"));
    }

    #[test]
    fn wildcard_pattern_matches_prefix() {
        let pattern = RoutePattern::parse("/admin*");
        assert_eq!(pattern, RoutePattern::Prefix("/admin".into()));
        assert!(pattern.matches("/admin"));
        assert!(pattern.matches("/admin/posts/new"));
        assert!(!pattern.matches("/blog"));
    }

    #[test]
    fn template_without_params_matches_exactly() {
        let template = PathTemplate::parse("/admin/posts/new");
        assert!(template.capture("/admin/posts/new").is_some());
        assert!(template.capture("/admin/posts").is_none());
        assert!(template.capture("/admin/posts/new/extra").is_none());
    }

    #[test]
    fn template_captures_named_params() {
        let template = PathTemplate::parse("/blog/:post");
        let params = template.capture("/blog/my-first-post").unwrap();
        assert_eq!(params.get("post").map(String::as_str), Some("my-first-post"));
        assert!(template.capture("/projects").is_none());
    }

    #[test]
    fn template_tolerates_trailing_slash() {
        let template = PathTemplate::parse("/blog/:post");
        assert!(template.capture("/blog/hello/").is_some());
    }

    #[test]
    fn root_template_matches_root_only() {
        let template = PathTemplate::parse("/");
        assert!(template.capture("/").is_some());
        assert!(template.capture("/blog").is_none());
    }
}
