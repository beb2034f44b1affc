//! Pre-middleware lookup table.
//!
//! Patterns are evaluated as a set: a path may match several entries, and
//! their handler lists concatenate in registration order. No match yields
//! an empty list, never an error. Lookup is a linear scan over the table —
//! O(number of patterns) per request, side-effect free.

use super::pattern::RoutePattern;
use super::pipeline::RouteHandler;
use std::sync::Arc;

/// Ordered table of wildcard-capable patterns to handler lists.
#[derive(Default)]
pub struct MiddlewareMap {
    entries: Vec<(RoutePattern, Vec<Arc<dyn RouteHandler>>)>,
}

impl MiddlewareMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler list under a pattern. Registration order is the
    /// order handler lists concatenate at match time.
    pub fn register(&mut self, pattern: RoutePattern, handlers: Vec<Arc<dyn RouteHandler>>) {
        self.entries.push((pattern, handlers));
    }

    /// All handlers whose pattern matches `path`, concatenated in
    /// registration order.
    pub fn matches(&self, path: &str) -> Vec<Arc<dyn RouteHandler>> {
        self.entries
            .iter()
            .filter(|(pattern, _)| pattern.matches(path))
            .flat_map(|(_, handlers)| handlers.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Request, Response};
    use crate::error::HandlerResult;
    use crate::store::Store;
    use async_trait::async_trait;

    struct Named(&'static str);

    #[async_trait]
    impl RouteHandler for Named {
        async fn handle(&self, _req: &Request, _res: &Response, _store: &Store) -> HandlerResult {
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.0
        }
    }

    fn names(handlers: &[Arc<dyn RouteHandler>]) -> Vec<&'static str> {
        handlers.iter().map(|h| h.name()).collect()
    }

    #[test]
    fn no_match_yields_empty_list() {
        let mut map = MiddlewareMap::new();
        map.register(RoutePattern::parse("/admin*"), vec![Arc::new(Named("auth"))]);
        assert!(map.matches("/blog").is_empty());
    }

    #[test]
    fn matching_lists_concatenate_in_registration_order() {
        let mut map = MiddlewareMap::new();
        map.register(
            RoutePattern::parse("/admin*"),
            vec![Arc::new(Named("current_user")), Arc::new(Named("auth"))],
        );
        map.register(
            RoutePattern::parse("/admin/posts*"),
            vec![Arc::new(Named("posts_guard"))],
        );

        assert_eq!(
            names(&map.matches("/admin/posts/new")),
            vec!["current_user", "auth", "posts_guard"]
        );
        assert_eq!(names(&map.matches("/admin")), vec!["current_user", "auth"]);
    }

    #[test]
    fn exact_pattern_participates_in_the_set() {
        let mut map = MiddlewareMap::new();
        map.register(RoutePattern::parse("/blog"), vec![Arc::new(Named("exact"))]);
        map.register(RoutePattern::parse("/blog*"), vec![Arc::new(Named("prefix"))]);

        assert_eq!(names(&map.matches("/blog")), vec!["exact", "prefix"]);
        assert_eq!(names(&map.matches("/blog/hello")), vec!["prefix"]);
    }
}
