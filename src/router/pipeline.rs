//! Handler pipeline execution.
//!
//! Handlers run strictly in order: handler i+1 does not begin until
//! handler i's future has settled, so later handlers can rely on state
//! mutated by earlier asynchronous ones. The pipeline short-circuits as
//! soon as a handler produces a terminal effect, routes any failure to the
//! invocation's single `handle_error` exit, and falls back to `render_404`
//! when the list is exhausted without a terminal effect.

use crate::app::{Request, Response};
use crate::error::HandlerResult;
use crate::store::Store;
use async_trait::async_trait;
use std::sync::Arc;

/// A route or pre-middleware handler.
///
/// Handlers either produce a terminal effect through the response
/// (`render`, `redirect`, `render_404`) or delegate by returning without
/// one, letting iteration continue.
#[async_trait]
pub trait RouteHandler: Send + Sync {
    async fn handle(&self, req: &Request, res: &Response, store: &Store) -> HandlerResult;

    /// Short name for log labeling.
    fn name(&self) -> &'static str {
        "route_handler"
    }
}

/// Drive an ordered handler list to exactly one terminal effect.
pub async fn run_handlers(
    handlers: &[Arc<dyn RouteHandler>],
    req: &Request,
    res: &Response,
    store: &Store,
) {
    for handler in handlers {
        match handler.handle(req, res, store).await {
            Ok(()) => {
                if res.settled() {
                    tracing::debug!(handler = handler.name(), "pipeline settled");
                    return;
                }
            }
            Err(error) => {
                tracing::debug!(handler = handler.name(), code = error.code(), "handler failed");
                res.handle_error(&error);
                return;
            }
        }
    }

    // Exhausted without a terminal effect.
    res.render_404();
}
