//! Pre-middleware shared across the admin URL space.

use crate::app::{Request, Response};
use crate::error::HandlerResult;
use crate::modules::session::LoadCurrentUser;
use crate::modules::ui::{self, SetLoading};
use crate::router::RouteHandler;
use crate::store::Store;
use async_trait::async_trait;

/// Resolve the signed-in user before any admin handler runs.
///
/// Passes through whatever the resolution yields; deciding what an
/// anonymous visitor may see is [`RequireAuth`]'s job.
pub struct CurrentUserMiddleware;

#[async_trait]
impl RouteHandler for CurrentUserMiddleware {
    async fn handle(&self, _req: &Request, res: &Response, _store: &Store) -> HandlerResult {
        res.dispatch(LoadCurrentUser).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "current_user"
    }
}

/// Redirect anonymous visitors to the sign-in page.
///
/// The sign-in path itself is exempt; without that, a signed-out visit to
/// it would redirect in a loop.
pub struct RequireAuth {
    pub sign_in_path: &'static str,
}

impl Default for RequireAuth {
    fn default() -> Self {
        Self {
            sign_in_path: "/admin/sign-in",
        }
    }
}

#[async_trait]
impl RouteHandler for RequireAuth {
    async fn handle(&self, req: &Request, res: &Response, store: &Store) -> HandlerResult {
        if req.path == self.sign_in_path {
            return Ok(());
        }
        if store.read(|state| ui::current_user(state).is_none()) {
            res.redirect(self.sign_in_path);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "require_auth"
    }
}

/// Wrap a handler with the global loading indicator.
///
/// The flag is cleared whether the inner handler succeeds or fails, so a
/// failed navigation never leaves the indicator stuck on.
pub struct WithLoader<H>(pub H);

#[async_trait]
impl<H: RouteHandler> RouteHandler for WithLoader<H> {
    async fn handle(&self, req: &Request, res: &Response, store: &Store) -> HandlerResult {
        res.dispatch(SetLoading(true)).await?;
        let result = self.0.handle(req, res, store).await;
        // Ignore the clear's (infallible) dispatch result so the inner
        // handler's outcome is what propagates.
        let _ = res.dispatch(SetLoading(false)).await;
        result
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}
