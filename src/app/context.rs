//! Per-invocation request and response context.
//!
//! A `(Request, Response, Store)` triple is created by the App for each
//! navigation and discarded once the pipeline settles. The Response is the
//! handlers' whole interface to the outside world: dispatching actions,
//! rendering, redirecting, and the 404/error exits. It also enforces the
//! terminal-effect invariant — exactly one of rendered / redirected /
//! not-found / errored per invocation, first effect wins.

use super::dispatch::{ActionCreator, DispatchResult, Dispatcher};
use crate::error::RouteError;
use crate::router::Params;
use crate::view::{Component, Navigator, Renderer, View};
use parking_lot::Mutex;
use std::sync::Arc;

/// Hook invoked when an invocation falls through to the not-found page
/// (server shells use it to set the 404 status code).
pub type NotFoundHook = dyn Fn() + Send + Sync;

/// Hook invoked with the error that terminated an invocation. The engine
/// renders nothing on error; what the user sees is the owner's decision.
pub type ErrorHook = dyn Fn(&RouteError) + Send + Sync;

/// An incoming navigation or HTTP request, reduced to what handlers need.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Concrete path being visited (`/blog/my-post`).
    pub path: String,
    /// Parameters captured from the route template (`post` for
    /// `/blog/:post`).
    pub params: Params,
    /// Query-string parameters, already decoded by the shell.
    pub query: Params,
    /// Submitted form data, when the navigation carries any.
    pub body: Option<serde_json::Value>,
}

impl Request {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// A captured route parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// A query-string parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// The mutually exclusive ways a route invocation can terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered(Component),
    Redirected(String),
    NotFound,
    Errored,
}

/// Handler-facing response object for one route invocation.
pub struct Response {
    dispatcher: Dispatcher,
    renderer: Arc<dyn Renderer>,
    navigator: Arc<dyn Navigator>,
    on_not_found: Option<Arc<NotFoundHook>>,
    on_error: Option<Arc<ErrorHook>>,
    outcome: Mutex<Option<Outcome>>,
}

impl Response {
    pub(crate) fn new(
        dispatcher: Dispatcher,
        renderer: Arc<dyn Renderer>,
        navigator: Arc<dyn Navigator>,
        on_not_found: Option<Arc<NotFoundHook>>,
        on_error: Option<Arc<ErrorHook>>,
    ) -> Self {
        Self {
            dispatcher,
            renderer,
            navigator,
            on_not_found,
            on_error,
            outcome: Mutex::new(None),
        }
    }

    /// Dispatch an action and await its resolved payload.
    pub async fn dispatch<A: ActionCreator>(&self, creator: A) -> DispatchResult {
        self.dispatcher.dispatch(creator).await
    }

    /// Render a component with the given props. Terminal.
    pub fn render(&self, component: Component, props: serde_json::Value) {
        if !self.settle(Outcome::Rendered(component)) {
            return;
        }
        self.renderer.render(View::new(component, props));
    }

    /// Redirect to another path. Terminal.
    pub fn redirect(&self, path: &str) {
        if !self.settle(Outcome::Redirected(path.to_string())) {
            return;
        }
        self.navigator.navigate(path);
    }

    /// Fall through to the not-found page. Terminal.
    ///
    /// Invokes the optional not-found hook, then renders the fixed
    /// [`Component::NotFound`] view.
    pub fn render_404(&self) {
        if !self.settle(Outcome::NotFound) {
            return;
        }
        if let Some(hook) = &self.on_not_found {
            hook();
        }
        self.renderer
            .render(View::new(Component::NotFound, serde_json::json!({})));
    }

    /// Report the error that ends this invocation. Terminal.
    ///
    /// Invoked at most once per invocation, by the pipeline boundary.
    /// Renders nothing.
    pub fn handle_error(&self, error: &RouteError) {
        if !self.settle(Outcome::Errored) {
            return;
        }
        tracing::error!(code = error.code(), error = %error, "route invocation failed");
        if let Some(hook) = &self.on_error {
            hook(error);
        }
    }

    /// Whether a terminal effect has been produced.
    pub fn settled(&self) -> bool {
        self.outcome.lock().is_some()
    }

    /// The terminal effect, once one has been produced.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome.lock().clone()
    }

    /// Record a terminal effect. The first one wins; later attempts are
    /// logged and ignored.
    fn settle(&self, outcome: Outcome) -> bool {
        let mut slot = self.outcome.lock();
        if let Some(existing) = slot.as_ref() {
            tracing::warn!(
                existing = ?existing,
                attempted = ?outcome,
                "terminal effect already produced; ignoring"
            );
            return false;
        }
        *slot = Some(outcome);
        true
    }
}
