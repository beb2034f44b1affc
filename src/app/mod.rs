//! The App façade: one store, two routing tables, and the collaborators
//! that turn handler decisions into user-visible effects.
//!
//! An App is built once per server request or once per browser session.
//! `route` holds no per-invocation state across calls — the store is the
//! only long-lived piece — so re-entry always starts a fresh match.
//!
//! Concurrent `route` calls are not ordered with respect to each other: a
//! superseded navigation's in-flight work is left to resolve, and its
//! terminal effect may race a newer navigation's. Callers needing
//! stale-response suppression should guard with an invocation id of their
//! own.

mod context;
mod dispatch;

pub use context::{ErrorHook, NotFoundHook, Outcome, Request, Response};
pub use dispatch::{ActionCreator, DispatchResult, Dispatcher};

use crate::api::Api;
use crate::router::{MiddlewareMap, Params, PathTemplate, RoutePattern, RouteHandler, run_handlers};
use crate::state::AppState;
use crate::store::Store;
use crate::view::{Navigator, Renderer};
use std::sync::Arc;

/// A concrete URL resolved against the route table.
#[derive(Debug)]
pub struct Recognized<'a> {
    /// The matching route template, as registered.
    pub route: &'a str,
    /// Parameters captured from the URL.
    pub params: Params,
}

/// Isomorphic application: routing tables plus the owned store.
pub struct App {
    store: Store,
    dispatcher: Dispatcher,
    routes: Vec<(PathTemplate, Arc<dyn RouteHandler>)>,
    pre_middleware: MiddlewareMap,
    renderer: Arc<dyn Renderer>,
    navigator: Arc<dyn Navigator>,
    on_not_found: Option<Arc<NotFoundHook>>,
    on_error: Option<Arc<ErrorHook>>,
}

impl App {
    pub fn builder(
        api: Arc<dyn Api>,
        renderer: Arc<dyn Renderer>,
        navigator: Arc<dyn Navigator>,
    ) -> AppBuilder {
        AppBuilder::new(api, renderer, navigator)
    }

    /// The owned store (server shells serialize it for hydration).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The dispatcher bound to this app's store and API.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Registered route templates, in registration order (server shells
    /// mount one HTTP route per entry).
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(template, _)| template.raw())
    }

    /// Resolve a concrete URL path to a registered route template and its
    /// captured parameters. First registered match wins.
    pub fn recognize(&self, path: &str) -> Option<Recognized<'_>> {
        self.routes.iter().find_map(|(template, _)| {
            template.capture(path).map(|params| Recognized {
                route: template.raw(),
                params,
            })
        })
    }

    /// Drive one route invocation to exactly one terminal effect.
    ///
    /// `path` is the route template key; `req.path` is the concrete path
    /// being visited (they differ for parameterized routes). The handler
    /// list is the pre-middleware whose patterns match `req.path`,
    /// followed by the exact route handler for `path`, if registered.
    pub async fn route(&self, path: &str, req: Request) {
        let mut handlers = self.pre_middleware.matches(&req.path);
        if let Some((_, handler)) = self
            .routes
            .iter()
            .find(|(template, _)| template.raw() == path)
        {
            handlers.push(handler.clone());
        }

        tracing::debug!(
            route = %path,
            path = %req.path,
            handlers = handlers.len(),
            "routing"
        );

        let res = Response::new(
            self.dispatcher.clone(),
            self.renderer.clone(),
            self.navigator.clone(),
            self.on_not_found.clone(),
            self.on_error.clone(),
        );

        run_handlers(&handlers, &req, &res, &self.store).await;
    }

    /// Resolve a concrete URL and route it: recognize the template,
    /// capture parameters, and invoke [`App::route`]. Unrecognized paths
    /// still run matching pre-middleware before falling through to 404.
    pub async fn navigate(&self, path: &str) {
        match self.recognize(path) {
            Some(recognized) => {
                let route = recognized.route.to_string();
                let req = Request::new(path).with_params(recognized.params);
                self.route(&route, req).await;
            }
            None => {
                self.route(path, Request::new(path)).await;
            }
        }
    }
}

/// Builder for [`App`].
pub struct AppBuilder {
    api: Arc<dyn Api>,
    renderer: Arc<dyn Renderer>,
    navigator: Arc<dyn Navigator>,
    routes: Vec<(PathTemplate, Arc<dyn RouteHandler>)>,
    pre_middleware: MiddlewareMap,
    initial_state: Option<AppState>,
    on_not_found: Option<Arc<NotFoundHook>>,
    on_error: Option<Arc<ErrorHook>>,
}

impl AppBuilder {
    pub fn new(
        api: Arc<dyn Api>,
        renderer: Arc<dyn Renderer>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            renderer,
            navigator,
            routes: Vec::new(),
            pre_middleware: MiddlewareMap::new(),
            initial_state: None,
            on_not_found: None,
            on_error: None,
        }
    }

    /// Register an exact-route handler under a path template.
    pub fn route(mut self, template: &str, handler: impl RouteHandler + 'static) -> Self {
        self.routes
            .push((PathTemplate::parse(template), Arc::new(handler)));
        self
    }

    /// Register pre-middleware under a wildcard-capable pattern.
    pub fn middleware(mut self, pattern: &str, handlers: Vec<Arc<dyn RouteHandler>>) -> Self {
        self.pre_middleware
            .register(RoutePattern::parse(pattern), handlers);
        self
    }

    /// Seed the store with an existing state tree (client hydration).
    pub fn initial_state(mut self, state: AppState) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn on_not_found(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_not_found = Some(Arc::new(hook));
        self
    }

    pub fn on_error(
        mut self,
        hook: impl Fn(&crate::error::RouteError) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> App {
        let store = match self.initial_state {
            Some(state) => Store::with_state(state),
            None => Store::new(),
        };
        let dispatcher = Dispatcher::new(store.clone(), self.api);

        App {
            store,
            dispatcher,
            routes: self.routes,
            pre_middleware: self.pre_middleware,
            renderer: self.renderer,
            navigator: self.navigator,
            on_not_found: self.on_not_found,
            on_error: self.on_error,
        }
    }
}
