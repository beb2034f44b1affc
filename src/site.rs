//! The site's route table.
//!
//! Both shells build their App here so the URL space exists exactly once.
//! The returned builder is preconfigured with every route and the admin
//! pre-middleware; shells add their hydration state and hooks before
//! calling `build`.

use crate::api::Api;
use crate::app::AppBuilder;
use crate::modules::routes::{
    AdminIndexRoute, BlogIndexRoute, CurrentUserMiddleware, EditPostRoute, HomeRoute, NewPostRoute,
    PostRoute, ProjectsRoute, RequireAuth, SignInRoute, WithLoader,
};
use crate::router::RouteHandler;
use crate::view::{Navigator, Renderer};
use std::sync::Arc;

/// Assemble the site's routes and middleware into an [`AppBuilder`].
pub fn build_app(
    api: Arc<dyn Api>,
    renderer: Arc<dyn Renderer>,
    navigator: Arc<dyn Navigator>,
) -> AppBuilder {
    let admin_middleware: Vec<Arc<dyn RouteHandler>> = vec![
        Arc::new(CurrentUserMiddleware),
        Arc::new(RequireAuth::default()),
    ];

    AppBuilder::new(api, renderer, navigator)
        .route("/", WithLoader(HomeRoute))
        .route("/projects", ProjectsRoute)
        .route("/blog", BlogIndexRoute)
        .route("/blog/:post", PostRoute)
        .route("/admin", AdminIndexRoute)
        .route("/admin/sign-in", SignInRoute)
        .route("/admin/posts/new", NewPostRoute)
        .route("/admin/posts/:post/edit", EditPostRoute)
        .middleware("/admin*", admin_middleware)
}
