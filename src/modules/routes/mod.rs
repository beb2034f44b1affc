//! Route handlers and pre-middleware for the site's URL space.
//!
//! Handlers own the load-then-render sequence for one page: dispatch the
//! actions that populate the store, read the result back through selectors,
//! and emit exactly one terminal effect.

mod admin;
mod blog;
mod home;
mod middleware;
mod projects;

pub use admin::{AdminIndexRoute, EditPostRoute, NewPostRoute, SignInRoute};
pub use blog::{BlogIndexRoute, PostRoute};
pub use home::HomeRoute;
pub use middleware::{CurrentUserMiddleware, RequireAuth, WithLoader};
pub use projects::ProjectsRoute;
