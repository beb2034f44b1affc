//! isotope - isomorphic routing and action dispatch engine
//!
//! One routing table, one action layer, and one normalized store shared by
//! the server and browser shells of a content site. A route invocation
//! runs an ordered handler pipeline against an injected renderer and
//! navigator; handlers populate the store by dispatching actions and emit
//! exactly one terminal effect (render, redirect, not-found, or error).
//! The server serializes the resulting state tree next to its markup and
//! the client rehydrates an equivalent store from it.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod modules;
pub mod router;
pub mod site;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_support;

pub use app::{App, AppBuilder, Outcome, Request, Response};
pub use error::{ApiError, HandlerResult, HydrateError, RouteError};
pub use store::Store;
pub use view::{Component, Navigator, Renderer, View};
