//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path
//!     → middleware.rs (pre-middleware pattern scan, ordered handler list)
//!     → + exact-route handler from the App's route table
//!     → pipeline.rs (strictly sequential execution, one terminal effect)
//! ```
//!
//! Tables are immutable after App construction; matching is deterministic
//! and free of any framework request type.

mod middleware;
mod pattern;
mod pipeline;

pub use middleware::MiddlewareMap;
pub use pattern::{Params, PathTemplate, RoutePattern};
pub use pipeline::{RouteHandler, run_handlers};
