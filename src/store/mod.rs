//! Store subsystem: actions, reducers, and the state container.
//!
//! # Data Flow
//! ```text
//! ActionCreator::create
//!     → Action { kind, payload: Ready | Deferred }
//!     → Store::apply (synchronous reduction, subscribers notified)
//!     → [Deferred only] payload future resolves
//!     → continuation dispatches follow-up synchronous actions
//! ```

mod action;
mod reducer;
#[allow(clippy::module_inception)]
mod store;

pub use action::{Action, ActionKind, ActionView, Payload, PayloadFuture, PayloadValue};
pub use reducer::{EntityMap, Reducer, create_reducer, merge_all_with_state, merge_with_state};
pub use store::{Store, Subscriber};
