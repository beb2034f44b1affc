//! Action types: the only way state enters the store.
//!
//! An action is a tagged description of an intended state change. Its
//! payload is either `Ready` (a value reducers can merge immediately) or
//! `Deferred` (an in-flight future). Reducers always observe the
//! *unresolved* shape — for a deferred action they see a pending payload
//! and the resolved entity reaches the store through follow-up synchronous
//! actions dispatched by the creator's continuation.

use crate::error::ApiError;
use crate::state::{EntityId, Page, Post, User};
use futures_util::future::BoxFuture;
use std::fmt;

/// The tag identifying which reducers respond to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionKind(pub &'static str);

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The resolved value an action carries.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Post(Post),
    Posts(Vec<Post>),
    User(User),
    Page(Page),
    CurrentUser(Option<EntityId>),
    Loading(bool),
    /// An action whose side effect carries no data (e.g. a deletion).
    Empty,
}

/// Future for a deferred action's payload.
pub type PayloadFuture = BoxFuture<'static, Result<PayloadValue, ApiError>>;

/// An action's payload: available now, or pending on the API collaborator.
pub enum Payload {
    Ready(PayloadValue),
    Deferred(PayloadFuture),
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A dispatched state change.
#[derive(Debug)]
pub struct Action {
    pub kind: ActionKind,
    pub payload: Payload,
}

impl Action {
    /// A synchronous action: reducers see the value immediately.
    pub fn ready(kind: ActionKind, value: PayloadValue) -> Self {
        Self {
            kind,
            payload: Payload::Ready(value),
        }
    }

    /// An asynchronous action: reducers see a pending payload now; the
    /// dispatcher resolves to the future's eventual value.
    pub fn deferred(kind: ActionKind, future: PayloadFuture) -> Self {
        Self {
            kind,
            payload: Payload::Deferred(future),
        }
    }
}

/// What a reducer observes: the kind, and the payload value if the action
/// is synchronous (`None` while a deferred payload is still in flight).
#[derive(Debug, Clone, Copy)]
pub struct ActionView<'a> {
    pub kind: ActionKind,
    pub payload: Option<&'a PayloadValue>,
}
