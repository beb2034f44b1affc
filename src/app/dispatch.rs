//! Action dispatch.
//!
//! Creators are tagged commands: small typed structs implementing
//! [`ActionCreator`]. Dispatching one runs three steps:
//!
//! 1. `create` is invoked against the dispatcher context and may return an
//!    [`Action`] — or nothing, for guard clauses.
//! 2. If an action was produced it is applied to the store synchronously.
//!    Reducers observe the unresolved payload shape (pending, for deferred
//!    actions), so they can key off the kind without blocking on I/O.
//!    Subscribers are notified once, here.
//! 3. The returned future resolves to the deferred payload's eventual
//!    value, the ready payload, or `None` when no action was produced.
//!
//! A rejected deferred payload rejects the dispatch with the same error;
//! effects already applied by earlier synchronous dispatches stay — there
//! is no rollback. Creators that need the resolved entity in the store
//! append a continuation inside the deferred future that dispatches
//! follow-up synchronous actions.

use crate::api::Api;
use crate::error::ApiError;
use crate::store::{Action, Payload, PayloadValue, Store};
use std::sync::Arc;

/// Result of one dispatch: the resolved payload value, if any.
pub type DispatchResult = Result<Option<PayloadValue>, ApiError>;

/// A tagged command interpreted into an [`Action`].
///
/// Any caller can define new actions by implementing this trait; the
/// dispatcher imposes no registry beyond it.
pub trait ActionCreator: Send + Sync {
    /// Produce the action, or `None` to skip dispatch (guard clause).
    fn create(&self, cx: &Dispatcher) -> Option<Action>;
}

/// Dispatches actions against one store and one API collaborator.
///
/// Cheap to clone; deferred-action continuations capture a clone to
/// dispatch their follow-up actions.
#[derive(Clone)]
pub struct Dispatcher {
    store: Store,
    api: Arc<dyn Api>,
}

impl Dispatcher {
    pub fn new(store: Store, api: Arc<dyn Api>) -> Self {
        Self { store, api }
    }

    /// The data/API collaborator, for creators building deferred payloads.
    pub fn api(&self) -> Arc<dyn Api> {
        self.api.clone()
    }

    /// The store this dispatcher mutates.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run one creator through the three dispatch steps.
    pub async fn dispatch<A: ActionCreator>(&self, creator: A) -> DispatchResult {
        let Some(action) = creator.create(self) else {
            return Ok(None);
        };

        let kind = action.kind;
        match action.payload {
            Payload::Ready(value) => {
                tracing::debug!(kind = %kind, "dispatching action");
                self.store.apply(&crate::store::ActionView {
                    kind,
                    payload: Some(&value),
                });
                Ok(Some(value))
            }
            Payload::Deferred(future) => {
                tracing::debug!(kind = %kind, "dispatching deferred action");
                self.store
                    .apply(&crate::store::ActionView { kind, payload: None });
                let value = future.await?;
                Ok(Some(value))
            }
        }
    }
}
