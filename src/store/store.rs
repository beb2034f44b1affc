//! The Store: single owner of the normalized state tree.
//!
//! One Store exists per App (per request on the server, per session in the
//! browser). All mutation flows through dispatched actions — the only write
//! path is `apply`, which is crate-internal and called by the dispatcher.
//! Reduction is synchronous: no two reductions interleave, and subscribers
//! are notified exactly once per applied action.

use super::action::ActionView;
use super::reducer::Reducer;
use crate::error::HydrateError;
use crate::state::{AppState, root_reducer};
use parking_lot::RwLock;
use std::sync::Arc;

/// Callback invoked after every applied action with the new state.
pub type Subscriber = Box<dyn Fn(&AppState) + Send + Sync>;

struct StoreInner {
    state: RwLock<AppState>,
    reducer: Reducer<AppState>,
    subscribers: RwLock<Vec<Subscriber>>,
}

/// Cheaply clonable handle to the state tree.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Create a store over an empty state tree.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with an existing state tree (hydration, tests).
    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                reducer: root_reducer(),
                subscribers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Rebuild a store from a serialized state payload.
    ///
    /// This is the client half of the hydration contract: state, not an
    /// action log, is the transferred artifact. A hydrated store is
    /// equivalent to the one that produced the payload.
    pub fn hydrate(json: &str) -> Result<Self, HydrateError> {
        let state: AppState = serde_json::from_str(json)?;
        Ok(Self::with_state(state))
    }

    /// Serialize the current state tree for embedding next to server
    /// rendered markup.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.inner.state.read())
    }

    /// Run the root reducer over the current tree and notify subscribers.
    ///
    /// Synchronous with respect to dispatch: the write section completes
    /// before the dispatcher awaits any deferred payload.
    pub(crate) fn apply(&self, view: &ActionView<'_>) {
        {
            let mut state = self.inner.state.write();
            let current = std::mem::take(&mut *state);
            *state = (self.inner.reducer)(current, view);
        }

        let state = self.inner.state.read();
        for subscriber in self.inner.subscribers.read().iter() {
            subscriber(&state);
        }
    }

    /// Clone the current state tree.
    pub fn snapshot(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Read from the current state tree without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.read())
    }

    /// Register a subscriber, notified once per applied action.
    pub fn subscribe(&self, f: impl Fn(&AppState) + Send + Sync + 'static) {
        self.inner.subscribers.write().push(Box::new(f));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
