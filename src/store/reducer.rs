//! Reducers and the merge-by-id combinators.
//!
//! A reducer is a pure function from `(state slice, action view)` to a new
//! slice. Reducers are registered per action kind via [`create_reducer`];
//! kinds with no registered reducer leave the slice untouched.
//!
//! The two combinators cover the normalized-store workhorse cases: merging
//! one entity, or a batch of entities, into an id-keyed map. Merging never
//! drops existing keys, overwrites by id, and is idempotent.

use super::action::ActionView;
use std::collections::{BTreeMap, HashMap};

/// Ordered id-keyed map holding one entity kind.
pub type EntityMap<K, T> = BTreeMap<K, T>;

/// A pure state-slice reducer.
pub type Reducer<S> = Box<dyn Fn(S, &ActionView<'_>) -> S + Send + Sync>;

/// Combine per-kind reducers into one. The combined reducer looks up the
/// action's kind; unregistered kinds return the slice unchanged rather than
/// erroring.
pub fn create_reducer<S: 'static>(handlers: Vec<(super::ActionKind, Reducer<S>)>) -> Reducer<S> {
    let table: HashMap<super::ActionKind, Reducer<S>> = handlers.into_iter().collect();

    Box::new(move |slice, action| match table.get(&action.kind) {
        Some(reduce) => reduce(slice, action),
        None => slice,
    })
}

/// Reducer that merges one entity into the slice, keyed by `get_id`.
///
/// `get_value` reads the entity out of the action; when it yields `None`
/// (wrong payload shape, or a deferred action's pending pass) the slice is
/// returned unchanged.
pub fn merge_with_state<K, T, I, V>(get_id: I, get_value: V) -> Reducer<EntityMap<K, T>>
where
    K: Ord + Send + Sync + 'static,
    T: Send + Sync + 'static,
    I: Fn(&T) -> K + Send + Sync + 'static,
    V: Fn(&ActionView<'_>) -> Option<T> + Send + Sync + 'static,
{
    Box::new(move |mut slice, action| {
        if let Some(entity) = get_value(action) {
            slice.insert(get_id(&entity), entity);
        }
        slice
    })
}

/// Reducer that merges a sequence of entities into the slice, keyed by
/// `get_id`. Equivalent to repeated single merges; later entities win on
/// id collision.
pub fn merge_all_with_state<K, T, I, V>(get_id: I, get_value: V) -> Reducer<EntityMap<K, T>>
where
    K: Ord + Send + Sync + 'static,
    T: Send + Sync + 'static,
    I: Fn(&T) -> K + Send + Sync + 'static,
    V: Fn(&ActionView<'_>) -> Option<Vec<T>> + Send + Sync + 'static,
{
    Box::new(move |mut slice, action| {
        if let Some(entities) = get_value(action) {
            for entity in entities {
                slice.insert(get_id(&entity), entity);
            }
        }
        slice
    })
}
