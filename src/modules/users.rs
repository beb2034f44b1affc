//! Users domain: the id-keyed user slice.
//!
//! Users only enter the store through session flows (sign-in, current-user
//! restoration), so this module is small: one merge action and a lookup.

use crate::app::{ActionCreator, Dispatcher};
use crate::state::{AppState, EntityId, User};
use crate::store::{
    Action, ActionKind, ActionView, EntityMap, PayloadValue, Reducer, create_reducer,
    merge_with_state,
};

pub const USER_ADD: ActionKind = ActionKind("USER_ADD");

/// Merge one user into the store.
pub struct AddUser(pub User);

impl ActionCreator for AddUser {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(USER_ADD, PayloadValue::User(self.0.clone())))
    }
}

/// Look up a user by id.
pub fn get_user(state: &AppState, id: EntityId) -> Option<&User> {
    state.users.get(&id)
}

/// Reducer for the users slice.
pub fn reducer() -> Reducer<EntityMap<EntityId, User>> {
    create_reducer(vec![(
        USER_ADD,
        merge_with_state(
            |user: &User| user.id,
            |action: &ActionView<'_>| match action.payload {
                Some(PayloadValue::User(user)) => Some(user.clone()),
                _ => None,
            },
        ),
    )])
}
