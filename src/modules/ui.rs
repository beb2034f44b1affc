//! Transient UI state: the signed-in user reference and the loading flag.

use crate::app::{ActionCreator, Dispatcher};
use crate::state::{AppState, EntityId, UiState, User};
use crate::store::{Action, ActionKind, ActionView, PayloadValue, Reducer, create_reducer};

pub const CURRENT_USER_SET: ActionKind = ActionKind("CURRENT_USER_SET");
pub const LOADING_SET: ActionKind = ActionKind("LOADING_SET");

/// Record (or clear) the signed-in user reference.
pub struct SetCurrentUser(pub Option<EntityId>);

impl ActionCreator for SetCurrentUser {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(
            CURRENT_USER_SET,
            PayloadValue::CurrentUser(self.0),
        ))
    }
}

/// Toggle the global loading indicator.
pub struct SetLoading(pub bool);

impl ActionCreator for SetLoading {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(LOADING_SET, PayloadValue::Loading(self.0)))
    }
}

/// The signed-in user, joined through the users slice.
pub fn current_user(state: &AppState) -> Option<&User> {
    state
        .ui
        .current_user_id
        .and_then(|id| state.users.get(&id))
}

/// Reducer for the ui slice.
pub fn reducer() -> Reducer<UiState> {
    create_reducer(vec![
        (
            CURRENT_USER_SET,
            Box::new(|mut ui: UiState, action: &ActionView<'_>| {
                if let Some(PayloadValue::CurrentUser(id)) = action.payload {
                    ui.current_user_id = *id;
                }
                ui
            }),
        ),
        (
            LOADING_SET,
            Box::new(|mut ui: UiState, action: &ActionView<'_>| {
                if let Some(PayloadValue::Loading(flag)) = action.payload {
                    ui.loading = *flag;
                }
                ui
            }),
        ),
    ])
}
