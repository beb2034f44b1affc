//! Session flows: sign-in, sign-out, and current-user restoration.
//!
//! The session itself lives with the data layer (a cookie on the browser
//! side); the store only keeps the signed-in user entity and the ui slice's
//! reference to it. No reducer responds to the deferred kinds here — the
//! continuations dispatch [`AddUser`] and [`SetCurrentUser`], which is how
//! the resolved session reaches the tree.

use super::ui::SetCurrentUser;
use super::users::AddUser;
use crate::app::{ActionCreator, Dispatcher};
use crate::store::{Action, ActionKind, PayloadValue};
use futures_util::FutureExt;

pub const SIGN_IN: ActionKind = ActionKind("SIGN_IN");
pub const SIGN_OUT: ActionKind = ActionKind("SIGN_OUT");
pub const CURRENT_USER_LOAD: ActionKind = ActionKind("CURRENT_USER_LOAD");

/// Exchange credentials for a session.
pub struct SignIn {
    pub username: String,
    pub password: String,
}

impl ActionCreator for SignIn {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let api = cx.api();
        let cx = cx.clone();
        let username = self.username.clone();
        let password = self.password.clone();
        Some(Action::deferred(
            SIGN_IN,
            async move {
                let session = api.create_session(&username, &password).await?;
                let user = session.user;
                let id = user.id;
                cx.dispatch(AddUser(user.clone())).await?;
                cx.dispatch(SetCurrentUser(Some(id))).await?;
                Ok(PayloadValue::User(user))
            }
            .boxed(),
        ))
    }
}

/// Destroy the session and clear the signed-in reference.
pub struct SignOut;

impl ActionCreator for SignOut {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let api = cx.api();
        let cx = cx.clone();
        Some(Action::deferred(
            SIGN_OUT,
            async move {
                api.destroy_session().await?;
                cx.dispatch(SetCurrentUser(None)).await?;
                Ok(PayloadValue::Empty)
            }
            .boxed(),
        ))
    }
}

/// Restore the signed-in user from an existing session, if any.
///
/// Skipped entirely when the ui slice already references a user — a
/// hydrated client does not re-fetch what the server resolved.
pub struct LoadCurrentUser;

impl ActionCreator for LoadCurrentUser {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        if cx
            .store()
            .read(|state| state.ui.current_user_id.is_some())
        {
            return None;
        }

        let api = cx.api();
        let cx = cx.clone();
        Some(Action::deferred(
            CURRENT_USER_LOAD,
            async move {
                let user = api.current_user().await?;
                let id = user.as_ref().map(|u| u.id);
                if let Some(user) = user {
                    cx.dispatch(AddUser(user)).await?;
                    cx.dispatch(SetCurrentUser(id)).await?;
                }
                Ok(PayloadValue::CurrentUser(id))
            }
            .boxed(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::test_support::{StaticApi, sample_user};
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Store::new(), Arc::new(StaticApi))
    }

    #[tokio::test]
    async fn failed_sign_in_leaves_no_user_behind() {
        let cx = dispatcher();
        let err = cx
            .dispatch(SignIn {
                username: "admin".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "invalid_credentials");
        cx.store().read(|state| {
            assert!(state.users.is_empty());
            assert!(state.ui.current_user_id.is_none());
        });
    }

    #[tokio::test]
    async fn load_current_user_resolves_anonymous() {
        let cx = dispatcher();
        let resolved = cx.dispatch(LoadCurrentUser).await.unwrap();
        assert_eq!(resolved, Some(PayloadValue::CurrentUser(None)));
    }

    #[tokio::test]
    async fn load_current_user_skips_when_already_resolved() {
        let cx = dispatcher();
        cx.dispatch(AddUser(sample_user(5, "admin"))).await.unwrap();
        cx.dispatch(SetCurrentUser(Some(5))).await.unwrap();

        // Guard clause: no fetch, resolves None.
        let resolved = cx.dispatch(LoadCurrentUser).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn sign_out_clears_the_reference() {
        let cx = dispatcher();
        cx.dispatch(AddUser(sample_user(5, "admin"))).await.unwrap();
        cx.dispatch(SetCurrentUser(Some(5))).await.unwrap();

        cx.dispatch(SignOut).await.unwrap();
        cx.store().read(|state| {
            assert!(state.ui.current_user_id.is_none());
            // The entity itself stays normalized in the users slice.
            assert!(state.users.contains_key(&5));
        });
    }
}
