//! Post action creators.
//!
//! Deferred creators follow the two-step contract: the fetch/save future
//! resolves the entity, then a continuation dispatches the matching
//! synchronous `*_ADD` / `*_UPDATE` action so the reducer merges it. The
//! deferred kind itself is never reduced with a value.

use super::{POST_ADD, POST_CREATE, POST_DELETE, POST_LOAD, POST_SAVE, POST_UPDATE, POSTS_ADD,
    POSTS_LOAD};
use crate::api::{PostDraft, PostQuery};
use crate::app::{ActionCreator, Dispatcher};
use crate::state::{EntityId, Post};
use crate::store::{Action, PayloadValue};
use futures_util::FutureExt;

/// Fetch the post listing (optionally including unpublished drafts).
pub struct LoadPosts {
    pub include_unpublished: bool,
}

impl ActionCreator for LoadPosts {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let api = cx.api();
        let cx = cx.clone();
        let query = PostQuery {
            include_unpublished: self.include_unpublished,
            editable: false,
        };
        Some(Action::deferred(
            POSTS_LOAD,
            async move {
                let posts = api.get_posts(query).await?;
                cx.dispatch(AddPosts(posts.clone())).await?;
                Ok(PayloadValue::Posts(posts))
            }
            .boxed(),
        ))
    }
}

/// Fetch one post by permalink, skipping the fetch when the store already
/// holds a sufficiently complete copy.
pub struct LoadPost {
    pub permalink: String,
    pub editable: bool,
}

impl ActionCreator for LoadPost {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let editable = self.editable;
        let cached = cx.store().read(|state| {
            state.posts.values().any(|post| {
                post.permalink == self.permalink
                    && if editable {
                        post.body_raw.is_some()
                    } else {
                        post.body.is_some()
                    }
            })
        });
        if cached {
            return None;
        }

        let api = cx.api();
        let cx = cx.clone();
        let permalink = self.permalink.clone();
        let query = PostQuery {
            include_unpublished: false,
            editable,
        };
        Some(Action::deferred(
            POST_LOAD,
            async move {
                let post = api.get_post(&permalink, query).await?;
                cx.dispatch(AddPost(post.clone())).await?;
                Ok(PayloadValue::Post(post))
            }
            .boxed(),
        ))
    }
}

/// Persist a new post.
pub struct CreatePost {
    pub draft: PostDraft,
}

impl ActionCreator for CreatePost {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let api = cx.api();
        let cx = cx.clone();
        let draft = self.draft.clone();
        Some(Action::deferred(
            POST_CREATE,
            async move {
                let post = api.create_post(draft).await?;
                cx.dispatch(AddPost(post.clone())).await?;
                Ok(PayloadValue::Post(post))
            }
            .boxed(),
        ))
    }
}

/// Persist edits to an existing post.
pub struct UpdatePost {
    pub id: EntityId,
    pub draft: PostDraft,
}

impl ActionCreator for UpdatePost {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let api = cx.api();
        let cx = cx.clone();
        let id = self.id;
        let draft = self.draft.clone();
        Some(Action::deferred(
            POST_SAVE,
            async move {
                let post = api.update_post(id, draft).await?;
                cx.dispatch(UpdatePostEntry(post.clone())).await?;
                Ok(PayloadValue::Post(post))
            }
            .boxed(),
        ))
    }
}

/// Delete a post. The slice is left untouched; listings refetch.
pub struct DeletePost {
    pub id: EntityId,
}

impl ActionCreator for DeletePost {
    fn create(&self, cx: &Dispatcher) -> Option<Action> {
        let api = cx.api();
        let id = self.id;
        Some(Action::deferred(
            POST_DELETE,
            async move {
                api.delete_post(id).await?;
                Ok(PayloadValue::Empty)
            }
            .boxed(),
        ))
    }
}

/// Merge one fetched post into the store.
pub struct AddPost(pub Post);

impl ActionCreator for AddPost {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(POST_ADD, PayloadValue::Post(self.0.clone())))
    }
}

/// Merge a batch of fetched posts into the store.
pub struct AddPosts(pub Vec<Post>);

impl ActionCreator for AddPosts {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(POSTS_ADD, PayloadValue::Posts(self.0.clone())))
    }
}

/// Overwrite a post entry after a successful save.
pub struct UpdatePostEntry(pub Post);

impl ActionCreator for UpdatePostEntry {
    fn create(&self, _cx: &Dispatcher) -> Option<Action> {
        Some(Action::ready(POST_UPDATE, PayloadValue::Post(self.0.clone())))
    }
}
