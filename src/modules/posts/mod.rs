//! Posts domain: action creators, reducer wiring, selectors.

pub mod actions;
pub mod selectors;

pub use actions::{
    AddPost, AddPosts, CreatePost, DeletePost, LoadPost, LoadPosts, UpdatePost, UpdatePostEntry,
};
pub use selectors::{all_posts, post_by_permalink, published_posts};

use crate::state::{EntityId, Post};
use crate::store::{
    ActionKind, ActionView, EntityMap, PayloadValue, Reducer, create_reducer, merge_all_with_state,
    merge_with_state,
};

// Synchronous kinds (carry the resolved entity).
pub const POST_ADD: ActionKind = ActionKind("POST_ADD");
pub const POSTS_ADD: ActionKind = ActionKind("POSTS_ADD");
pub const POST_UPDATE: ActionKind = ActionKind("POST_UPDATE");

// Deferred kinds (reducers see these with a pending payload).
pub const POST_LOAD: ActionKind = ActionKind("POST_LOAD");
pub const POSTS_LOAD: ActionKind = ActionKind("POSTS_LOAD");
pub const POST_CREATE: ActionKind = ActionKind("POST_CREATE");
pub const POST_SAVE: ActionKind = ActionKind("POST_SAVE");
// POST_DELETE deliberately has no reducer: the slice keeps the entry until
// the next listing refresh, matching the API-only deletion semantics.
pub const POST_DELETE: ActionKind = ActionKind("POST_DELETE");

fn post_payload(action: &ActionView<'_>) -> Option<Post> {
    match action.payload {
        Some(PayloadValue::Post(post)) => Some(post.clone()),
        _ => None,
    }
}

fn posts_payload(action: &ActionView<'_>) -> Option<Vec<Post>> {
    match action.payload {
        Some(PayloadValue::Posts(posts)) => Some(posts.clone()),
        _ => None,
    }
}

/// Reducer for the posts slice.
pub fn reducer() -> Reducer<EntityMap<EntityId, Post>> {
    let by_id = |post: &Post| post.id;

    create_reducer(vec![
        (POST_ADD, merge_with_state(by_id, post_payload)),
        (POSTS_ADD, merge_all_with_state(by_id, posts_payload)),
        (POST_UPDATE, merge_with_state(by_id, post_payload)),
    ])
}
