//! Read-side queries over the posts slice.

use crate::state::{AppState, Post};
use std::cmp::Reverse;

/// Every post, newest first (undated posts sort last, ties break on id).
pub fn all_posts(state: &AppState) -> Vec<Post> {
    let mut posts: Vec<Post> = state.posts.values().cloned().collect();
    posts.sort_by_key(|post| Reverse((post.publish_date, post.id)));
    posts
}

/// Published posts, newest first.
pub fn published_posts(state: &AppState) -> Vec<Post> {
    let mut posts = all_posts(state);
    posts.retain(|post| post.published);
    posts
}

/// Look up one post by its permalink.
pub fn post_by_permalink<'a>(state: &'a AppState, permalink: &str) -> Option<&'a Post> {
    state.posts.values().find(|post| post.permalink == permalink)
}
