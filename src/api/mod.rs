//! The data/API collaborator.
//!
//! Action creators never touch persistence directly; they go through this
//! trait, which the server shell backs with direct data-layer calls and
//! the browser shell backs with [`HttpApi`]. The engine only relies on the
//! future contract of each method.

mod http;

pub use http::HttpApi;

use crate::error::ApiError;
use crate::state::{Post, User};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Options for post fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostQuery {
    /// Include unpublished posts (admin listing).
    pub include_unpublished: bool,
    /// Fetch the raw body for editing.
    pub editable: bool,
}

/// Fields accepted when creating or updating a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub published: bool,
}

/// A created session: the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
}

/// Domain operations exposed by the data layer.
#[async_trait]
pub trait Api: Send + Sync {
    async fn create_session(&self, username: &str, password: &str) -> Result<Session, ApiError>;

    async fn destroy_session(&self) -> Result<(), ApiError>;

    /// The user bound to the current session, if any.
    async fn current_user(&self) -> Result<Option<User>, ApiError>;

    async fn get_page(&self, name: &str) -> Result<crate::state::Page, ApiError>;

    async fn get_posts(&self, query: PostQuery) -> Result<Vec<Post>, ApiError>;

    async fn get_post(&self, permalink: &str, query: PostQuery) -> Result<Post, ApiError>;

    async fn create_post(&self, draft: PostDraft) -> Result<Post, ApiError>;

    async fn update_post(&self, id: crate::state::EntityId, draft: PostDraft)
    -> Result<Post, ApiError>;

    async fn delete_post(&self, id: crate::state::EntityId) -> Result<(), ApiError>;
}
