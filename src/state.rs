//! The application state tree and its domain entities.
//!
//! State is normalized: each entity kind lives in an id-keyed map, so a
//! post or user is stored exactly once no matter how many views reference
//! it. The tree is the hydration artifact — the server serializes it next
//! to the rendered markup and the client rebuilds an equivalent store from
//! it without re-dispatching any action.
//!
//! Field names serialize in camelCase so the JSON payload matches what the
//! site's API and browser shell speak.

use crate::modules;
use crate::store::{EntityMap, Reducer};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::mem;

/// Unique entity identifier assigned by the data layer.
pub type EntityId = u64;

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub permalink: String,
    /// Rendered body HTML. Absent in list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Raw source body, only present when fetched as editable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<NaiveDate>,
}

/// A site user (author/admin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A static content page, keyed by name (`home`, `projects`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

/// A project category on the projects page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Transient UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<EntityId>,
    #[serde(default)]
    pub loading: bool,
}

/// The normalized application state tree, partitioned by domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub posts: EntityMap<EntityId, Post>,
    #[serde(default)]
    pub users: EntityMap<EntityId, User>,
    #[serde(default)]
    pub pages: EntityMap<String, Page>,
    #[serde(default)]
    pub ui: UiState,
}

/// Build the root reducer: each domain slice is reduced by its module's
/// reducer, so one dispatched action passes over every slice exactly once.
pub(crate) fn root_reducer() -> Reducer<AppState> {
    let posts = modules::posts::reducer();
    let users = modules::users::reducer();
    let pages = modules::pages::reducer();
    let ui = modules::ui::reducer();

    Box::new(move |mut state: AppState, action| {
        state.posts = posts(mem::take(&mut state.posts), action);
        state.users = users(mem::take(&mut state.users), action);
        state.pages = pages(mem::take(&mut state.pages), action);
        state.ui = ui(mem::take(&mut state.ui), action);
        state
    })
}
