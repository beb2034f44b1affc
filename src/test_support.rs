//! Shared fixtures for the crate's unit tests.

use crate::api::{Api, PostDraft, PostQuery, Session};
use crate::app::{Dispatcher, Outcome, Response};
use crate::error::ApiError;
use crate::state::{EntityId, Page, Post, User};
use crate::store::Store;
use crate::view::{Navigator, Renderer, View};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A post with just enough shape to exercise reducers and selectors.
pub fn sample_post(id: EntityId, permalink: &str, published: bool) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        permalink: permalink.to_string(),
        body: None,
        body_raw: None,
        preview: None,
        image_url: None,
        published,
        publish_date: None,
    }
}

pub fn sample_user(id: EntityId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        name: None,
    }
}

/// API stub for tests that never reach the data layer: reads return empty,
/// writes reject.
pub struct StaticApi;

#[async_trait]
impl Api for StaticApi {
    async fn create_session(&self, _username: &str, _password: &str) -> Result<Session, ApiError> {
        Err(ApiError::InvalidCredentials)
    }

    async fn destroy_session(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        Ok(None)
    }

    async fn get_page(&self, name: &str) -> Result<Page, ApiError> {
        Err(ApiError::NotFound(format!("/api/pages/{name}")))
    }

    async fn get_posts(&self, _query: PostQuery) -> Result<Vec<Post>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_post(&self, permalink: &str, _query: PostQuery) -> Result<Post, ApiError> {
        Err(ApiError::NotFound(format!("/api/posts/{permalink}")))
    }

    async fn create_post(&self, _draft: PostDraft) -> Result<Post, ApiError> {
        Err(ApiError::Unauthorized)
    }

    async fn update_post(&self, _id: EntityId, _draft: PostDraft) -> Result<Post, ApiError> {
        Err(ApiError::Unauthorized)
    }

    async fn delete_post(&self, _id: EntityId) -> Result<(), ApiError> {
        Err(ApiError::Unauthorized)
    }
}

struct RecordingRenderer(Arc<Mutex<Vec<View>>>);

impl Renderer for RecordingRenderer {
    fn render(&self, view: View) {
        self.0.lock().push(view);
    }
}

struct RecordingNavigator(Arc<Mutex<Vec<String>>>);

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.lock().push(path.to_string());
    }
}

/// A [`Response`] wired to recording collaborators, so tests can assert on
/// every observable effect of one route invocation.
pub struct ResponseProbe {
    response: Response,
    views: Arc<Mutex<Vec<View>>>,
    redirects: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<&'static str>>>,
    not_found: Arc<AtomicUsize>,
}

impl ResponseProbe {
    pub fn new(api: Arc<dyn Api>) -> Self {
        Self::with_store(Store::new(), api)
    }

    pub fn with_store(store: Store, api: Arc<dyn Api>) -> Self {
        let views = Arc::new(Mutex::new(Vec::new()));
        let redirects = Arc::new(Mutex::new(Vec::new()));
        let errors = Arc::new(Mutex::new(Vec::new()));
        let not_found = Arc::new(AtomicUsize::new(0));

        let error_sink = errors.clone();
        let not_found_count = not_found.clone();
        let response = Response::new(
            Dispatcher::new(store, api),
            Arc::new(RecordingRenderer(views.clone())),
            Arc::new(RecordingNavigator(redirects.clone())),
            Some(Arc::new(move || {
                not_found_count.fetch_add(1, Ordering::SeqCst);
            })),
            Some(Arc::new(move |error: &crate::error::RouteError| {
                error_sink.lock().push(error.code());
            })),
        );

        Self {
            response,
            views,
            redirects,
            errors,
            not_found,
        }
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.response.outcome()
    }

    /// Views handed to the renderer, in order.
    pub fn views(&self) -> Vec<View> {
        self.views.lock().clone()
    }

    /// Paths handed to the navigator, in order.
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }

    /// Codes of errors delivered to the error hook, in order.
    pub fn errors(&self) -> Vec<&'static str> {
        self.errors.lock().clone()
    }

    pub fn not_found_count(&self) -> usize {
        self.not_found.load(Ordering::SeqCst)
    }
}
