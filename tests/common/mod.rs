//! Integration test common infrastructure.
//!
//! Provides a configurable API stub, recording render/navigation
//! collaborators, and a harness that assembles the full site App around
//! them.

// Each test binary compiles its own copy; not every binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use isotope::api::{Api, PostDraft, PostQuery, Session};
use isotope::app::App;
use isotope::error::ApiError;
use isotope::site::build_app;
use isotope::state::{AppState, EntityId, Page, Post, User};
use isotope::view::{Navigator, Renderer, View};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn post(id: EntityId, permalink: &str, published: bool, date: &str) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        permalink: permalink.to_string(),
        body: Some(format!("<p>{permalink}</p>")),
        body_raw: Some(format!("{permalink} raw")),
        preview: Some(format!("{permalink} preview")),
        image_url: None,
        published,
        publish_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
    }
}

pub fn user(id: EntityId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        name: Some("Site Admin".to_string()),
    }
}

fn page(name: &str) -> Page {
    Page {
        name: name.to_string(),
        content: format!("{name} content"),
        categories: Vec::new(),
    }
}

// ============================================================================
// API stub
// ============================================================================

/// Configurable in-memory API with a call log.
pub struct StubApi {
    pub posts: Vec<Post>,
    pub pages: HashMap<String, Page>,
    /// Accepted credentials and the user they sign in.
    pub credentials: Option<(String, String, User)>,
    /// The user an existing session resolves to.
    pub current_user: Option<User>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    /// A stub seeded with the usual site content: two published posts, one
    /// draft, the home and projects pages, and one valid credential pair.
    pub fn seeded() -> Self {
        Self {
            posts: vec![
                post(1, "hello-world", true, "2024-01-10"),
                post(2, "second-post", true, "2024-03-05"),
                post(3, "draft-post", false, "2024-04-01"),
            ],
            pages: HashMap::from([
                ("home".to_string(), page("home")),
                ("projects".to_string(), page("projects")),
            ]),
            credentials: Some(("admin".to_string(), "hunter2".to_string(), user(1, "admin"))),
            current_user: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_current_user(mut self, user: User) -> Self {
        self.current_user = Some(user);
        self
    }

    /// Handle to the call log, valid after the stub moves into the App.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

#[async_trait]
impl Api for StubApi {
    async fn create_session(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        self.record(format!("create_session {username}"));
        match &self.credentials {
            Some((u, p, user)) if u == username && p == password => Ok(Session {
                user: user.clone(),
            }),
            _ => Err(ApiError::InvalidCredentials),
        }
    }

    async fn destroy_session(&self) -> Result<(), ApiError> {
        self.record("destroy_session");
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        self.record("current_user");
        Ok(self.current_user.clone())
    }

    async fn get_page(&self, name: &str) -> Result<Page, ApiError> {
        self.record(format!("get_page {name}"));
        self.pages
            .get(name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/api/pages/{name}")))
    }

    async fn get_posts(&self, query: PostQuery) -> Result<Vec<Post>, ApiError> {
        self.record(format!(
            "get_posts unpublished={}",
            query.include_unpublished
        ));
        Ok(self
            .posts
            .iter()
            .filter(|p| query.include_unpublished || p.published)
            .cloned()
            .collect())
    }

    async fn get_post(&self, permalink: &str, query: PostQuery) -> Result<Post, ApiError> {
        self.record(format!("get_post {permalink} editable={}", query.editable));
        self.posts
            .iter()
            .find(|p| p.permalink == permalink)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("/api/posts/{permalink}")))
    }

    async fn create_post(&self, draft: PostDraft) -> Result<Post, ApiError> {
        self.record(format!("create_post {}", draft.title));
        Ok(Post {
            id: 100,
            permalink: draft.title.to_lowercase().replace(' ', "-"),
            title: draft.title,
            body: Some(draft.body.clone()),
            body_raw: Some(draft.body),
            preview: None,
            image_url: draft.image_url,
            published: draft.published,
            publish_date: None,
        })
    }

    async fn update_post(&self, id: EntityId, draft: PostDraft) -> Result<Post, ApiError> {
        self.record(format!("update_post {id}"));
        let existing = self
            .posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("/api/posts/{id}")))?;
        let mut updated = existing.clone();
        updated.title = draft.title;
        updated.body = Some(draft.body.clone());
        updated.body_raw = Some(draft.body);
        updated.image_url = draft.image_url;
        updated.published = draft.published;
        Ok(updated)
    }

    async fn delete_post(&self, id: EntityId) -> Result<(), ApiError> {
        self.record(format!("delete_post {id}"));
        Ok(())
    }
}

// ============================================================================
// Recording collaborators and the site harness
// ============================================================================

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

/// The full site App wired to recording collaborators.
pub struct SiteHarness {
    pub app: App,
    api_calls: Arc<Mutex<Vec<String>>>,
    views: Arc<Mutex<Vec<View>>>,
    redirects: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
    not_found: Arc<AtomicUsize>,
}

impl SiteHarness {
    pub fn new(api: StubApi) -> Self {
        Self::build(api, None)
    }

    /// Build the site over a hydrated state tree.
    pub fn with_state(api: StubApi, state: AppState) -> Self {
        Self::build(api, Some(state))
    }

    fn build(api: StubApi, state: Option<AppState>) -> Self {
        init_tracing();

        let api_calls = api.call_log();
        let views = Arc::new(Mutex::new(Vec::new()));
        let redirects = Arc::new(Mutex::new(Vec::new()));
        let errors = Arc::new(Mutex::new(Vec::new()));
        let not_found = Arc::new(AtomicUsize::new(0));

        let mut builder = build_app(
            Arc::new(api),
            Arc::new(RecordingRenderer(views.clone())),
            Arc::new(RecordingNavigator(redirects.clone())),
        );
        if let Some(state) = state {
            builder = builder.initial_state(state);
        }

        let error_sink = errors.clone();
        let not_found_count = not_found.clone();
        let app = builder
            .on_not_found(move || {
                not_found_count.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(move |error| {
                error_sink.lock().push(error.code().to_string());
            })
            .build();

        Self {
            app,
            api_calls,
            views,
            redirects,
            errors,
            not_found,
        }
    }

    pub fn views(&self) -> Vec<View> {
        self.views.lock().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    pub fn not_found_count(&self) -> usize {
        self.not_found.load(Ordering::SeqCst)
    }

    pub fn api_calls(&self) -> Vec<String> {
        self.api_calls.lock().clone()
    }
}
