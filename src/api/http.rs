//! JSON-over-HTTP implementation of the [`Api`] trait.
//!
//! This is the browser-shell flavor of the data collaborator: every
//! operation maps to one request against the site's `/api` endpoints,
//! with the CSRF token attached to mutating calls when configured.

use super::{Api, PostDraft, PostQuery, Session};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::{EntityId, Page, Post, User};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const CSRF_HEADER: &str = "x-csrf-token";

/// HTTP client for the site's JSON API.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            csrf_token: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut api =
            Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        api.csrf_token = config.csrf_token.clone();
        Ok(api)
    }

    /// Attach the CSRF token sent with mutating requests.
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.client.request(method.clone(), self.url(path));
        if method != Method::GET {
            if let Some(token) = &self.csrf_token {
                request = request.header(CSRF_HEADER, token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    async fn expect_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, path));
        }
        Ok(response.json().await?)
    }
}

fn status_error(status: StatusCode, path: &str) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(path.to_string()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
        _ => ApiError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        },
    }
}

fn posts_path(query: PostQuery) -> String {
    if query.include_unpublished {
        "/api/posts?includeUnpublished=true".to_string()
    } else {
        "/api/posts".to_string()
    }
}

fn post_path(permalink: &str, query: PostQuery) -> String {
    if query.editable {
        format!("/api/posts/{permalink}?editable=true")
    } else {
        format!("/api/posts/{permalink}")
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn create_session(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let body = serde_json::json!({
            "user": { "username": username, "password": password }
        });
        let response = self.send(Method::POST, "/api/session", Some(&body)).await?;
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::InvalidCredentials)
            }
            status if status.is_success() => Ok(response.json().await?),
            status => Err(status_error(status, "/api/session")),
        }
    }

    async fn destroy_session(&self) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, "/api/session", None).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, "/api/session"))
        }
    }

    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let response = self.send(Method::GET, "/api/session", None).await?;
        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(status_error(status, "/api/session")),
        }
    }

    async fn get_page(&self, name: &str) -> Result<Page, ApiError> {
        self.expect_json(Method::GET, &format!("/api/pages/{name}"), None)
            .await
    }

    async fn get_posts(&self, query: PostQuery) -> Result<Vec<Post>, ApiError> {
        self.expect_json(Method::GET, &posts_path(query), None).await
    }

    async fn get_post(&self, permalink: &str, query: PostQuery) -> Result<Post, ApiError> {
        self.expect_json(Method::GET, &post_path(permalink, query), None)
            .await
    }

    async fn create_post(&self, draft: PostDraft) -> Result<Post, ApiError> {
        let body = serde_json::to_value(&draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.expect_json(Method::POST, "/api/posts", Some(&body)).await
    }

    async fn update_post(&self, id: EntityId, draft: PostDraft) -> Result<Post, ApiError> {
        let body = serde_json::to_value(&draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.expect_json(Method::PUT, &format!("/api/posts/{id}"), Some(&body))
            .await
    }

    async fn delete_post(&self, id: EntityId) -> Result<(), ApiError> {
        let path = format!("/api/posts/{id}");
        let response = self.send(Method::DELETE, &path, None).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, &path))
        }
    }
}
