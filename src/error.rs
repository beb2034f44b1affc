//! Unified error handling for isotope.
//!
//! This module provides the error hierarchy for the routing and dispatch
//! engine, with automatic conversions and stable code strings for log
//! labeling.

use thiserror::Error;

// ============================================================================
// Api Errors (data collaborator)
// ============================================================================

/// Errors produced by the data/API collaborator.
///
/// These propagate through `Dispatcher::dispatch` when a deferred action's
/// payload rejects, and from there into the pipeline's single error exit.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("unexpected status {status} from {path}")]
    Status { status: u16, path: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotFound(_) => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Status { .. } => "unexpected_status",
            Self::Transport(_) => "transport_error",
            Self::Decode(_) => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// ============================================================================
// Route Errors (handler pipeline)
// ============================================================================

/// Errors that can occur while running a route handler.
///
/// A handler that returns one of these short-circuits the pipeline; the
/// error is delivered to the invocation's single `handle_error` exit.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),

    #[error("missing route parameter: {0}")]
    MissingParam(&'static str),

    #[error("invalid form submission: {0}")]
    InvalidForm(String),

    #[error("failed to serialize view props: {0}")]
    Props(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl RouteError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Api(err) => err.code(),
            Self::MissingParam(_) => "missing_param",
            Self::InvalidForm(_) => "invalid_form",
            Self::Props(_) => "props_serialize",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Result type for route handlers.
pub type HandlerResult = Result<(), RouteError>;

// ============================================================================
// Hydration Errors (state transfer)
// ============================================================================

/// Errors raised when rebuilding a store from a serialized state payload.
#[derive(Debug, Error)]
pub enum HydrateError {
    #[error("malformed state payload: {0}")]
    Parse(#[from] serde_json::Error),
}
