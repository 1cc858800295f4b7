//! API error taxonomy and failure classification.
//!
//! # Responsibilities
//! - Classify upstream failures (rate-limited vs. generic)
//! - Translate every failure into exactly one JSON envelope response
//! - Log server-side detail without leaking it to clients
//!
//! # Design Decisions
//! - Handlers return `Result<_, ApiError>`; `into_response` is the single
//!   response-writing path on failure, so a double send cannot happen
//! - Classification matches on the closed [`UpstreamError`] variant set

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::api::envelope::Envelope;
use crate::upstream::UpstreamError;

/// Client-facing message for upstream rate limiting.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";

/// Client-facing message for unparseable request bodies.
pub const INVALID_BODY_MESSAGE: &str = "Request body must be valid JSON.";

/// How an upstream failure should be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Upstream answered 429; the client gets 429 back.
    RateLimited,
    /// Any other failure; the handler's operation-specific 500 applies.
    Generic,
}

/// Classify an upstream failure.
pub fn classify(failure: &UpstreamError) -> FailureClass {
    match failure.status() {
        Some(StatusCode::TOO_MANY_REQUESTS) => FailureClass::RateLimited,
        _ => FailureClass::Generic,
    }
}

/// Errors a handler can answer with.
///
/// Exactly one response is written per value; conversion happens in
/// [`IntoResponse`] and nowhere else.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input failed validation (400).
    #[error("{0}")]
    Validation(String),

    /// Single-record fetch found nothing (404).
    #[error("{0}")]
    NotFound(String),

    /// Upstream signalled 429 (429).
    #[error("upstream rate limit exceeded")]
    RateLimited,

    /// Upstream failed for any other reason (500, operation-specific message).
    #[error("{message}")]
    Upstream {
        /// Generic message shown to the client.
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    /// Last-resort net for faults that escape the handlers (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Translate an upstream failure, using `message` for the generic case.
    pub fn from_failure(failure: UpstreamError, message: &'static str) -> Self {
        match classify(&failure) {
            FailureClass::RateLimited => ApiError::RateLimited,
            FailureClass::Generic => ApiError::Upstream {
                message,
                source: failure,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    /// Keep extractor failures inside the envelope pipeline.
    ///
    /// Client-caused rejections (bad syntax, wrong shape, missing content
    /// type) become validation errors; anything else falls into the
    /// last-resort net.
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                ApiError::Validation(INVALID_BODY_MESSAGE.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, Envelope::error(message)),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, Envelope::error(message)),
            ApiError::RateLimited => {
                tracing::warn!("Upstream rate limit hit");
                (StatusCode::TOO_MANY_REQUESTS, Envelope::error(RATE_LIMIT_MESSAGE))
            }
            ApiError::Upstream { message, source } => {
                tracing::error!(error = %source, "Upstream call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Envelope::error(message))
            }
            ApiError::Internal(detail) => {
                // Detail stays server-side; clients get the bare fallback body.
                tracing::error!(error = %detail, "Unhandled error reached top-level pipeline");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response();
            }
        };

        (status, Json(envelope)).into_response()
    }
}
