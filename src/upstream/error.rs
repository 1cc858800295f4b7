//! Upstream failure definitions.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by calls to the upstream employee API.
///
/// This is a closed set: callers classify failures by matching variants,
/// never by probing fields on an opaque error.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-2xx status.
    #[error("upstream returned {status}")]
    Status {
        status: StatusCode,
        /// Response body text, kept for server-side logging only.
        body: String,
    },

    /// The request never produced an upstream response (connect failure,
    /// timeout, malformed reply).
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl UpstreamError {
    /// HTTP status carried by the failure, if the upstream answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            UpstreamError::Transport(_) => None,
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
