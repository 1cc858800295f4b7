//! Uniform response envelope.
//!
//! Every JSON reply the gateway sends uses the same wrapper:
//! `{"status": "success"|"error", "data": ..., "message": ...}`, with
//! operation-specific top-level fields where the surface requires them.

use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// The uniform JSON wrapper for all gateway responses.
#[derive(Debug, Serialize)]
pub struct Envelope {
    status: EnvelopeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,

    /// Extra top-level fields (e.g. `updatedUserData` on update success).
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Envelope {
    /// Success envelope carrying a data payload.
    pub fn success(data: Value) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data: Some(data),
            message: None,
            extra: Map::new(),
        }
    }

    /// Success envelope carrying only a message.
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data: None,
            message: Some(message.into()),
            extra: Map::new(),
        }
    }

    /// Error envelope with a client-facing message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            data: None,
            message: Some(message.into()),
            extra: Map::new(),
        }
    }

    /// Attach an extra top-level field.
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
