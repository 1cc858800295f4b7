//! HTTP client for the upstream employee API.
//!
//! # Responsibilities
//! - Issue one outbound call per gateway operation (no retries, no fan-out)
//! - Interpolate path parameters into the fixed base URL
//! - Unwrap the upstream's `data` envelope field
//! - Surface failures as the closed [`UpstreamError`] set
//!
//! # Design Decisions
//! - Connect and total-request timeouts are always set, so a stalled
//!   upstream surfaces as a transport failure instead of hanging the request
//! - The inbound request ID is forwarded as `x-request-id` for correlation

use std::time::Duration;

use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::upstream::error::{UpstreamError, UpstreamResult};

/// Header used to correlate gateway and upstream requests.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client for the upstream employee API.
///
/// Cheap to share behind an `Arc`; holds no mutable state.
#[derive(Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client from configuration.
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for an upstream endpoint path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch all employees (`GET /employees`).
    pub async fn list_employees(&self, request_id: &str) -> UpstreamResult<Value> {
        let req = self.http.get(self.endpoint("employees"));
        self.execute(req, request_id).await
    }

    /// Fetch one employee by ID (`GET /employee/:id`).
    pub async fn fetch_employee(&self, id: &str, request_id: &str) -> UpstreamResult<Value> {
        let req = self.http.get(self.endpoint(&format!("employee/{}", id)));
        self.execute(req, request_id).await
    }

    /// Create an employee (`POST /create`), forwarding the body verbatim.
    pub async fn create_employee(&self, body: &Value, request_id: &str) -> UpstreamResult<Value> {
        let req = self.http.post(self.endpoint("create")).json(body);
        self.execute(req, request_id).await
    }

    /// Update an employee (`PUT /update/:id`), forwarding the body verbatim.
    pub async fn update_employee(
        &self,
        id: &str,
        body: &Value,
        request_id: &str,
    ) -> UpstreamResult<Value> {
        let req = self
            .http
            .put(self.endpoint(&format!("update/{}", id)))
            .json(body);
        self.execute(req, request_id).await
    }

    /// Delete an employee (`DELETE /delete/:id`).
    pub async fn delete_employee(&self, id: &str, request_id: &str) -> UpstreamResult<Value> {
        let req = self.http.delete(self.endpoint(&format!("delete/{}", id)));
        self.execute(req, request_id).await
    }

    /// Send one request and unwrap the upstream response envelope.
    ///
    /// The upstream wraps every payload as `{"status": ..., "data": ...}`;
    /// callers receive the inner `data` field (`Null` when absent).
    async fn execute(&self, req: reqwest::RequestBuilder, request_id: &str) -> UpstreamResult<Value> {
        let response = req
            .header(X_REQUEST_ID, request_id)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                request_id = %request_id,
                status = %status,
                "Upstream returned error status"
            );
            return Err(UpstreamError::Status { status, body });
        }

        let payload: Value = response.json().await.map_err(UpstreamError::Transport)?;
        Ok(payload.get("data").cloned().unwrap_or(Value::Null))
    }
}
