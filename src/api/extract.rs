//! Request body extraction with envelope-shaped rejections.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;

/// JSON request body that rejects through [`ApiError`].
///
/// Axum's stock `Json` rejection answers in plain text and quotes parser
/// internals; wrapping it keeps malformed bodies inside the uniform
/// envelope pipeline.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::from(rejection)),
        }
    }
}
