//! Request handlers for the user surface.
//!
//! Each handler walks the same path: validate (create/update only), make one
//! upstream call, wrap the payload in the success envelope. Failures exit
//! early through [`ApiError`], which owns the error response, so every
//! request terminates in exactly one response write.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::envelope::Envelope;
use crate::api::extract::JsonBody;
use crate::api::validation::validate_user_name;
use crate::http::server::AppState;
use crate::upstream::X_REQUEST_ID;

const FETCH_USERS_FAILED: &str = "An error occurred while fetching users. Please try again.";
const FETCH_USER_FAILED: &str = "An error occurred while fetching user details. Please try again.";
const CREATE_USER_FAILED: &str = "An error occurred while creating the user. Please try again.";
const UPDATE_USER_FAILED: &str = "An error occurred while updating the user. Please try again.";
const DELETE_USER_FAILED: &str = "An error occurred while deleting the user. Please try again.";

const NAME_TOO_SHORT: &str = "User name should be at least 2 characters long.";
const USER_NOT_FOUND: &str = "User not found.";

/// Request ID for logging and upstream correlation.
///
/// The middleware stamps every request; a fresh UUID covers the case where
/// it has not (e.g. handlers driven directly in tests).
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// GET /api/v1/users
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request_id = request_id(&headers);
    tracing::debug!(request_id = %request_id, "Fetching all users");

    let users = state
        .upstream
        .list_employees(&request_id)
        .await
        .map_err(|e| ApiError::from_failure(e, FETCH_USERS_FAILED))?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success(json!({ "users": users }))),
    )
        .into_response())
}

/// GET /api/v1/user/:id
pub async fn get_one_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request_id = request_id(&headers);
    tracing::debug!(request_id = %request_id, user_id = %id, "Fetching user");

    let user = state
        .upstream
        .fetch_employee(&id, &request_id)
        .await
        .map_err(|e| ApiError::from_failure(e, FETCH_USER_FAILED))?;

    // Empty upstream result halts here; nothing after this may write again.
    if user.is_null() {
        return Err(ApiError::NotFound(USER_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(Envelope::success(json!({ "user": user }))),
    )
        .into_response())
}

/// POST /api/v1/user/create
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(new_user): JsonBody,
) -> Result<Response, ApiError> {
    // Reject before any upstream traffic.
    if !validate_user_name(new_user.get("employee_name")) {
        return Err(ApiError::Validation(NAME_TOO_SHORT.to_string()));
    }

    let request_id = request_id(&headers);
    tracing::debug!(request_id = %request_id, "Creating user");

    let created_user = state
        .upstream
        .create_employee(&new_user, &request_id)
        .await
        .map_err(|e| ApiError::from_failure(e, CREATE_USER_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(json!({ "createdUser": created_user }))),
    )
        .into_response())
}

/// PUT /api/v1/user/update/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    JsonBody(updated_user): JsonBody,
) -> Result<Response, ApiError> {
    // Validation failure halts before the upstream call.
    if !validate_user_name(updated_user.get("employee_name")) {
        return Err(ApiError::Validation(NAME_TOO_SHORT.to_string()));
    }

    let request_id = request_id(&headers);
    tracing::debug!(request_id = %request_id, user_id = %id, "Updating user");

    let updated_data = state
        .upstream
        .update_employee(&id, &updated_user, &request_id)
        .await
        .map_err(|e| ApiError::from_failure(e, UPDATE_USER_FAILED))?;

    Ok((
        StatusCode::OK,
        Json(
            Envelope::success_message("User updated successfully")
                .field("updatedUserData", updated_data),
        ),
    )
        .into_response())
}

/// DELETE /api/v1/user/delete/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request_id = request_id(&headers);
    tracing::debug!(request_id = %request_id, user_id = %id, "Deleting user");

    state
        .upstream
        .delete_employee(&id, &request_id)
        .await
        .map_err(|e| ApiError::from_failure(e, DELETE_USER_FAILED))?;

    Ok((
        StatusCode::OK,
        Json(Envelope::success_message("User deleted successfully")),
    )
        .into_response())
}
