//! User-facing REST API.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → handlers.rs (validate via validation.rs, call upstream)
//!     → envelope.rs (uniform success wrapper)
//!     → or error.rs (classify failure, single error response)
//! ```

pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod validation;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::http::server::AppState;

/// Routes mounted under `/api/v1`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::get_all_users))
        .route("/user/{id}", get(handlers::get_one_user))
        .route("/user/create", post(handlers::create_user))
        .route("/user/update/{id}", put(handlers::update_user))
        .route("/user/delete/{id}", delete(handlers::delete_user))
}
