//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, request ID)
//!     → api routes (handlers)
//!     → or fallback (Route not found)
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
