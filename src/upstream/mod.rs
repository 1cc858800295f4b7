//! Upstream employee API subsystem.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → client.rs (build request, timeouts, x-request-id)
//!     → upstream REST API
//!     → unwrap `data` envelope field
//!     → Ok(payload) or error.rs (tagged failure)
//! ```

pub mod client;
pub mod error;

pub use client::{UpstreamClient, X_REQUEST_ID};
pub use error::{UpstreamError, UpstreamResult};
