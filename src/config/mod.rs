//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file on disk
//!     → loader.rs (read, deserialize)
//!     → validation.rs (semantic checks, all errors reported)
//!     → schema.rs types handed to the server
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, TimeoutConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
