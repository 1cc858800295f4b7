//! User Gateway
//!
//! A small HTTP gateway built with Tokio and Axum that fronts a single
//! upstream employee-management REST API and reshapes its responses into a
//! uniform JSON envelope.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                 USER GATEWAY                 │
//!                  │                                              │
//!  Client Request  │  ┌─────────┐    ┌──────────┐    ┌──────────┐ │
//!  ────────────────┼─▶│  http   │───▶│   api    │───▶│ upstream │─┼──▶ Employee
//!                  │  │ server  │    │ handlers │    │  client  │ │     REST API
//!                  │  └─────────┘    └────┬─────┘    └────┬─────┘ │
//!                  │                      │               │       │
//!  Client Response │  ┌──────────┐   ┌────▼─────┐    ┌────▼─────┐ │
//!  ◀───────────────┼──│ envelope │◀──│  error   │◀───│  tagged  │ │
//!                  │  │ wrapper  │   │ classify │    │ failures │ │
//!                  │  └──────────┘   └──────────┘    └──────────┘ │
//!                  │                                              │
//!                  │  ┌──────────────────────────────────────────┐│
//!                  │  │          Cross-Cutting Concerns          ││
//!                  │  │  ┌────────┐ ┌─────────┐ ┌─────────────┐  ││
//!                  │  │  │ config │ │ tracing │ │  lifecycle  │  ││
//!                  │  │  └────────┘ └─────────┘ └─────────────┘  ││
//!                  │  └──────────────────────────────────────────┘│
//!                  └──────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::UpstreamClient;
