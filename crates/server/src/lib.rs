//! Server crate: Axum-based REST API and real-time channel for the Titanic dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐         ┌────────────────────────┐
//! │  MetricsBroadcaster     │         │  Axum handlers         │
//! │  (background task)      │         │  (async/await)         │
//! │                         │         │                        │
//! │  every period:          │         │  REST -> analytics     │
//! │  snapshot()             │         │          over Dataset  │
//! │  registry.broadcast()   │         │  /ws  -> register      │
//! └────────────┬────────────┘         └───────────┬────────────┘
//!              │                                  │
//!              └────────▶ ClientRegistry ◀────────┘
//!                         (per-client queues)
//! ```
//!
//! # Modules
//!
//! - [`app`]: Axum application builder and router setup
//! - [`state`]: Shared server state (dataset, client registry)
//! - [`error`]: Unified error handling with HTTP status codes
//! - [`routes`]: HTTP route handlers (health, passengers, statistics, ws)
//! - [`channel`]: Real-time event envelope types
//! - [`registry`]: Connected client registry with best-effort delivery
//! - [`broadcaster`]: Periodic live metrics task

pub mod app;
pub mod broadcaster;
pub mod channel;
pub mod error;
pub mod registry;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::{ServerConfig, create_app};
pub use broadcaster::{BroadcasterConfig, MetricsBroadcaster, MetricsGenerator};
pub use channel::{ClientEvent, LiveMetrics, ServerEvent};
pub use error::AppError;
pub use registry::{ClientId, ClientRegistry};
pub use state::ServerState;
