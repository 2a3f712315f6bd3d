//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.
//!
//! # Routes
//!
//! - `GET /api/health` - Liveness probe
//! - `GET /api/passengers` - Paginated passengers
//! - `GET /api/passengers/{id}` - Single passenger
//! - `GET /api/statistics` - Summary statistics
//! - `GET /api/survival-by-class` - Survival per class
//! - `GET /api/survival-by-gender` - Survival per sex
//! - `GET /api/age-distribution` - Age histogram
//! - `GET /ws` - Real-time channel

use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{self, health, passengers, statistics, ws};
use crate::state::ServerState;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Create the Axum application with all routes.
pub fn create_app(state: ServerState) -> Router {
    // Dashboard frontends are served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/passengers", get(passengers::list_passengers))
        .route("/api/passengers/{id}", get(passengers::get_passenger))
        .route("/api/statistics", get(statistics::get_statistics))
        .route("/api/survival-by-class", get(statistics::get_survival_by_class))
        .route("/api/survival-by-gender", get(statistics::get_survival_by_gender))
        .route("/api/age-distribution", get(statistics::get_age_distribution))
        .route("/ws", get(ws::ws_handler))
        .fallback(routes::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.into(),
        }
    }
}

impl ServerConfig {
    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
