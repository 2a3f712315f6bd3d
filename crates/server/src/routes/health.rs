//! Health check endpoint.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Liveness probe (always 200 if server is up)

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::ServerState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: &'static str,
    /// Current server time.
    pub timestamp: DateTime<Utc>,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Registered real-time clients.
    pub connected_clients: usize,
}

/// Liveness probe: `GET /api/health`
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        uptime_secs: state.uptime_secs(),
        connected_clients: state.registry.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            uptime_secs: 60,
            connected_clients: 2,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"timestamp\":\"2023-11-14T22:13:20Z\""));
        assert!(json.contains("\"connected_clients\":2"));
    }
}
