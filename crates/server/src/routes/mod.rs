//! Route handlers for the server.
//!
//! # Modules
//!
//! - [`health`]: Health endpoint
//! - [`passengers`]: Paginated listing and lookup by id
//! - [`statistics`]: Aggregate statistics endpoints
//! - [`ws`]: WebSocket handler for the real-time channel

pub mod health;
pub mod passengers;
pub mod statistics;
pub mod ws;

use crate::error::AppError;

/// Fallback for unknown routes: JSON 404 instead of an empty body.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".into())
}
