//! Shared server state.
//!
//! Holds the immutable dataset snapshot, the real-time client registry and the
//! server start time. Cloned into each handler via Axum's `State` extractor.

use std::sync::Arc;
use std::time::Instant;

use dataset::Dataset;

use crate::registry::ClientRegistry;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Passenger table, read-only for the life of the process.
    pub dataset: Dataset,

    /// Connected WebSocket clients.
    pub registry: Arc<ClientRegistry>,

    /// Server start time.
    pub start_time: Instant,
}

impl ServerState {
    /// Create state with a fresh client registry.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_registry(dataset, Arc::new(ClientRegistry::new()))
    }

    /// Create state sharing an existing registry (the broadcaster holds the other end).
    pub fn with_registry(dataset: Dataset, registry: Arc<ClientRegistry>) -> Self {
        Self {
            dataset,
            registry,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
