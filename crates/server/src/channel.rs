//! Real-time channel message types.
//!
//! Every WebSocket text frame carries one JSON envelope:
//!
//! ```text
//! {"event": "live_metrics", "data": { ...snapshot... }}
//! ```
//!
//! # Events
//!
//! | Direction | Event | Payload |
//! |---|---|---|
//! | server → client | `connection_response` | [`Notice`] |
//! | server → client | `live_metrics_started` | [`Notice`] |
//! | server → client | `live_metrics` | [`LiveMetrics`] |
//! | client → server | `request_live_metrics` | none |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting sent to every client right after it connects.
pub const WELCOME_MESSAGE: &str = "Connected to Titanic Dashboard";

/// Acknowledgement for `request_live_metrics`.
pub const LIVE_METRICS_STARTED_MESSAGE: &str = "Live metrics streaming started";

/// Plain-text notice payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fabricated passenger shown in the live feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSurvivor {
    pub name: String,
    pub age: u8,
    pub class: u8,
}

/// One tick of simulated live metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMetrics {
    pub timestamp: DateTime<Utc>,
    pub active_queries: u32,
    /// Dataset survival rate with a small random jitter.
    pub current_survival_rate: f64,
    pub passengers_analyzed: u64,
    /// Milliseconds.
    pub avg_response_time: f64,
    /// Percent.
    pub memory_usage: f64,
    pub recent_survivor: RecentSurvivor,
}

/// Messages pushed from server to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    ConnectionResponse(Notice),
    LiveMetricsStarted(Notice),
    LiveMetrics(LiveMetrics),
}

impl ServerEvent {
    pub fn welcome() -> Self {
        Self::ConnectionResponse(Notice::new(WELCOME_MESSAGE))
    }

    pub fn live_metrics_started() -> Self {
        Self::LiveMetricsStarted(Notice::new(LIVE_METRICS_STARTED_MESSAGE))
    }

    /// Event name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectionResponse(_) => "connection_response",
            Self::LiveMetricsStarted(_) => "live_metrics_started",
            Self::LiveMetrics(_) => "live_metrics",
        }
    }
}

/// Messages sent by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Ask for the live feed. Streaming is already unconditional, so this
    /// only triggers an acknowledgement.
    RequestLiveMetrics,
}
