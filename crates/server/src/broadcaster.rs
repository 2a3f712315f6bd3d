//! Live metrics broadcaster.
//!
//! A single background task fabricates a [`LiveMetrics`] snapshot every period
//! and fans it out through the [`ClientRegistry`].
//!
//! # Architecture
//!
//! ```text
//! MetricsBroadcaster            ClientRegistry            WebSocket tasks
//!       │                             │                         │
//!       │── interval tick ───────────▶│                         │
//!       │   broadcast(snapshot)       │── try_send per client ─▶│── socket
//! ```
//!
//! The push is unconditional: it does not wait for `request_live_metrics` and
//! does not care whether any client is registered.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

use types::{MAX_AGE, MIN_AGE};

use crate::channel::{LiveMetrics, RecentSurvivor, ServerEvent};
use crate::registry::ClientRegistry;

/// Default time between snapshots.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(3);

/// Broadcaster configuration.
#[derive(Debug, Clone)]
pub struct BroadcasterConfig {
    /// Time between snapshots.
    pub period: Duration,
    /// Random seed for the fabricated gauges. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BroadcasterConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            seed: None,
        }
    }
}

// =============================================================================
// MetricsGenerator
// =============================================================================

/// Fabricates live metric snapshots around the dataset's real survival rate.
pub struct MetricsGenerator {
    rng: StdRng,
    /// True survival rate of the dataset.
    base_survival_rate: f64,
    /// Number of passengers in the dataset.
    total_passengers: u64,
}

impl MetricsGenerator {
    pub fn new(base_survival_rate: f64, total_passengers: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            base_survival_rate,
            total_passengers: total_passengers.max(1),
        }
    }

    /// Build the snapshot for `now`.
    pub fn snapshot(&mut self, now: DateTime<Utc>) -> LiveMetrics {
        let total = self.total_passengers;
        let rng = &mut self.rng;

        LiveMetrics {
            timestamp: now,
            active_queries: rng.random_range(5..=50),
            current_survival_rate: self.base_survival_rate + rng.random_range(-0.05..0.05),
            passengers_analyzed: rng.random_range(total - total / 10..=total),
            avg_response_time: rng.random_range(50.0..200.0),
            memory_usage: rng.random_range(60.0..85.0),
            recent_survivor: RecentSurvivor {
                name: format!("Passenger {}", rng.random_range(1..=total)),
                age: rng.random_range(MIN_AGE..=MAX_AGE),
                class: rng.random_range(1..=3),
            },
        }
    }
}

// =============================================================================
// MetricsBroadcaster
// =============================================================================

/// Periodic task pushing live metrics to every registered client.
pub struct MetricsBroadcaster {
    registry: Arc<ClientRegistry>,
    generator: MetricsGenerator,
    period: Duration,
}

impl MetricsBroadcaster {
    pub fn new(
        registry: Arc<ClientRegistry>,
        generator: MetricsGenerator,
        period: Duration,
    ) -> Self {
        Self {
            registry,
            generator,
            period,
        }
    }

    /// Spawn the broadcast loop on the current tokio runtime.
    ///
    /// The task runs until the handle is aborted or the runtime shuts down.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Broadcast loop. The first snapshot goes out one full period after start.
    pub async fn run(mut self) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_ms = self.period.as_millis() as u64, "live metrics broadcaster started");

        loop {
            ticker.tick().await;
            self.tick();
        }
    }

    /// Emit one snapshot. Returns the number of clients it was queued for.
    pub fn tick(&mut self) -> usize {
        let metrics = self.generator.snapshot(Utc::now());
        let delivered = self.registry.broadcast(&ServerEvent::LiveMetrics(metrics));
        debug!(delivered, "broadcast live metrics");
        delivered
    }
}
