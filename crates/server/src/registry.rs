//! Registry of connected real-time clients.
//!
//! Each client owns a bounded outbound queue. The WebSocket task drains it into
//! the socket; the broadcaster and the receive loop push into it. Delivery is
//! best-effort and at most once:
//!
//! - a full queue drops the event for that client only;
//! - a closed queue means the socket task is gone, so the client is removed.
//!
//! The lock is a `parking_lot::Mutex` and is never held across an `.await`.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::debug;

use crate::channel::ServerEvent;

/// Outbound queue depth per client.
pub const CLIENT_QUEUE_CAPACITY: usize = 32;

/// Identifier assigned to a client on connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client({})", self.0)
    }
}

struct ClientHandle {
    sender: mpsc::Sender<ServerEvent>,
    connected_at: DateTime<Utc>,
}

/// A freshly registered client: its id and the receiving end of its queue.
pub struct Registration {
    pub id: ClientId,
    pub connected_at: DateTime<Utc>,
    pub receiver: mpsc::Receiver<ServerEvent>,
}

/// Why a direct send did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Queued,
    /// Queue full; the event was dropped.
    Dropped,
    /// Client is not (or no longer) registered.
    Gone,
}

/// Set of connected clients shared between socket tasks and the broadcaster.
pub struct ClientRegistry {
    clients: Mutex<HashMap<ClientId, ClientHandle>>,
    next_id: AtomicU64,
    capacity: usize,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::with_capacity(CLIENT_QUEUE_CAPACITY)
    }

    /// Create a registry whose clients get queues of `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            capacity: capacity.max(1),
        }
    }

    /// Register a new client and hand back its queue receiver.
    pub fn register(&self) -> Registration {
        self.insert(None)
    }

    /// Register a new client whose queue already holds `greeting`.
    ///
    /// The greeting is queued before the client becomes visible to
    /// [`broadcast`](Self::broadcast), so it is always the first event received.
    pub fn register_with_greeting(&self, greeting: ServerEvent) -> Registration {
        self.insert(Some(greeting))
    }

    fn insert(&self, greeting: Option<ServerEvent>) -> Registration {
        let id = ClientId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (sender, receiver) = mpsc::channel(self.capacity);
        let connected_at = Utc::now();

        if let Some(event) = greeting
            && let Err(e) = sender.try_send(event)
        {
            debug!(client = %id, "greeting not queued: {}", e);
        }

        self.clients.lock().insert(
            id,
            ClientHandle {
                sender,
                connected_at,
            },
        );

        Registration {
            id,
            connected_at,
            receiver,
        }
    }

    /// Remove a client. Returns false if it was already gone.
    pub fn deregister(&self, id: ClientId) -> bool {
        self.clients.lock().remove(&id).is_some()
    }

    /// Queue an event for a single client.
    pub fn send_to(&self, id: ClientId, event: ServerEvent) -> SendOutcome {
        let mut clients = self.clients.lock();
        let Some(handle) = clients.get(&id) else {
            return SendOutcome::Gone;
        };

        match handle.sender.try_send(event) {
            Ok(()) => SendOutcome::Queued,
            Err(TrySendError::Full(_)) => SendOutcome::Dropped,
            Err(TrySendError::Closed(_)) => {
                clients.remove(&id);
                SendOutcome::Gone
            }
        }
    }

    /// Queue an event for every registered client.
    ///
    /// Returns how many clients the event was queued for.
    pub fn broadcast(&self, event: &ServerEvent) -> usize {
        let mut clients = self.clients.lock();
        let mut delivered = 0;

        clients.retain(|id, handle| match handle.sender.try_send(event.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(TrySendError::Full(_)) => {
                debug!(client = %id, event = event.name(), "client queue full, dropping event");
                true
            }
            Err(TrySendError::Closed(_)) => {
                debug!(client = %id, "client queue closed, removing");
                false
            }
        });

        delivered
    }

    /// When a client connected, if it is still registered.
    pub fn connected_at(&self, id: ClientId) -> Option<DateTime<Utc>> {
        self.clients.lock().get(&id).map(|handle| handle.connected_at)
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.clients.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.lock().is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_deregister() {
        let registry = ClientRegistry::new();
        assert!(registry.is_empty());

        let a = registry.register();
        let b = registry.register();
        assert_ne!(a.id, b.id);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.connected_at(a.id), Some(a.connected_at));

        assert!(registry.deregister(a.id));
        assert!(!registry.deregister(a.id));
        assert_eq!(registry.len(), 1);
        assert!(registry.connected_at(a.id).is_none());
    }

    #[test]
    fn test_greeting_precedes_broadcasts() {
        let registry = ClientRegistry::new();
        let mut client = registry.register_with_greeting(ServerEvent::welcome());

        registry.broadcast(&ServerEvent::live_metrics_started());

        assert_eq!(client.receiver.try_recv().unwrap(), ServerEvent::welcome());
        assert_eq!(
            client.receiver.try_recv().unwrap(),
            ServerEvent::live_metrics_started()
        );
        assert!(client.receiver.try_recv().is_err());
    }

    #[test]
    fn test_send_to_single_client() {
        let registry = ClientRegistry::new();
        let mut a = registry.register();
        let mut b = registry.register();

        assert_eq!(registry.send_to(a.id, ServerEvent::welcome()), SendOutcome::Queued);

        assert_eq!(a.receiver.try_recv().unwrap(), ServerEvent::welcome());
        assert!(b.receiver.try_recv().is_err());
        assert_eq!(
            registry.send_to(ClientId(999), ServerEvent::welcome()),
            SendOutcome::Gone
        );
    }

    #[test]
    fn test_broadcast_reaches_all_clients() {
        let registry = ClientRegistry::new();
        let mut receivers: Vec<_> = (0..3).map(|_| registry.register().receiver).collect();

        let event = ServerEvent::live_metrics_started();
        assert_eq!(registry.broadcast(&event), 3);

        for rx in &mut receivers {
            assert_eq!(rx.try_recv().unwrap(), event);
        }
    }

    #[test]
    fn test_broadcast_with_no_clients() {
        let registry = ClientRegistry::new();
        assert_eq!(registry.broadcast(&ServerEvent::welcome()), 0);
    }

    #[test]
    fn test_full_queue_drops_without_removing() {
        let registry = ClientRegistry::with_capacity(1);
        let mut client = registry.register();

        assert_eq!(registry.broadcast(&ServerEvent::welcome()), 1);
        assert_eq!(registry.broadcast(&ServerEvent::welcome()), 0);
        assert_eq!(
            registry.send_to(client.id, ServerEvent::welcome()),
            SendOutcome::Dropped
        );
        assert_eq!(registry.len(), 1);

        assert!(client.receiver.try_recv().is_ok());
        assert!(client.receiver.try_recv().is_err());
    }

    #[test]
    fn test_closed_queue_is_removed() {
        let registry = ClientRegistry::new();
        let dropped = registry.register();
        let _kept = registry.register();
        drop(dropped.receiver);

        assert_eq!(registry.broadcast(&ServerEvent::welcome()), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.send_to(dropped.id, ServerEvent::welcome()),
            SendOutcome::Gone
        );
    }
}
