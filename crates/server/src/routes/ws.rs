//! WebSocket handler for the real-time channel.
//!
//! # Endpoints
//!
//! - `GET /ws` - WebSocket upgrade
//!
//! # Protocol
//!
//! On connect the client is registered and receives `connection_response`.
//! From then on it receives every `live_metrics` broadcast. Sending
//! `{"event": "request_live_metrics"}` is answered with `live_metrics_started`.
//! On disconnect the client is deregistered.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use crate::channel::{ClientEvent, ServerEvent};
use crate::registry::{ClientId, ClientRegistry, SendOutcome};
use crate::state::ServerState;

/// WebSocket upgrade handler: `GET /ws`
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<ServerState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_socket(socket: WebSocket, state: ServerState) {
    let registry = state.registry.clone();
    let registration = registry.register_with_greeting(ServerEvent::welcome());
    let client_id = registration.id;
    let mut outbound = registration.receiver;
    info!(client = %client_id, clients = registry.len(), "client connected");

    let (mut sender, mut receiver) = socket.split();

    // Forward queued events to the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(event) = outbound.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break; // Client disconnected
                    }
                }
                Err(e) => {
                    warn!("Failed to serialize {} event: {}", event.name(), e);
                }
            }
        }
    });

    // Handle client-initiated events
    let recv_registry = registry.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    handle_client_text(&recv_registry, client_id, text.as_str())
                }
                Ok(Message::Close(_)) => break,
                Err(e) => {
                    warn!(client = %client_id, "WebSocket error: {}", e);
                    break;
                }
                _ => {} // Ignore ping/pong/binary
            }
        }
    });

    // Wait for either task to complete, then stop the other
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    registry.deregister(client_id);
    info!(client = %client_id, clients = registry.len(), "client disconnected");
}

/// React to one text frame from a client.
fn handle_client_text(registry: &ClientRegistry, client_id: ClientId, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(ClientEvent::RequestLiveMetrics) => {
            info!(client = %client_id, "live metrics requested");
            if registry.send_to(client_id, ServerEvent::live_metrics_started())
                == SendOutcome::Dropped
            {
                debug!(client = %client_id, "acknowledgement dropped, queue full");
            }
        }
        Err(_) => debug!(client = %client_id, "Invalid event from client: {}", text),
    }
}
