//! Event-to-socket change feed.
//!
//! [`ChangeFeed`] subscribes to the event bus and forwards each change
//! event, serialized as JSON, to every WebSocket connection subscribed to
//! the event's project scope. Clients treat the message purely as an
//! invalidation signal and re-fetch over REST.

use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::broadcast;

use girder_events::ChangeEvent;

use crate::ws::WsManager;

/// Routes change events to subscribed WebSocket connections.
pub struct ChangeFeed {
    ws_manager: Arc<WsManager>,
}

impl ChangeFeed {
    /// Create a new feed over the given connection manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main forwarding loop.
    ///
    /// Consumes events from `receiver` until the channel closes (i.e. the
    /// [`EventBus`](girder_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<ChangeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Change feed lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, change feed shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and push it to its project scope.
    async fn forward(&self, event: &ChangeEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, event_type = %event.event_type, "Failed to serialize event");
                return;
            }
        };

        let delivered = self
            .ws_manager
            .send_to_scope(event.project_id, Message::Text(payload.into()))
            .await;
        tracing::debug!(
            event_type = %event.event_type,
            project_id = event.project_id,
            delivered,
            "Change event forwarded"
        );
    }
}
