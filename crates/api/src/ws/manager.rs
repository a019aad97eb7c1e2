use std::collections::{HashMap, HashSet};

use axum::body::Bytes;
use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};

use girder_core::types::{DbId, Timestamp};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single WebSocket connection.
pub struct WsConnection {
    /// Project scopes this connection has subscribed to.
    pub scopes: HashSet<DbId>,
    /// Channel sender for outbound messages to this connection.
    pub sender: WsSender,
    /// When this connection was established.
    pub connected_at: Timestamp,
}

/// Manages all active WebSocket connections and their scope subscriptions.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    /// Create a new, empty connection manager.
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection with no subscriptions.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            scopes: HashSet::new(),
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    /// Remove a connection by its ID, dropping all its subscriptions.
    pub async fn remove(&self, conn_id: &str) {
        self.connections.write().await.remove(conn_id);
    }

    /// Register interest in a project scope for a connection.
    pub async fn subscribe(&self, conn_id: &str, project_id: DbId) {
        if let Some(conn) = self.connections.write().await.get_mut(conn_id) {
            conn.scopes.insert(project_id);
        }
    }

    /// Drop a connection's interest in a project scope.
    pub async fn unsubscribe(&self, conn_id: &str, project_id: DbId) {
        if let Some(conn) = self.connections.write().await.get_mut(conn_id) {
            conn.scopes.remove(&project_id);
        }
    }

    /// Send a message to every connection subscribed to a project scope.
    ///
    /// Connections whose send channels are closed are silently skipped
    /// (they will be cleaned up on their next receive loop iteration).
    /// Returns the number of connections the message was sent to.
    pub async fn send_to_scope(&self, project_id: DbId, message: Message) -> usize {
        let conns = self.connections.read().await;
        let mut count = 0;
        for conn in conns.values() {
            if conn.scopes.contains(&project_id) {
                let _ = conn.sender.send(message.clone());
                count += 1;
            }
        }
        count
    }

    /// Return the current number of active connections.
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the map.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops accepting new connections.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connected client.
    ///
    /// Used by the heartbeat task to keep connections alive and detect
    /// stale ones.
    pub async fn ping_all(&self) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_to_scope_reaches_only_subscribers() {
        let manager = WsManager::new();
        let mut rx_a = manager.add("a".to_string()).await;
        let mut rx_b = manager.add("b".to_string()).await;

        manager.subscribe("a", 7).await;

        let sent = manager
            .send_to_scope(7, Message::Text("changed".into()))
            .await;
        assert_eq!(sent, 1);
        assert!(rx_a.try_recv().is_ok());
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let manager = WsManager::new();
        let mut rx = manager.add("a".to_string()).await;

        manager.subscribe("a", 7).await;
        manager.unsubscribe("a", 7).await;

        let sent = manager
            .send_to_scope(7, Message::Text("changed".into()))
            .await;
        assert_eq!(sent, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn remove_drops_subscriptions() {
        let manager = WsManager::new();
        let _rx = manager.add("a".to_string()).await;
        manager.subscribe("a", 7).await;
        manager.remove("a").await;

        assert_eq!(manager.connection_count().await, 0);
        assert_eq!(
            manager.send_to_scope(7, Message::Text("x".into())).await,
            0
        );
    }
}
