use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::ws::WsManager;

/// Ping interval for keeping WebSocket connections alive.
const HEARTBEAT_INTERVAL_SECS: u64 = 30;

/// Spawn the heartbeat task that pings every connection periodically.
///
/// The returned handle is aborted during shutdown.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(HEARTBEAT_INTERVAL_SECS));
        loop {
            interval.tick().await;
            ws_manager.ping_all().await;
        }
    })
}
