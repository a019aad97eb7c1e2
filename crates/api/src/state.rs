use std::sync::Arc;

use girder_docgen::ContentGenerator;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: girder_db::DbPool,
    /// Server configuration (accessed by the auth extractor and handlers).
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (browser clients on the change feed).
    pub ws_manager: Arc<WsManager>,
    /// Bus carrying project-scoped change events to the feed.
    pub event_bus: Arc<girder_events::EventBus>,
    /// Document content generation strategy, selected at startup.
    pub generator: Arc<dyn ContentGenerator>,
}
