//! WebSocket change-feed infrastructure.
//!
//! Clients connect, subscribe to one or more project scopes, and receive a
//! JSON notification for every mutation event in those scopes. The
//! notification is an invalidation signal only — consumers re-fetch the
//! full ordered row set over REST, which makes the refresh authoritative
//! over any optimistic local state.

pub mod feed;
pub mod handler;
pub mod heartbeat;
pub mod manager;

pub use feed::ChangeFeed;
pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
