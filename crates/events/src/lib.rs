//! Girder change-notification infrastructure.
//!
//! Provides the in-process publish/subscribe hub the WebSocket change feed
//! is built on:
//!
//! - [`EventBus`] — fan-out hub backed by `tokio::sync::broadcast`.
//! - [`ChangeEvent`] — the project-scoped mutation notification envelope.

pub mod bus;

pub use bus::{ChangeEvent, EventBus};
