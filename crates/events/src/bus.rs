//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`ChangeEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use girder_core::types::DbId;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// A row-level mutation notification, scoped to a project.
///
/// Subscribers are expected to treat the event as an invalidation signal
/// and re-fetch the full row set for the scope; the payload intentionally
/// carries identifiers only, never row data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Dot-separated event name, e.g. `"milestone.updated"`.
    pub event_type: String,

    /// The project whose row set changed.
    pub project_id: DbId,

    /// Id of the mutated row, when one row was the subject.
    pub entity_id: Option<DbId>,

    /// Id of the user that triggered the mutation.
    pub actor_user_id: Option<DbId>,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    /// Create a new event for a project scope.
    pub fn new(event_type: impl Into<String>, project_id: DbId) -> Self {
        Self {
            event_type: event_type.into(),
            project_id,
            entity_id: None,
            actor_user_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the mutated entity's id.
    pub fn with_entity(mut self, entity_id: DbId) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    /// Attach the acting user.
    pub fn with_actor(mut self, user_id: DbId) -> Self {
        self.actor_user_id = Some(user_id);
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`].
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped —
    /// a change feed with nobody watching has nothing to invalidate.
    pub fn publish(&self, event: ChangeEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
