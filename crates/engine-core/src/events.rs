//! Engine lifecycle events
//!
//! Simple event system using tokio::sync::broadcast. Subscribers observe
//! session lifecycle transitions; a lagging or absent subscriber never
//! blocks or fails the transition that produced the event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::SessionHandle;

/// Default capacity of the event broadcast channel
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Events published on session lifecycle transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A session was created and registered
    SessionCreated {
        handle: SessionHandle,
        app_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A session was destroyed and its handle mapping released
    SessionDestroyed {
        handle: SessionHandle,
        timestamp: DateTime<Utc>,
    },
}

impl EngineEvent {
    /// Handle of the session this event concerns
    pub fn handle(&self) -> SessionHandle {
        match self {
            EngineEvent::SessionCreated { handle, .. } => *handle,
            EngineEvent::SessionDestroyed { handle, .. } => *handle,
        }
    }
}
