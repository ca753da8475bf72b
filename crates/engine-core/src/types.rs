//! Core types for the engine session lifecycle
//!
//! Identifiers, state, and the public projections handed to callers across
//! the channel boundary. Handles are opaque references; ownership of the
//! underlying session record stays with the registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to an engine session
///
/// Handed out by [`crate::manager::SessionManager::create`] and used to route
/// subsequent calls. Cloning a handle never clones the session it refers to.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionHandle(pub uuid::Uuid);

impl SessionHandle {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an engine session
///
/// Legal path is Uninitialized -> Created -> Destroyed, each edge taken
/// exactly once. Any other edge fails with
/// [`crate::errors::EngineError::InvalidState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Constructed but not yet activated
    Uninitialized,
    /// Live and routable
    Created,
    /// Torn down; only idempotent destroy remains valid
    Destroyed,
}

/// Public snapshot of a session
///
/// The registry owns the full [`crate::session::Session`] record; callers
/// see this projection only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Handle routing calls to this session
    pub handle: SessionHandle,
    /// App id the session was created with
    pub app_id: String,
    /// Current lifecycle state
    pub state: SessionState,
    /// When the session was created
    pub created_at: DateTime<Utc>,
}

/// Counters describing manager activity since process start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Sessions created over the manager lifetime
    pub total_created: usize,
    /// Sessions destroyed over the manager lifetime
    pub total_destroyed: usize,
    /// Currently live sessions
    pub active_sessions: usize,
}
