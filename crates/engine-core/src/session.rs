//! Session record and state machine
//!
//! The single source of truth for one engine session. State moves along
//! Uninitialized -> Created -> Destroyed exactly once; every other edge is
//! rejected. The registry owns these records and exposes
//! [`SessionInfo`] snapshots to callers.

use chrono::{DateTime, Utc};

use crate::errors::{EngineError, EngineResult};
use crate::types::{SessionHandle, SessionInfo, SessionState};

/// One RTC engine session instance
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session handle (primary key)
    pub handle: SessionHandle,

    /// App id fixed at creation; validated non-empty by the manager
    pub app_id: String,

    /// Current lifecycle state
    state: SessionState,

    /// When this session was created
    pub created_at: DateTime<Utc>,

    /// When this session was destroyed, if it has been
    pub destroyed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a new session record in the Uninitialized state
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            handle: SessionHandle::new(),
            app_id: app_id.into(),
            state: SessionState::Uninitialized,
            created_at: Utc::now(),
            destroyed_at: None,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Transition Uninitialized -> Created
    pub fn activate(&mut self) -> EngineResult<()> {
        self.transition(SessionState::Created)
    }

    /// Transition Created -> Destroyed
    pub fn destroy(&mut self) -> EngineResult<()> {
        self.transition(SessionState::Destroyed)?;
        self.destroyed_at = Some(Utc::now());
        Ok(())
    }

    /// True once the session has been torn down
    pub fn is_destroyed(&self) -> bool {
        self.state == SessionState::Destroyed
    }

    /// Public snapshot for API consumption
    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            handle: self.handle,
            app_id: self.app_id.clone(),
            state: self.state,
            created_at: self.created_at,
        }
    }

    fn transition(&mut self, to: SessionState) -> EngineResult<()> {
        let legal = matches!(
            (self.state, to),
            (SessionState::Uninitialized, SessionState::Created)
                | (SessionState::Created, SessionState::Destroyed)
        );
        if !legal {
            return Err(EngineError::InvalidState {
                from: self.state,
                to,
            });
        }
        tracing::debug!("Session {} state: {:?} -> {:?}", self.handle, self.state, to);
        self.state = to;
        Ok(())
    }
}
