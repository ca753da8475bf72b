//! Error types for the engine core
//!
//! Every public operation returns an explicit `Result`; no fault crosses the
//! crate boundary as a panic. The boundary layer maps these variants onto
//! wire error codes.

use thiserror::Error;

use crate::types::{SessionHandle, SessionState};

/// Result type for engine core operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while managing engine sessions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A live session already exists for this app id
    #[error("Session already exists for app id {app_id}")]
    AlreadyExists { app_id: String },

    /// No live session for the given handle
    #[error("Session not found: {handle}")]
    SessionNotFound { handle: SessionHandle },

    /// Illegal session state transition
    #[error("Invalid session state transition: {from:?} -> {to:?}")]
    InvalidState {
        from: SessionState,
        to: SessionState,
    },

    /// Session table is full
    #[error("Session capacity exceeded (max {max})")]
    CapacityExceeded { max: usize },

    /// Unexpected internal fault
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EngineError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an already-exists error
    pub fn already_exists(app_id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            app_id: app_id.into(),
        }
    }

    /// Create a session-not-found error
    pub fn session_not_found(handle: SessionHandle) -> Self {
        Self::SessionNotFound { handle }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
