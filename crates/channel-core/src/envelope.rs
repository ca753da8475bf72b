//! Response envelopes and wire error codes
//!
//! Every call resolves to a [`MethodOutcome`]: a success value, a structured
//! (code, message) error, or the not-implemented signal. Engine faults never
//! cross the boundary raw - the `From` impls here are the only path from an
//! [`EngineError`] to the wire.

use rtclink_engine_core::EngineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::method::MethodParseError;

/// Wire code for a rejected app id
pub const CODE_INVALID_APP_ID: &str = "INVALID_APP_ID";
/// Wire code wrapping any other engine fault
pub const CODE_ERROR: &str = "ERROR";

/// Result of one channel call as seen by the external caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodOutcome {
    /// Call succeeded with a result value (null for lifecycle calls)
    Success { value: Value },
    /// Call failed with a structured (code, message) pair
    Error { code: String, message: String },
    /// The wire named an operation outside the closed set
    NotImplemented { method: String },
}

impl MethodOutcome {
    /// Success carrying a value
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    /// Success carrying null, the result of the lifecycle calls
    pub fn null() -> Self {
        Self::Success { value: Value::Null }
    }

    /// Structured failure
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }

    /// True for any `Success` variant
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Error code, when this outcome is an error
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<EngineError> for MethodOutcome {
    fn from(err: EngineError) -> Self {
        match err {
            // The invalid-argument message travels verbatim under the
            // dedicated code; everything else wraps under the generic one.
            EngineError::InvalidArgument { message } => {
                MethodOutcome::error(CODE_INVALID_APP_ID, message)
            }
            other => MethodOutcome::error(CODE_ERROR, other.to_string()),
        }
    }
}

impl From<MethodParseError> for MethodOutcome {
    fn from(err: MethodParseError) -> Self {
        match err {
            MethodParseError::NotImplemented { method } => {
                MethodOutcome::NotImplemented { method }
            }
            MethodParseError::InvalidAppId => {
                MethodOutcome::error(CODE_INVALID_APP_ID, err.to_string())
            }
        }
    }
}
