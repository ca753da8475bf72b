//! Typed method calls
//!
//! The wire names a closed set of operations; this module turns a raw
//! (name, argument map) pair into a [`MethodCall`] variant, so dispatch is
//! an exhaustive match instead of a string switch with a runtime default
//! branch. Unknown names surface as a distinct not-implemented signal.

use serde_json::Value;
use thiserror::Error;

/// Wire name of the platform version query
pub const METHOD_GET_PLATFORM_VERSION: &str = "getPlatformVersion";
/// Wire name of the session create call
pub const METHOD_CREATE: &str = "create";
/// Wire name of the session destroy call
pub const METHOD_DESTROY: &str = "destroy";

/// The closed set of operations the channel accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodCall {
    /// Query the host-identifying platform string
    GetPlatformVersion,
    /// Create an engine session for an app id
    Create { app_id: String },
    /// Destroy the channel's live session
    Destroy,
}

/// Failures turning a raw call into a [`MethodCall`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MethodParseError {
    /// The wire named an operation outside the closed set
    #[error("Method not implemented: {method}")]
    NotImplemented { method: String },

    /// `create` arrived without a usable string `appId` argument
    #[error("App ID cannot be null or empty")]
    InvalidAppId,
}

impl MethodCall {
    /// Parse a raw (name, argument map) pair off the wire
    ///
    /// A `create` whose `appId` is absent, null, or not a string fails with
    /// [`MethodParseError::InvalidAppId`]; an empty string parses and is
    /// rejected downstream by the manager, producing the same wire code
    /// either way.
    pub fn parse(method: &str, args: Option<&Value>) -> Result<Self, MethodParseError> {
        match method {
            METHOD_GET_PLATFORM_VERSION => Ok(MethodCall::GetPlatformVersion),
            METHOD_CREATE => {
                let app_id = args
                    .and_then(|v| v.get("appId"))
                    .and_then(Value::as_str)
                    .ok_or(MethodParseError::InvalidAppId)?;
                Ok(MethodCall::Create {
                    app_id: app_id.to_string(),
                })
            }
            METHOD_DESTROY => Ok(MethodCall::Destroy),
            other => Err(MethodParseError::NotImplemented {
                method: other.to_string(),
            }),
        }
    }

    /// Wire name of this call
    pub fn name(&self) -> &'static str {
        match self {
            MethodCall::GetPlatformVersion => METHOD_GET_PLATFORM_VERSION,
            MethodCall::Create { .. } => METHOD_CREATE,
            MethodCall::Destroy => METHOD_DESTROY,
        }
    }
}
