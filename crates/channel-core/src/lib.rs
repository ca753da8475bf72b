//! # rtclink-channel-core
//!
//! Channel boundary for the RTC engine core. The external shim (platform
//! glue forwarding method-channel calls) hands this crate raw
//! (name, argument map) pairs; they come back as structured envelopes -
//! a success value, a (code, message) error, or a not-implemented signal.
//! Nothing panics across this boundary and no engine fault leaves unwrapped.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use rtclink_channel_core::ChannelDispatcher;
//! use rtclink_engine_core::{EngineConfig, SessionManager};
//! use serde_json::json;
//!
//! # async fn example() {
//! let manager = Arc::new(SessionManager::new(EngineConfig::default()));
//! let dispatcher = ChannelDispatcher::new(manager);
//!
//! let args = json!({ "appId": "abc123" });
//! let outcome = dispatcher.handle_call("create", Some(&args)).await;
//! assert!(outcome.is_success());
//!
//! let outcome = dispatcher.handle_call("destroy", None).await;
//! assert!(outcome.is_success());
//! # }
//! ```

pub mod dispatch;
pub mod envelope;
pub mod method;

// Re-export the main API surface
pub use dispatch::ChannelDispatcher;
pub use envelope::{MethodOutcome, CODE_ERROR, CODE_INVALID_APP_ID};
pub use method::{
    MethodCall, MethodParseError, METHOD_CREATE, METHOD_DESTROY, METHOD_GET_PLATFORM_VERSION,
};
