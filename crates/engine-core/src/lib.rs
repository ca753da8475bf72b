//! # rtclink-engine-core
//!
//! Session lifecycle core for an RTC engine binding. This crate owns the
//! session state machine, the process-wide session registry, and the
//! serialization of lifecycle transitions; the native media engine it
//! fronts (capture, encoding, transport) is an external collaborator
//! reached through the sessions this crate manages.
//!
//! The channel boundary that marshals external calls into these operations
//! lives in the companion `rtclink-channel-core` crate.
//!
//! # Quick Start
//!
//! ```rust
//! use rtclink_engine_core::{CreatePolicy, EngineConfig, SessionManager};
//!
//! # async fn example() -> Result<(), rtclink_engine_core::EngineError> {
//! let manager = SessionManager::new(
//!     EngineConfig::new().with_create_policy(CreatePolicy::Reject),
//! );
//!
//! let handle = manager.create("abc123").await?;
//! println!("running on {}", manager.platform_version());
//! manager.destroy(handle).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod events;
pub mod manager;
pub mod platform;
pub mod registry;
pub mod session;
pub mod types;

// Re-export the main API surface
pub use config::{CreatePolicy, EngineConfig};
pub use errors::{EngineError, EngineResult};
pub use events::EngineEvent;
pub use manager::SessionManager;
pub use platform::platform_version;
pub use registry::SessionRegistry;
pub use session::Session;
pub use types::{EngineStats, SessionHandle, SessionInfo, SessionState};
