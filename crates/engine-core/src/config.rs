//! Engine configuration
//!
//! Policy knobs for the session manager: how many sessions may be live at
//! once, and what a repeated `create` does while one is live.
//!
//! # Usage Examples
//!
//! ```rust
//! use rtclink_engine_core::config::{CreatePolicy, EngineConfig};
//!
//! let config = EngineConfig::new()
//!     .with_max_sessions(2)
//!     .with_create_policy(CreatePolicy::ReuseExisting);
//!
//! assert_eq!(config.max_sessions, 2);
//! assert_eq!(config.create_policy, CreatePolicy::ReuseExisting);
//! ```

use serde::{Deserialize, Serialize};

/// What `create` does when a live session already exists for the same app id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatePolicy {
    /// Fail with `AlreadyExists`
    #[default]
    Reject,
    /// Return the existing live handle instead of creating a new session
    ReuseExisting,
}

/// Session manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of concurrently live sessions
    pub max_sessions: usize,
    /// Behavior of repeated `create` for an app id that is already live
    pub create_policy: CreatePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1,
            create_policy: CreatePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config with default settings (one session, reject repeats)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of concurrently live sessions
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Set the repeated-create policy
    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }
}
