//! Session manager
//!
//! Validates and mediates session creation and destruction. All lifecycle
//! transitions are serialized behind a single transition lock, so at most
//! one is in flight at a time; two concurrent `create` calls can never both
//! register a session past the configured capacity. Read-side queries take
//! no part in that lock.
//!
//! # Usage Examples
//!
//! ```rust
//! use rtclink_engine_core::{EngineConfig, SessionManager};
//!
//! # async fn example() -> Result<(), rtclink_engine_core::EngineError> {
//! let manager = SessionManager::new(EngineConfig::default());
//!
//! let handle = manager.create("abc123").await?;
//! assert_eq!(manager.stats().await.active_sessions, 1);
//!
//! manager.destroy(handle).await?;
//! // Destroy is idempotent - a second call is a no-op success.
//! manager.destroy(handle).await?;
//! # Ok(())
//! # }
//! ```

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::config::{CreatePolicy, EngineConfig};
use crate::errors::{EngineError, EngineResult};
use crate::events::{EngineEvent, DEFAULT_EVENT_CAPACITY};
use crate::platform;
use crate::registry::SessionRegistry;
use crate::session::Session;
use crate::types::{EngineStats, SessionHandle, SessionInfo};

/// Owns the session registry and serializes lifecycle transitions
#[derive(Debug)]
pub struct SessionManager {
    config: EngineConfig,
    registry: SessionRegistry,
    /// Held across every mutating operation; queries bypass it
    transitions: Mutex<()>,
    events: broadcast::Sender<EngineEvent>,
}

impl SessionManager {
    /// Create a manager with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        let (events, _) = broadcast::channel(DEFAULT_EVENT_CAPACITY);
        Self {
            config,
            registry: SessionRegistry::new(),
            transitions: Mutex::new(()),
            events,
        }
    }

    /// The configuration this manager was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a session for the given app id
    ///
    /// Fails with `InvalidArgument` for an empty or blank app id, leaving no
    /// session registered. When a live session already exists for the same
    /// app id, the configured [`CreatePolicy`] decides between rejection and
    /// returning the existing handle. A full session table fails with
    /// `CapacityExceeded`.
    pub async fn create(&self, app_id: &str) -> EngineResult<SessionHandle> {
        if app_id.trim().is_empty() {
            return Err(EngineError::invalid_argument(
                "App ID cannot be null or empty",
            ));
        }

        let _guard = self.transitions.lock().await;

        if let Some(existing) = self.registry.find_by_app_id(app_id).await {
            return match self.config.create_policy {
                CreatePolicy::Reject => {
                    warn!("Rejecting create: session already live for app id {}", app_id);
                    Err(EngineError::already_exists(app_id))
                }
                CreatePolicy::ReuseExisting => {
                    debug!(
                        "Reusing live session {} for app id {}",
                        existing.handle, app_id
                    );
                    Ok(existing.handle)
                }
            };
        }

        if self.registry.len().await >= self.config.max_sessions {
            warn!(
                "Rejecting create for app id {}: capacity {} reached",
                app_id, self.config.max_sessions
            );
            return Err(EngineError::CapacityExceeded {
                max: self.config.max_sessions,
            });
        }

        let mut session = Session::new(app_id);
        session.activate()?;
        let handle = session.handle;
        let created_at = session.created_at;
        self.registry.insert(session).await?;

        let _ = self.events.send(EngineEvent::SessionCreated {
            handle,
            app_id: app_id.to_string(),
            timestamp: created_at,
        });

        info!("Created session {} for app id {}", handle, app_id);
        Ok(handle)
    }

    /// Destroy the session behind a handle
    ///
    /// Idempotent: an unknown or already-destroyed handle is a no-op
    /// success. A live handle transitions to Destroyed and its mapping is
    /// released.
    pub async fn destroy(&self, handle: SessionHandle) -> EngineResult<()> {
        let _guard = self.transitions.lock().await;

        let Some(mut session) = self.registry.remove(&handle).await else {
            debug!("Destroy on unknown session {}, ignoring", handle);
            return Ok(());
        };

        session.destroy()?;

        let _ = self.events.send(EngineEvent::SessionDestroyed {
            handle,
            timestamp: session.destroyed_at.unwrap_or_else(chrono::Utc::now),
        });

        info!("Destroyed session {}", handle);
        Ok(())
    }

    /// Host-identifying platform string; pure, no state interaction
    pub fn platform_version(&self) -> &'static str {
        platform::platform_version()
    }

    /// Snapshot of one live session
    pub async fn session(&self, handle: &SessionHandle) -> Option<SessionInfo> {
        self.registry.get_info(handle).await
    }

    /// Snapshots of all live sessions
    pub async fn active_sessions(&self) -> Vec<SessionInfo> {
        self.registry.active_sessions().await
    }

    /// Lifetime counters plus the current live count
    pub async fn stats(&self) -> EngineStats {
        self.registry.stats().await
    }

    /// Subscribe to lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
