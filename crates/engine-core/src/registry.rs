//! Session registry
//!
//! Process-wide storage for live [`Session`] records, keyed by handle. The
//! registry is an explicit object owned by the manager, not a hidden
//! singleton; it hands out [`SessionInfo`] snapshots and keeps lifetime
//! counters. Transition ordering is the manager's job - the registry only
//! guarantees that each individual operation is atomic.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::{EngineError, EngineResult};
use crate::session::Session;
use crate::types::{EngineStats, SessionHandle, SessionInfo};

/// Registry of live sessions with lifetime counters
#[derive(Debug)]
pub struct SessionRegistry {
    /// Storage for full Session records
    sessions: Arc<RwLock<HashMap<SessionHandle, Session>>>,
    /// Counters tracking registry activity
    stats: Arc<RwLock<RegistryStats>>,
}

#[derive(Debug, Default)]
struct RegistryStats {
    total_created: usize,
    total_destroyed: usize,
}

impl SessionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(RegistryStats::default())),
        }
    }

    /// Register a live session
    pub async fn insert(&self, session: Session) -> EngineResult<()> {
        let mut sessions = self.sessions.write().await;
        let mut stats = self.stats.write().await;

        let handle = session.handle;
        if sessions.contains_key(&handle) {
            return Err(EngineError::internal(format!(
                "session {handle} already registered"
            )));
        }

        sessions.insert(handle, session);
        stats.total_created += 1;

        tracing::debug!("Registered session {}", handle);
        Ok(())
    }

    /// Get a full session record by handle
    pub async fn get(&self, handle: &SessionHandle) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(handle).cloned()
    }

    /// Get a public snapshot by handle
    pub async fn get_info(&self, handle: &SessionHandle) -> Option<SessionInfo> {
        let sessions = self.sessions.read().await;
        sessions.get(handle).map(|s| s.info())
    }

    /// Remove a session, releasing its handle mapping
    ///
    /// Returns the removed record, or `None` when the handle is unknown.
    pub async fn remove(&self, handle: &SessionHandle) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let mut stats = self.stats.write().await;

        let removed = sessions.remove(handle);
        if removed.is_some() {
            stats.total_destroyed += 1;
            tracing::debug!("Unregistered session {}", handle);
        }
        removed
    }

    /// Find the live session created for an app id, if any
    pub async fn find_by_app_id(&self, app_id: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.values().find(|s| s.app_id == app_id).cloned()
    }

    /// Check whether a handle maps to a live session
    pub async fn contains(&self, handle: &SessionHandle) -> bool {
        let sessions = self.sessions.read().await;
        sessions.contains_key(handle)
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    /// Snapshots of all live sessions
    pub async fn active_sessions(&self) -> Vec<SessionInfo> {
        let sessions = self.sessions.read().await;
        sessions.values().map(|s| s.info()).collect()
    }

    /// Lifetime counters plus the current live count
    pub async fn stats(&self) -> EngineStats {
        let sessions = self.sessions.read().await;
        let stats = self.stats.read().await;

        EngineStats {
            total_created: stats.total_created,
            total_destroyed: stats.total_destroyed,
            active_sessions: sessions.len(),
        }
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            stats: Arc::clone(&self.stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn live_session(app_id: &str) -> Session {
        let mut session = Session::new(app_id);
        session.activate().unwrap();
        session
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let registry = SessionRegistry::new();
        let session = live_session("abc123");
        let handle = session.handle;

        registry.insert(session).await.unwrap();

        assert!(registry.contains(&handle).await);
        let info = registry.get_info(&handle).await.unwrap();
        assert_eq!(info.app_id, "abc123");
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_handle_rejected() {
        let registry = SessionRegistry::new();
        let session = live_session("abc123");

        assert_ok!(registry.insert(session.clone()).await);
        assert_err!(registry.insert(session).await);
    }

    #[tokio::test]
    async fn test_remove_releases_mapping() {
        let registry = SessionRegistry::new();
        let session = live_session("abc123");
        let handle = session.handle;

        registry.insert(session).await.unwrap();
        assert!(registry.remove(&handle).await.is_some());
        assert!(!registry.contains(&handle).await);

        // Second remove finds nothing
        assert!(registry.remove(&handle).await.is_none());
    }

    #[tokio::test]
    async fn test_find_by_app_id() {
        let registry = SessionRegistry::new();
        registry.insert(live_session("abc123")).await.unwrap();

        assert!(registry.find_by_app_id("abc123").await.is_some());
        assert!(registry.find_by_app_id("other").await.is_none());
    }

    #[tokio::test]
    async fn test_stats_counters() {
        let registry = SessionRegistry::new();
        let first = live_session("one");
        let first_handle = first.handle;
        registry.insert(first).await.unwrap();
        registry.insert(live_session("two")).await.unwrap();
        registry.remove(&first_handle).await;

        let stats = registry.stats().await;
        assert_eq!(stats.total_created, 2);
        assert_eq!(stats.total_destroyed, 1);
        assert_eq!(stats.active_sessions, 1);
    }
}
