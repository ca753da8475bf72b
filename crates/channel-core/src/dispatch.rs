//! Channel dispatcher
//!
//! Thin coordination layer between the external shim and the engine core.
//! One dispatcher serves one channel: it remembers the handle of the session
//! it created, because the wire's `destroy` carries no handle of its own.
//! Dispatch over [`MethodCall`] is an exhaustive match; every outcome,
//! including engine faults, leaves as a [`MethodOutcome`] envelope.

use std::sync::Arc;

use rtclink_engine_core::{EngineResult, SessionHandle, SessionManager};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::envelope::MethodOutcome;
use crate::method::MethodCall;

/// Dispatches channel calls into a [`SessionManager`]
#[derive(Debug)]
pub struct ChannelDispatcher {
    manager: Arc<SessionManager>,
    /// Handle of the session this channel created, if it is still live
    active: RwLock<Option<SessionHandle>>,
}

impl ChannelDispatcher {
    /// Create a dispatcher over a shared session manager
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self {
            manager,
            active: RwLock::new(None),
        }
    }

    /// Handle one raw call off the wire
    pub async fn handle_call(&self, method: &str, args: Option<&Value>) -> MethodOutcome {
        debug!("Channel call: {}", method);
        let call = match MethodCall::parse(method, args) {
            Ok(call) => call,
            Err(err) => return err.into(),
        };
        self.dispatch(call).await
    }

    /// Handle one already-typed call
    pub async fn dispatch(&self, call: MethodCall) -> MethodOutcome {
        match call {
            MethodCall::GetPlatformVersion => {
                MethodOutcome::success(self.manager.platform_version())
            }
            MethodCall::Create { app_id } => match self.create(&app_id).await {
                Ok(_) => MethodOutcome::null(),
                Err(err) => err.into(),
            },
            MethodCall::Destroy => match self.destroy_active().await {
                Ok(()) => MethodOutcome::null(),
                Err(err) => err.into(),
            },
        }
    }

    /// Handle of this channel's live session, if any
    pub async fn active_session(&self) -> Option<SessionHandle> {
        *self.active.read().await
    }

    async fn create(&self, app_id: &str) -> EngineResult<SessionHandle> {
        let handle = self.manager.create(app_id).await?;
        *self.active.write().await = Some(handle);
        Ok(handle)
    }

    async fn destroy_active(&self) -> EngineResult<()> {
        // Take the handle first so a repeated destroy sees none and no-ops,
        // matching the manager's idempotent destroy semantics.
        let handle = self.active.write().await.take();
        match handle {
            Some(handle) => self.manager.destroy(handle).await,
            None => {
                debug!("Destroy with no live session, ignoring");
                Ok(())
            }
        }
    }
}
