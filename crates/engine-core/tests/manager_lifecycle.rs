// Tests for core SessionManager operations
//
// Covers session creation and destruction, input validation, repeated-create
// policies, capacity limits, lifecycle events, and the concurrent-create
// race-freedom guarantee.

use std::sync::Arc;

use rtclink_engine_core::{
    CreatePolicy, EngineConfig, EngineError, EngineEvent, SessionManager, SessionState,
};

fn manager_with(config: EngineConfig) -> Arc<SessionManager> {
    init_tracing();
    Arc::new(SessionManager::new(config))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

#[tokio::test]
async fn test_create_then_destroy_roundtrip() {
    let manager = manager_with(EngineConfig::default());

    let handle = manager.create("abc123").await.unwrap();

    let info = manager.session(&handle).await.unwrap();
    assert_eq!(info.app_id, "abc123");
    assert_eq!(info.state, SessionState::Created);

    manager.destroy(handle).await.unwrap();
    assert!(manager.session(&handle).await.is_none());

    let stats = manager.stats().await;
    assert_eq!(stats.total_created, 1);
    assert_eq!(stats.total_destroyed, 1);
    assert_eq!(stats.active_sessions, 0);
}

#[tokio::test]
async fn test_empty_app_id_rejected_without_side_effects() {
    let manager = manager_with(EngineConfig::default());

    for bad in ["", "   "] {
        let err = manager.create(bad).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { .. }));
    }

    assert_eq!(manager.stats().await.total_created, 0);
    assert!(manager.active_sessions().await.is_empty());
}

#[tokio::test]
async fn test_destroy_is_idempotent() {
    let manager = manager_with(EngineConfig::default());

    let handle = manager.create("abc123").await.unwrap();
    manager.destroy(handle).await.unwrap();

    // Second destroy of the same handle is a no-op success
    manager.destroy(handle).await.unwrap();
    assert_eq!(manager.stats().await.total_destroyed, 1);
}

#[tokio::test]
async fn test_repeated_create_rejected_by_default() {
    let manager = manager_with(EngineConfig::default());

    let handle = manager.create("abc123").await.unwrap();
    let err = manager.create("abc123").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::AlreadyExists {
            app_id: "abc123".to_string()
        }
    );

    // The original session is untouched
    assert_eq!(manager.session(&handle).await.unwrap().state, SessionState::Created);
    assert_eq!(manager.stats().await.active_sessions, 1);
}

#[tokio::test]
async fn test_reuse_existing_policy_returns_same_handle() {
    let manager = manager_with(
        EngineConfig::new().with_create_policy(CreatePolicy::ReuseExisting),
    );

    let first = manager.create("abc123").await.unwrap();
    let second = manager.create("abc123").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.stats().await.total_created, 1);

    // A different app id still cannot exceed capacity
    let err = manager.create("other").await.unwrap_err();
    assert!(matches!(err, EngineError::CapacityExceeded { max: 1 }));
}

#[tokio::test]
async fn test_capacity_admits_exactly_max_sessions() {
    let manager = manager_with(EngineConfig::new().with_max_sessions(2));

    let a = manager.create("app-a").await.unwrap();
    let b = manager.create("app-b").await.unwrap();
    assert_ne!(a, b);

    let err = manager.create("app-c").await.unwrap_err();
    assert!(matches!(err, EngineError::CapacityExceeded { max: 2 }));
    assert_eq!(manager.stats().await.active_sessions, 2);
}

#[tokio::test]
async fn test_concurrent_creates_never_both_succeed() {
    let manager = manager_with(EngineConfig::default());

    let m1 = Arc::clone(&manager);
    let m2 = Arc::clone(&manager);
    let first = tokio::spawn(async move { m1.create("app-a").await });
    let second = tokio::spawn(async move { m2.create("app-b").await });

    let results = [first.await.unwrap(), second.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(successes, 1);
    assert_eq!(manager.stats().await.active_sessions, 1);
}

#[tokio::test]
async fn test_lifecycle_events_emitted_in_order() {
    let manager = manager_with(EngineConfig::default());
    let mut events = manager.subscribe();

    let handle = manager.create("abc123").await.unwrap();
    manager.destroy(handle).await.unwrap();

    match events.recv().await.unwrap() {
        EngineEvent::SessionCreated {
            handle: h, app_id, ..
        } => {
            assert_eq!(h, handle);
            assert_eq!(app_id, "abc123");
        }
        other => panic!("expected SessionCreated, got {other:?}"),
    }

    match events.recv().await.unwrap() {
        EngineEvent::SessionDestroyed { handle: h, .. } => assert_eq!(h, handle),
        other => panic!("expected SessionDestroyed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_idempotent_destroy_emits_no_event() {
    let manager = manager_with(EngineConfig::default());

    let handle = manager.create("abc123").await.unwrap();
    manager.destroy(handle).await.unwrap();

    let mut events = manager.subscribe();
    manager.destroy(handle).await.unwrap();
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_platform_version_is_pure() {
    let manager = manager_with(EngineConfig::default());

    let before = manager.platform_version();
    let handle = manager.create("abc123").await.unwrap();
    let during = manager.platform_version();
    manager.destroy(handle).await.unwrap();
    let after = manager.platform_version();

    assert!(!before.is_empty());
    assert_eq!(before, during);
    assert_eq!(before, after);
}
