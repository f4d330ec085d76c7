use std::time::Duration;

use axum::http::StatusCode;

use crate::limiter::memory::Memory as MemoryLimiter;
use crate::storage::memory::Memory as MemoryStorage;
use crate::storage::Storage;
use crate::tests::helper;

#[tokio::test]
async fn test_requests_over_capacity_are_denied() {
    let storage = MemoryStorage::new();
    let limiter = MemoryLimiter::with_policy(2, Duration::from_secs(60));

    let mut app = helper::setup_test_app_with(storage.clone(), limiter);

    // the window has room for exactly two requests
    let (status_code, _) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);

    let (status_code, _) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);

    // the third is denied before any handler runs
    let (status_code, message) =
        helper::maybe_create_note(&mut app, Some("title"), Some("content")).await;
    assert_eq!(StatusCode::TOO_MANY_REQUESTS, status_code);
    assert_eq!(
        Some("Too many requests, please try again later".to_string()),
        message
    );

    // the denied create never reached the store
    let notes = storage.find_all_notes().await.unwrap();
    assert!(notes.is_empty());
}

#[tokio::test]
async fn test_denied_methods_share_one_window() {
    let limiter = MemoryLimiter::with_policy(1, Duration::from_secs(60));
    let mut app = helper::setup_test_app_with(MemoryStorage::new(), limiter);

    // one global counter, not per route or per client
    let (status_code, _) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);

    let (status_code, _, _) =
        helper::single_note(&mut app, "00000000-0000-0000-0000-000000000000").await;
    assert_eq!(StatusCode::TOO_MANY_REQUESTS, status_code);

    let (status_code, _) = helper::maybe_delete_note(&mut app, "some-id").await;
    assert_eq!(StatusCode::TOO_MANY_REQUESTS, status_code);
}

#[tokio::test]
async fn test_preflight_bypasses_the_gate() {
    let limiter = MemoryLimiter::with_policy(1, Duration::from_secs(60));
    let mut app = helper::setup_test_app_with(MemoryStorage::new(), limiter);

    // occupy the whole window
    let (status_code, _) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);

    // preflight requests are always admitted
    for _ in 0..5 {
        let status_code = helper::preflight(&mut app).await;
        assert_ne!(StatusCode::TOO_MANY_REQUESTS, status_code);
    }
}
