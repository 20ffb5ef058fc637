use crate::ApiError;
use crate::services::account_service::{hash_off_thread, verify_off_thread};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn test_hash_then_verify_roundtrip() {
    let hash = hash_off_thread("correct horse").await.unwrap();

    assert!(hash.starts_with("$argon2"));
    verify_off_thread("correct horse", &hash).await.unwrap();
}

#[tokio::test]
async fn test_verify_wrong_password_is_unauthorized() {
    let hash = hash_off_thread("correct horse").await.unwrap();

    let result = verify_off_thread("battery staple", &hash).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_verify_malformed_hash_is_internal() {
    let result = verify_off_thread("anything", "not-a-phc-string").await;

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[tokio::test(flavor = "current_thread")]
async fn test_hashing_leaves_the_runtime_free_for_other_tasks() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let ticker = {
        let ticks = Arc::clone(&ticks);
        tokio::spawn(async move {
            loop {
                ticks.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
            }
        })
    };

    hash_off_thread("correct horse").await.unwrap();

    // On a single-threaded runtime the ticker only runs while hashing awaits
    assert!(ticks.load(Ordering::SeqCst) > 0);
    ticker.abort();
}
