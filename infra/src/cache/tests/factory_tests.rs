//! Unit tests for the backend factory

use vc_core::{CodeCache, CodeError};
use vc_shared::config::{CacheConfig, CodeCacheBackend, CodeCacheConfig};

use crate::cache::build_code_cache;

#[tokio::test]
async fn test_memory_backend_builds_and_serves() {
    let cache = build_code_cache(
        CodeCacheBackend::Memory,
        &CacheConfig::default(),
        CodeCacheConfig::default(),
    )
    .await
    .unwrap();

    cache.set("login", "13800000000", "123456").await.unwrap();
    assert!(cache.verify("login", "13800000000", "123456").await.unwrap());
}

#[tokio::test]
async fn test_invalid_policy_is_rejected() {
    let config = CodeCacheConfig {
        send_cooldown_seconds: 600,
        code_ttl_seconds: 300,
        ..Default::default()
    };

    let result = build_code_cache(
        CodeCacheBackend::Memory,
        &CacheConfig::default(),
        config,
    )
    .await;
    assert!(matches!(result, Err(CodeError::System { .. })));
}
