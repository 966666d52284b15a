//! Verification code cache backends
//!
//! Both backends implement the same [`CodeCache`] contract over the same
//! key scheme; which one a deployment gets is a configuration choice made
//! through [`build_code_cache`].

use std::sync::Arc;

use vc_core::{CodeCache, CodeError, CodeResult};
use vc_shared::config::{CacheConfig, CodeCacheBackend, CodeCacheConfig};

pub mod local_code_cache;
pub mod redis_client;
pub mod redis_code_cache;

#[cfg(test)]
mod tests;

pub use local_code_cache::LocalCodeCache;
pub use redis_client::RedisClient;
pub use redis_code_cache::RedisCodeCache;

/// Build the configured verification code cache backend
///
/// The Redis variant connects eagerly (and fails fast when the store is
/// unreachable); the in-process variant starts its expired-entry sweeper.
pub async fn build_code_cache(
    backend: CodeCacheBackend,
    cache_config: &CacheConfig,
    code_config: CodeCacheConfig,
) -> CodeResult<Arc<dyn CodeCache>> {
    code_config
        .validate()
        .map_err(CodeError::system)?;

    match backend {
        CodeCacheBackend::Redis => {
            let client = RedisClient::new(cache_config).await?;
            Ok(Arc::new(RedisCodeCache::new(client, code_config)))
        }
        CodeCacheBackend::Memory => {
            let cache = Arc::new(LocalCodeCache::new(code_config));
            // detached on purpose; the task exits when the cache is dropped
            let _ = LocalCodeCache::spawn_sweeper(&cache);
            Ok(cache)
        }
    }
}
