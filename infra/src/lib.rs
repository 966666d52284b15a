//! # VeriCache Infrastructure
//!
//! Backend implementations of the [`vc_core::CodeCache`] facade:
//!
//! - **Redis**: semantics enforced by two Lua scripts executed atomically
//!   by the store itself, safe across multiple service instances.
//! - **In-process**: a mutex-guarded map with per-entry expiry, for
//!   single-instance and dev/test deployments.

// Re-export the core contract for convenience
pub use vc_core::{code_key, CodeCache, CodeError, CodeResult};

/// Cache module - Redis client, both cache backends and the factory
pub mod cache;

pub use cache::{build_code_cache, LocalCodeCache, RedisClient, RedisCodeCache};
