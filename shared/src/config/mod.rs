//! Configuration modules for the verification code cache

pub mod cache;
pub mod code;

pub use cache::CacheConfig;
pub use code::{CodeCacheBackend, CodeCacheConfig};
