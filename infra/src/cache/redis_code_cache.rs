//! Redis-backed verification code cache
//!
//! Every operation is a single Lua script executed atomically by Redis
//! itself, so the check-then-act sequences (cooldown check before issuing,
//! attempt bookkeeping before matching) cannot interleave with any other
//! client of the shared store. A plain GET-then-SET from this side would
//! race between service instances; that is why both procedures live in
//! scripts.
//!
//! Per key the store holds the code under the cache key and the remaining
//! attempts under `{key}:cnt`, both carrying the code lifetime as TTL.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use redis::Script;
use tracing::{debug, info, warn};

use vc_core::{code_key, CodeCache, CodeError, CodeResult};
use vc_shared::config::CodeCacheConfig;
use vc_shared::utils::mask_phone;

use crate::cache::RedisClient;

static SET_CODE: Lazy<Script> =
    Lazy::new(|| Script::new(include_str!("lua/set_code.lua")));

static VERIFY_CODE: Lazy<Script> =
    Lazy::new(|| Script::new(include_str!("lua/verify_code.lua")));

/// Verification code cache backed by a shared Redis store
#[derive(Clone)]
pub struct RedisCodeCache {
    /// Redis client owning the connection
    client: RedisClient,
    /// Cooldown, lifetime and attempt policy
    config: CodeCacheConfig,
}

impl RedisCodeCache {
    /// Create a new Redis-backed code cache
    pub fn new(client: RedisClient, config: CodeCacheConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CodeCache for RedisCodeCache {
    async fn set(&self, biz: &str, phone: &str, code: &str) -> CodeResult<()> {
        let key = code_key(biz, phone);
        let args = [
            code.to_string(),
            self.config.code_ttl_seconds.to_string(),
            self.config.send_cooldown_seconds.to_string(),
            self.config.max_attempts.to_string(),
        ];

        let status = self
            .client
            .eval_int(&SET_CODE, &[&key], &args)
            .await
            .map_err(|e| CodeError::system(format!("issue script failed: {}", e)))?;

        match status {
            0 => {
                info!(biz, phone = mask_phone(phone), "Verification code issued");
                Ok(())
            }
            -1 => {
                debug!(
                    biz,
                    phone = mask_phone(phone),
                    "Code requested again within the cooldown window"
                );
                Err(CodeError::SendTooFrequent)
            }
            other => {
                warn!(
                    biz,
                    phone = mask_phone(phone),
                    status = other,
                    "Issue script returned an unexpected status"
                );
                Err(CodeError::system(format!(
                    "unexpected issue script status: {}",
                    other
                )))
            }
        }
    }

    async fn verify(&self, biz: &str, phone: &str, input_code: &str) -> CodeResult<bool> {
        let key = code_key(biz, phone);
        let args = [
            input_code.to_string(),
            self.config.consumed_ttl_seconds.to_string(),
        ];

        let status = self
            .client
            .eval_int(&VERIFY_CODE, &[&key], &args)
            .await
            .map_err(|e| CodeError::system(format!("verify script failed: {}", e)))?;

        match status {
            0 => {
                info!(biz, phone = mask_phone(phone), "Verification code matched");
                Ok(true)
            }
            -1 => {
                // repeated hits here are an abuse signal
                warn!(
                    biz,
                    phone = mask_phone(phone),
                    "Verification attempts exhausted"
                );
                Err(CodeError::TooManyAttempts)
            }
            -2 => {
                debug!(biz, phone = mask_phone(phone), "Verification code mismatch");
                Ok(false)
            }
            -3 => {
                debug!(
                    biz,
                    phone = mask_phone(phone),
                    "No verification code for this key"
                );
                Err(CodeError::Unknown)
            }
            other => {
                warn!(
                    biz,
                    phone = mask_phone(phone),
                    status = other,
                    "Verify script returned an unexpected status"
                );
                Err(CodeError::system(format!(
                    "unexpected verify script status: {}",
                    other
                )))
            }
        }
    }
}
