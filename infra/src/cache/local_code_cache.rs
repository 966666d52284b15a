//! In-process verification code cache
//!
//! Single-instance counterpart of the Redis backend: one mutex guards the
//! whole map, so every `set`/`verify` critical section is serialized.
//! Coarse, but the critical sections are O(1) map operations and never
//! await, and this backend targets dev/test and single-instance
//! deployments rather than the horizontally scaled case.
//!
//! Expired entries are dropped lazily on access; [`spawn_sweeper`] adds a
//! periodic sweep so abandoned keys do not accumulate.
//!
//! [`spawn_sweeper`]: LocalCodeCache::spawn_sweeper

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use vc_core::{code_key, CodeCache, CodeError, CodeResult};
use vc_shared::config::CodeCacheConfig;
use vc_shared::utils::mask_phone;

/// Attempt counter value marking a consumed record
const CONSUMED: i64 = -1;

/// One verification record
struct CodeEntry {
    /// The active one-time code
    code: String,
    /// Remaining attempts; [`CONSUMED`] once the code has matched
    attempts: i64,
    /// When the code was issued (cooldown anchor)
    issued_at: DateTime<Utc>,
    /// When the entry stops existing
    expires_at: DateTime<Utc>,
}

impl CodeEntry {
    fn new(code: &str, config: &CodeCacheConfig, now: DateTime<Utc>) -> Self {
        Self {
            code: code.to_string(),
            attempts: config.max_attempts,
            issued_at: now,
            expires_at: now + config.code_ttl(),
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    fn is_consumed(&self) -> bool {
        self.attempts == CONSUMED
    }
}

/// Verification code cache held entirely in process memory
pub struct LocalCodeCache {
    /// Record store; the mutex covers each whole operation
    entries: Mutex<HashMap<String, CodeEntry>>,
    /// Cooldown, lifetime and attempt policy
    config: CodeCacheConfig,
}

impl LocalCodeCache {
    /// Create a new in-process code cache
    pub fn new(config: CodeCacheConfig) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Drop every expired entry; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = match self.lock_entries() {
            Ok(entries) => entries,
            Err(_) => return 0,
        };
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before - entries.len();
        if purged > 0 {
            debug!(purged, "Purged expired verification codes");
        }
        purged
    }

    /// Start a background task sweeping expired entries at the configured
    /// interval; the task exits once the cache has been dropped
    pub fn spawn_sweeper(cache: &Arc<Self>) -> JoinHandle<()> {
        let period = cache.config.cleanup_interval();
        let weak = Arc::downgrade(cache);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match weak.upgrade() {
                    Some(cache) => {
                        cache.purge_expired();
                    }
                    None => break,
                }
            }
        })
    }

    fn lock_entries(&self) -> CodeResult<MutexGuard<'_, HashMap<String, CodeEntry>>> {
        self.entries
            .lock()
            .map_err(|_| CodeError::system("local code store lock poisoned"))
    }
}

#[async_trait]
impl CodeCache for LocalCodeCache {
    async fn set(&self, biz: &str, phone: &str, code: &str) -> CodeResult<()> {
        let key = code_key(biz, phone);
        let now = Utc::now();
        let mut entries = self.lock_entries()?;

        if let Some(entry) = entries.get(&key) {
            // a consumed record never blocks re-issuing; the Redis backend
            // behaves the same because consumption shrinks the TTL below
            // the cooldown threshold
            if !entry.is_expired(now)
                && !entry.is_consumed()
                && now - entry.issued_at < self.config.cooldown()
            {
                debug!(
                    biz,
                    phone = mask_phone(phone),
                    "Code requested again within the cooldown window"
                );
                return Err(CodeError::SendTooFrequent);
            }
        }

        entries.insert(key, CodeEntry::new(code, &self.config, now));
        info!(biz, phone = mask_phone(phone), "Verification code issued");
        Ok(())
    }

    async fn verify(&self, biz: &str, phone: &str, input_code: &str) -> CodeResult<bool> {
        let key = code_key(biz, phone);
        let now = Utc::now();
        let mut entries = self.lock_entries()?;

        if entries.get(&key).is_some_and(|e| e.is_expired(now)) {
            entries.remove(&key);
        }

        let entry = match entries.get_mut(&key) {
            Some(entry) => entry,
            None => {
                debug!(
                    biz,
                    phone = mask_phone(phone),
                    "No verification code for this key"
                );
                return Err(CodeError::Unknown);
            }
        };

        if entry.attempts <= 0 {
            // repeated hits here are an abuse signal
            warn!(
                biz,
                phone = mask_phone(phone),
                "Verification attempts exhausted"
            );
            return Err(CodeError::TooManyAttempts);
        }

        if entry.code != input_code {
            entry.attempts -= 1;
            entry.expires_at = now + self.config.code_ttl();
            debug!(
                biz,
                phone = mask_phone(phone),
                remaining = entry.attempts,
                "Verification code mismatch"
            );
            return Ok(false);
        }

        // consume: disable the counter and keep the record only for the
        // residual window so a rapid duplicate submit is rejected, not
        // re-matched
        entry.attempts = CONSUMED;
        entry.expires_at = now + self.config.consumed_ttl();
        info!(biz, phone = mask_phone(phone), "Verification code matched");
        Ok(true)
    }
}
