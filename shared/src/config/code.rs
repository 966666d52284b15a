//! Verification code cache policy configuration
//!
//! The cooldown, lifetime and attempt limits that both cache backends
//! enforce. All values are tunable; the defaults match the product policy
//! of one send per minute, a 5-minute code lifetime and 3 attempts.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Which backend the verification code cache should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeCacheBackend {
    /// Shared Redis store, safe across multiple service instances
    Redis,
    /// In-process store, for single-instance and dev/test deployments
    Memory,
}

impl Default for CodeCacheBackend {
    fn default() -> Self {
        CodeCacheBackend::Redis
    }
}

/// Policy configuration for the verification code cache
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeCacheConfig {
    /// Minimum seconds between two code issuances for the same key
    #[serde(default = "default_cooldown")]
    pub send_cooldown_seconds: u64,

    /// Lifetime of an issued code in seconds
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: u64,

    /// Maximum verification attempts before lockout
    #[serde(default = "default_max_attempts")]
    pub max_attempts: i64,

    /// Residual lifetime of a consumed record in seconds; long enough to
    /// make a rapid duplicate submit observably rejected, short enough not
    /// to block re-issuing a code
    #[serde(default = "default_consumed_ttl")]
    pub consumed_ttl_seconds: u64,

    /// Sweep interval for the in-process backend's expired-entry reaper
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

impl Default for CodeCacheConfig {
    fn default() -> Self {
        Self {
            send_cooldown_seconds: default_cooldown(),
            code_ttl_seconds: default_code_ttl(),
            max_attempts: default_max_attempts(),
            consumed_ttl_seconds: default_consumed_ttl(),
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

impl CodeCacheConfig {
    /// Create from environment variables (`CODE_SEND_COOLDOWN_SECONDS`,
    /// `CODE_TTL_SECONDS`, `CODE_MAX_ATTEMPTS`), falling back to defaults
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            send_cooldown_seconds: env_u64("CODE_SEND_COOLDOWN_SECONDS")
                .unwrap_or(defaults.send_cooldown_seconds),
            code_ttl_seconds: env_u64("CODE_TTL_SECONDS")
                .unwrap_or(defaults.code_ttl_seconds),
            max_attempts: env_u64("CODE_MAX_ATTEMPTS")
                .map(|v| v as i64)
                .unwrap_or(defaults.max_attempts),
            ..defaults
        }
    }

    /// Check that the configured values form a usable policy
    pub fn validate(&self) -> Result<(), String> {
        if self.send_cooldown_seconds >= self.code_ttl_seconds {
            return Err(format!(
                "send cooldown ({}s) must be shorter than the code lifetime ({}s)",
                self.send_cooldown_seconds, self.code_ttl_seconds
            ));
        }
        if self.max_attempts <= 0 {
            return Err(format!(
                "max attempts must be positive, got {}",
                self.max_attempts
            ));
        }
        if self.consumed_ttl_seconds >= self.code_ttl_seconds {
            return Err(format!(
                "consumed residual lifetime ({}s) must be shorter than the code lifetime ({}s)",
                self.consumed_ttl_seconds, self.code_ttl_seconds
            ));
        }
        Ok(())
    }

    /// Send cooldown as a duration
    pub fn cooldown(&self) -> Duration {
        Duration::seconds(self.send_cooldown_seconds as i64)
    }

    /// Code lifetime as a duration
    pub fn code_ttl(&self) -> Duration {
        Duration::seconds(self.code_ttl_seconds as i64)
    }

    /// Consumed-record residual lifetime as a duration
    pub fn consumed_ttl(&self) -> Duration {
        Duration::seconds(self.consumed_ttl_seconds as i64)
    }

    /// Reaper sweep interval as a std duration (for timers)
    pub fn cleanup_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cleanup_interval_seconds.max(1))
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

fn default_cooldown() -> u64 {
    60
}

fn default_code_ttl() -> u64 {
    300 // 5 minutes
}

fn default_max_attempts() -> i64 {
    3
}

fn default_consumed_ttl() -> u64 {
    1
}

fn default_cleanup_interval() -> u64 {
    60
}
