//! Facade trait shared by every verification code cache backend
//!
//! The trait carries exactly the two operations the calling layer needs.
//! Atomicity is a per-backend concern (a Lua script for Redis, a mutex for
//! the in-process store) and must never leak through this interface.

use async_trait::async_trait;

use crate::errors::CodeResult;

/// Issues and verifies one-time codes per (business context, phone) key
///
/// Implementations must guarantee, per key:
/// - at most one active unconsumed record at any time,
/// - no lost cooldown checks under concurrent `set` calls,
/// - no lost attempt decrements or double consumption under concurrent
///   `verify` calls.
#[async_trait]
pub trait CodeCache: Send + Sync {
    /// Issue `code` for the key, or fail with
    /// [`SendTooFrequent`](crate::errors::CodeError::SendTooFrequent) when
    /// the previous unconsumed code was issued within the cooldown window.
    ///
    /// Inputs are assumed non-empty; validation is the caller's job.
    async fn set(&self, biz: &str, phone: &str, code: &str) -> CodeResult<()>;

    /// Check `input_code` against the stored code.
    ///
    /// Returns `Ok(true)` on a match (the record is consumed and can never
    /// match again) and `Ok(false)` on a mismatch (one attempt is spent).
    /// Fails with [`Unknown`](crate::errors::CodeError::Unknown) when no
    /// record exists and
    /// [`TooManyAttempts`](crate::errors::CodeError::TooManyAttempts) once
    /// attempts are exhausted.
    async fn verify(&self, biz: &str, phone: &str, input_code: &str) -> CodeResult<bool>;
}
