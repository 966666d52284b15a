//! Error taxonomy of the verification code cache
//!
//! Both backends translate their internal failure modes into exactly these
//! kinds; none is silently swallowed. A mismatched code during verification
//! is deliberately NOT an error - it is the normal negative result
//! (`Ok(false)`) of [`CodeCache::verify`](crate::cache::CodeCache::verify).

use thiserror::Error;

/// Failure kinds of the verification code cache
#[derive(Error, Debug)]
pub enum CodeError {
    /// A code was requested again before the send cooldown elapsed.
    /// Recoverable; the caller should tell the user to wait.
    #[error("Verification code sent too frequently")]
    SendTooFrequent,

    /// Verification attempts are exhausted, or the code was already
    /// consumed. Repeated occurrences are an abuse signal and should be
    /// alerted on by the caller.
    #[error("Too many verification attempts")]
    TooManyAttempts,

    /// No record for the key, or the record is malformed. Collapses
    /// "never sent", "expired" and "fully consumed" so issuance state is
    /// not leaked to the caller.
    #[error("Verification code not found")]
    Unknown,

    /// Transport or script-execution failure reported by the backend
    /// itself, surfaced as-is.
    #[error("Cache backend failure: {message}")]
    System { message: String },
}

impl CodeError {
    /// Wrap a backend failure message into a [`CodeError::System`]
    pub fn system(message: impl Into<String>) -> Self {
        CodeError::System {
            message: message.into(),
        }
    }
}

/// Result alias for verification code cache operations
pub type CodeResult<T> = Result<T, CodeError>;
