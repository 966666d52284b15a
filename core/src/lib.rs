//! # VeriCache Core
//!
//! The backend-agnostic contract of the verification code cache: the
//! [`CodeCache`](cache::CodeCache) facade trait, the key scheme shared by
//! every backend, and the error taxonomy backends translate their failure
//! modes into.

pub mod cache;
pub mod errors;

pub use cache::{code_key, CodeCache};
pub use errors::{CodeError, CodeResult};
