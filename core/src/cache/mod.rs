//! The verification code cache facade

pub mod key;
pub mod traits;

pub use key::code_key;
pub use traits::CodeCache;
