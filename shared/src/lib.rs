//! # VeriCache Shared
//!
//! Shared configuration types and small utilities used by the core and
//! infrastructure layers of the verification code cache.

pub mod config;
pub mod utils;
