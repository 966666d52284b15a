//! Small shared utilities

pub mod phone;

pub use phone::mask_phone;
