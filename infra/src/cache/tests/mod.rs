//! Unit tests for the verification code cache backends

mod factory_tests;
