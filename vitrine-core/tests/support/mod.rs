//! Shared helpers for core integration tests.

pub mod host;
