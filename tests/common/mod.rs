//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Test servers over an in-memory store
//! - Database test fixtures (opt-in via DATABASE_URL)
//! - Task fixtures

pub mod database;
pub mod fixtures;
#[cfg(feature = "ssr")]
pub mod server;

pub use fixtures::*;
