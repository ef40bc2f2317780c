//! Integration tests
//!
//! Request-level tests for the API surface and the broadcast machinery

pub mod api;
pub mod database;
pub mod realtime;
