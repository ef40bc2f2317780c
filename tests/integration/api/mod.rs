//! API integration tests
//!
//! Integration tests for all task API endpoints
