//! End-to-end tests
//!
//! Real TCP server, real HTTP client, real SSE stream
