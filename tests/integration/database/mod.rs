//! Database integration tests
//!
//! These run only when DATABASE_URL points at a Postgres instance.

#[cfg(feature = "ssr")]
mod store_test;
