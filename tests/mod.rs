//! Test suite for the task board
//!
//! This module organizes all tests

pub mod common;
#[cfg(feature = "ssr")]
pub mod e2e;
pub mod integration;
