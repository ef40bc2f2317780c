//! Real-time broadcast integration tests

mod broadcast_test;
