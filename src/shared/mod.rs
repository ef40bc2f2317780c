//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and the backend. These types define the wire contract: the
//! Task record, its create/patch inputs, and the broadcast events.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for
//! serialization and transmission over HTTP.

/// Task record and wire types
pub mod task;

/// Broadcast event types
pub mod event;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use event::TaskEvent;
pub use task::{DeleteConfirmation, NewTask, Task, TaskDeleted, TaskPatch, MAX_TITLE_LEN};
