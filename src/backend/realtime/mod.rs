//! Real-time Module
//!
//! Server-side fan-out of task mutations to connected client sessions.
//!
//! - **`broadcast`** - sequenced broadcast publisher over `tokio::sync::broadcast`
//! - **`registry`** - explicit registry of connected sessions
//! - **`subscription`** - SSE endpoint streaming events to each session

pub mod broadcast;
pub mod registry;
pub mod subscription;

pub use broadcast::{SequencedEvent, TaskEventPublisher};
pub use registry::{SessionGuard, SessionRegistry};
