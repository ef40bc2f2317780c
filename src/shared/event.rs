/**
 * Broadcast Event Types
 *
 * This module defines the events the server publishes after every task
 * mutation. Each mutation produces exactly one event; connected sessions
 * receive a copy, sessions that are offline simply miss it.
 *
 * # Wire Format
 *
 * On the SSE transport the event name travels in the `event:` field and
 * only the payload is serialized into `data:`:
 *
 * - `created` - full Task record
 * - `updated` - full Task record
 * - `deleted` - `{"id": ...}`
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::shared::error::SharedError;
use crate::shared::task::{Task, TaskDeleted};

/// A task mutation event broadcast to all connected sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum TaskEvent {
    /// A task was created; carries the full stored record
    Created(Task),
    /// A task was updated; carries the full updated record
    Updated(Task),
    /// A task was deleted; carries only the id
    Deleted(TaskDeleted),
}

impl TaskEvent {
    /// Event for a freshly created task
    pub fn created(task: Task) -> Self {
        Self::Created(task)
    }

    /// Event for an updated task
    pub fn updated(task: Task) -> Self {
        Self::Updated(task)
    }

    /// Event for a deleted task id
    pub fn deleted(id: Uuid) -> Self {
        Self::Deleted(TaskDeleted { id })
    }

    /// The SSE event name for this variant
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::Deleted(_) => "deleted",
        }
    }

    /// Serialize only the payload, the shape that goes into `data:`
    pub fn payload_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Created(task) | Self::Updated(task) => serde_json::to_string(task),
            Self::Deleted(deleted) => serde_json::to_string(deleted),
        }
    }

    /// Reconstruct an event from its wire parts (event name + payload)
    ///
    /// This is the client-side inverse of `event_name` / `payload_json`.
    ///
    /// # Errors
    ///
    /// * `UnknownEvent` for an unknown event name
    /// * `SerializationError` if the payload does not match the expected shape
    pub fn from_wire(event_name: &str, payload: &str) -> Result<Self, SharedError> {
        match event_name {
            "created" => Ok(Self::Created(serde_json::from_str(payload)?)),
            "updated" => Ok(Self::Updated(serde_json::from_str(payload)?)),
            "deleted" => Ok(Self::Deleted(serde_json::from_str(payload)?)),
            other => Err(SharedError::unknown_event(other)),
        }
    }

    /// The id of the task this event concerns
    pub fn task_id(&self) -> Uuid {
        match self {
            Self::Created(task) | Self::Updated(task) => task.id,
            Self::Deleted(deleted) => deleted.id,
        }
    }
}
