/**
 * Task Data Model
 *
 * This module defines the Task record and the wire types used by the
 * task API: the create input, the partial-update patch, and the small
 * response/payload shapes.
 *
 * # Wire Format
 *
 * All types serialize as camelCase JSON (`isCompleted`, `createdAt`),
 * matching what browser clients exchange with the server.
 *
 * # Validation
 *
 * Inputs are trimmed before validation. A title or description that is
 * empty after trimming is rejected, as is a title longer than
 * `MAX_TITLE_LEN` characters. The same rules apply to creates and to
 * partial patches (only the fields present in a patch are checked).
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use crate::shared::error::SharedError;

/// Maximum allowed title length in characters
pub const MAX_TITLE_LEN: usize = 100;

/// A single to-do item record
///
/// The only entity in the system. `id` and `created_at` are assigned by
/// the store at creation and never change; `is_completed` starts `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the store, never reused
    pub id: Uuid,
    /// Short task title (non-empty, at most `MAX_TITLE_LEN` characters)
    pub title: String,
    /// Free-form task description (non-empty, unbounded)
    pub description: String,
    /// Completion flag, defaults to `false` at creation
    pub is_completed: bool,
    /// Creation timestamp, set once by the store
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task
///
/// The store assigns `id`, `created_at`, and `is_completed = false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

impl NewTask {
    /// Create a new task input
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Trim both fields and validate them
    ///
    /// Returns the normalized input on success so that stored tasks never
    /// carry leading or trailing whitespace.
    ///
    /// # Errors
    ///
    /// * `ValidationError` on an empty title or description, or a title
    ///   longer than `MAX_TITLE_LEN` characters
    pub fn validated(self) -> Result<Self, SharedError> {
        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();

        validate_title(&title)?;
        validate_description(&description)?;

        Ok(Self { title, description })
    }
}

/// Partial update for a task
///
/// Any field may be patched; absent fields are left untouched. `id` and
/// `createdAt` are immutable and have no corresponding patch field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only toggles the completion flag
    ///
    /// The one patch the original UI issues, kept as a convenience.
    pub fn completion(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Self::default()
        }
    }

    /// True if the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_completed.is_none()
    }

    /// Trim present text fields and validate them
    ///
    /// Validation runs before the patch is applied, so a failing patch
    /// leaves the stored record untouched.
    pub fn validated(self) -> Result<Self, SharedError> {
        let title = match self.title {
            Some(t) => {
                let t = t.trim().to_string();
                validate_title(&t)?;
                Some(t)
            }
            None => None,
        };
        let description = match self.description {
            Some(d) => {
                let d = d.trim().to_string();
                validate_description(&d)?;
                Some(d)
            }
            None => None,
        };

        Ok(Self {
            title,
            description,
            is_completed: self.is_completed,
        })
    }

    /// Apply the patch to a task in place
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(is_completed) = self.is_completed {
            task.is_completed = is_completed;
        }
    }
}

/// Payload of a `deleted` broadcast event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDeleted {
    pub id: Uuid,
}

/// Response body for a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
        }
    }
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_title(title: &str) -> Result<(), SharedError> {
    if title.is_empty() {
        return Err(SharedError::validation("title", "Title is required"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(SharedError::validation(
            "title",
            "Title cannot be more than 100 characters",
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), SharedError> {
    if description.is_empty() {
        return Err(SharedError::validation(
            "description",
            "Description is required",
        ));
    }
    Ok(())
}
