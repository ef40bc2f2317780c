//! Task fixtures shared across the test suite

use chrono::Utc;
use uuid::Uuid;

use taskboard::shared::task::{NewTask, Task};

/// A valid create input
pub fn sample_new_task() -> NewTask {
    NewTask::new("Buy milk", "Two liters, whole")
}

/// A fully populated task record with a fresh id
pub fn sample_task(title: &str) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{} description", title),
        is_completed: false,
        created_at: Utc::now(),
    }
}
