/**
 * Task Store
 *
 * Persistent collection of task records. The store owns id and timestamp
 * assignment: callers hand it validated input and get back the stored
 * record.
 *
 * # Variants
 *
 * - `Postgres` - the production store, one flat row per task, reached by
 *   connection string. Atomicity is per-row; concurrent updates to the
 *   same task race last-write-wins.
 * - `Memory` - an in-process store with identical observable semantics,
 *   used by the test suite and for store-less development.
 *
 * # Operations
 *
 * Exactly four: find all sorted by creation time descending, insert one,
 * update one by id with partial fields, delete one by id.
 */
use std::sync::Arc;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::task::{NewTask, Task, TaskPatch};

/// Columns returned by every query that yields full task records
const TASK_COLUMNS: &str = "id, title, description, is_completed, created_at";

/// Row shape for task queries
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: String,
    is_completed: bool,
    created_at: chrono::DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            is_completed: row.is_completed,
            created_at: row.created_at,
        }
    }
}

/// The task store backing the API handlers
#[derive(Clone)]
pub enum TaskStore {
    /// Postgres-backed store (production)
    Postgres(PgPool),
    /// In-memory store (tests, store-less development)
    Memory(Arc<RwLock<Vec<Task>>>),
}

impl TaskStore {
    /// Create a Postgres-backed store from an existing pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::Postgres(pool)
    }

    /// Create an empty in-memory store
    pub fn memory() -> Self {
        Self::Memory(Arc::new(RwLock::new(Vec::new())))
    }

    /// Fetch all tasks, newest first
    pub async fn find_all(&self) -> Result<Vec<Task>, sqlx::Error> {
        match self {
            Self::Postgres(pool) => {
                let rows = sqlx::query_as::<_, TaskRow>(&format!(
                    "SELECT {} FROM tasks ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .fetch_all(pool)
                .await?;
                Ok(rows.into_iter().map(Task::from).collect())
            }
            Self::Memory(tasks) => {
                let mut tasks = tasks.read().await.clone();
                tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                Ok(tasks)
            }
        }
    }

    /// Insert a new task, assigning id, timestamp, and `is_completed = false`
    ///
    /// Input is expected to be validated already; the store performs no
    /// validation of its own.
    pub async fn insert_one(&self, new_task: NewTask) -> Result<Task, sqlx::Error> {
        match self {
            Self::Postgres(pool) => {
                let row = sqlx::query_as::<_, TaskRow>(&format!(
                    "INSERT INTO tasks (title, description) VALUES ($1, $2) RETURNING {}",
                    TASK_COLUMNS
                ))
                .bind(&new_task.title)
                .bind(&new_task.description)
                .fetch_one(pool)
                .await?;
                Ok(row.into())
            }
            Self::Memory(tasks) => {
                let task = Task {
                    id: Uuid::new_v4(),
                    title: new_task.title,
                    description: new_task.description,
                    is_completed: false,
                    created_at: Utc::now(),
                };
                tasks.write().await.push(task.clone());
                Ok(task)
            }
        }
    }

    /// Apply a partial patch to the task with the given id
    ///
    /// Returns `Ok(None)` when no task with that id exists. Absent patch
    /// fields leave the stored columns untouched.
    pub async fn update_one(
        &self,
        id: Uuid,
        patch: TaskPatch,
    ) -> Result<Option<Task>, sqlx::Error> {
        match self {
            Self::Postgres(pool) => {
                let row = sqlx::query_as::<_, TaskRow>(&format!(
                    "UPDATE tasks SET \
                         title = COALESCE($2, title), \
                         description = COALESCE($3, description), \
                         is_completed = COALESCE($4, is_completed) \
                     WHERE id = $1 RETURNING {}",
                    TASK_COLUMNS
                ))
                .bind(id)
                .bind(patch.title)
                .bind(patch.description)
                .bind(patch.is_completed)
                .fetch_optional(pool)
                .await?;
                Ok(row.map(Task::from))
            }
            Self::Memory(tasks) => {
                let mut tasks = tasks.write().await;
                match tasks.iter_mut().find(|task| task.id == id) {
                    Some(task) => {
                        patch.apply_to(task);
                        Ok(Some(task.clone()))
                    }
                    None => Ok(None),
                }
            }
        }
    }

    /// Delete the task with the given id
    ///
    /// Returns `Ok(false)` when no task with that id exists. Hard delete,
    /// no tombstone; the id is never reused.
    pub async fn delete_one(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        match self {
            Self::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
                    .bind(id)
                    .execute(pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }
            Self::Memory(tasks) => {
                let mut tasks = tasks.write().await;
                let before = tasks.len();
                tasks.retain(|task| task.id != id);
                Ok(tasks.len() < before)
            }
        }
    }
}
