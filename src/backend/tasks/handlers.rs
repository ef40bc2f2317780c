/**
 * Task API Handlers
 *
 * The four CRUD operations over the task store, each mutation followed
 * by exactly one broadcast event. Clients apply the broadcast event, not
 * the HTTP response body, so the originator sees its own change at the
 * same moment every other session does.
 *
 * # Operations
 *
 * - `GET    /api/tasks`       - list all tasks, newest first
 * - `POST   /api/tasks`       - create; broadcasts `created`
 * - `PATCH  /api/tasks/{id}`  - partial update; broadcasts `updated`
 * - `DELETE /api/tasks/{id}`  - hard delete; broadcasts `deleted`
 *
 * The operations are independent: no batching, no idempotency key (a
 * retried create produces a duplicate task), no cross-task transaction.
 */
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::realtime::broadcast::TaskEventPublisher;
use crate::backend::tasks::store::TaskStore;
use crate::shared::event::TaskEvent;
use crate::shared::task::{DeleteConfirmation, NewTask, Task, TaskPatch};

/// List all tasks (GET /api/tasks)
///
/// Returns every stored task ordered by creation time descending. Fails
/// only on store unavailability.
pub async fn list_tasks(State(store): State<TaskStore>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = store.find_all().await?;
    tracing::debug!("[Tasks] Listed {} tasks", tasks.len());
    Ok(Json(tasks))
}

/// Create a task (POST /api/tasks)
///
/// Validates the input, stores the task (the store assigns id and
/// timestamp), then publishes the full stored record as a `created`
/// event before returning it with 201.
pub async fn create_task(
    State(store): State<TaskStore>,
    State(publisher): State<TaskEventPublisher>,
    Json(input): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let input = input.validated()?;
    let task = store.insert_one(input).await?;

    tracing::info!("[Tasks] Created task {}", task.id);
    publisher.publish(TaskEvent::created(task.clone()));

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task (PATCH /api/tasks/{id})
///
/// Validates the patch before touching the store, applies it to the
/// matching record, then publishes the full updated record as an
/// `updated` event. Concurrent patches to the same task race
/// last-write-wins.
pub async fn update_task(
    State(store): State<TaskStore>,
    State(publisher): State<TaskEventPublisher>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    let patch = patch.validated()?;

    let task = store.update_one(id, patch).await?.ok_or(ApiError::NotFound)?;

    tracing::info!("[Tasks] Updated task {}", task.id);
    publisher.publish(TaskEvent::updated(task.clone()));

    Ok(Json(task))
}

/// Delete a task (DELETE /api/tasks/{id})
///
/// Hard delete; publishes only the id as a `deleted` event. A second
/// delete on the same id yields not-found.
pub async fn delete_task(
    State(store): State<TaskStore>,
    State(publisher): State<TaskEventPublisher>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    if !store.delete_one(id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!("[Tasks] Deleted task {}", id);
    publisher.publish(TaskEvent::deleted(id));

    Ok(Json(DeleteConfirmation::new()))
}
