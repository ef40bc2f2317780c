/**
 * Task API Routes
 *
 * Route configuration for the `/api/tasks` CRUD surface and the
 * `/api/events` broadcast subscription.
 */
use axum::routing::get;
use axum::Router;

use crate::backend::realtime::subscription::handle_event_subscription;
use crate::backend::server::state::AppState;
use crate::backend::tasks::handlers::{create_task, delete_task, list_tasks, update_task};

/// Add the task API routes to a router
///
/// - `GET    /api/tasks`      - list all tasks
/// - `POST   /api/tasks`      - create a task
/// - `PATCH  /api/tasks/{id}` - partial update
/// - `DELETE /api/tasks/{id}` - delete
/// - `GET    /api/events`     - SSE broadcast subscription
pub fn configure_task_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            axum::routing::patch(update_task).delete(delete_task),
        )
        .route("/api/events", get(handle_event_subscription))
}
