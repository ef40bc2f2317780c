/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container for the server process:
 * - the task store (Postgres pool or in-memory)
 * - the broadcast publisher every mutation fans out through
 * - the registry of currently connected sessions
 *
 * # Thread Safety
 *
 * All fields are cheap clones over shared handles (`PgPool`,
 * `broadcast::Sender`, `Arc`-backed registry), so `AppState` itself is
 * `Clone` and safe to hand to every request task.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of
 * the state they use, following Axum's recommended pattern.
 */
use axum::extract::FromRef;

use crate::backend::realtime::broadcast::TaskEventPublisher;
use crate::backend::realtime::registry::SessionRegistry;
use crate::backend::tasks::store::TaskStore;

/// Application state for the task board server
#[derive(Clone)]
pub struct AppState {
    /// The task store behind the CRUD handlers
    pub store: TaskStore,
    /// Broadcast publisher for mutation events
    pub events: TaskEventPublisher,
    /// Registry of currently connected broadcast sessions
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Assemble state from its parts
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            events: TaskEventPublisher::new(),
            sessions: SessionRegistry::new(),
        }
    }
}

impl FromRef<AppState> for TaskStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TaskEventPublisher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.events.clone()
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
