/**
 * Connected Session Registry
 *
 * Explicit registry of the client sessions currently connected to the
 * broadcast channel, owned by the server process. Registration and
 * deregistration are driven by the transport: the SSE handler registers
 * on connect and the returned guard deregisters when the stream drops.
 *
 * The registry holds no per-session state besides "is registered" and a
 * connect timestamp for the logs. It exists so connection lifecycle is
 * observable and unit-testable instead of ambient global state.
 */
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// What the registry knows about one live session
#[derive(Debug, Clone)]
pub struct ConnectedSession {
    pub connected_at: DateTime<Utc>,
}

/// Registry of currently connected sessions
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, ConnectedSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new session and return its lifecycle guard
    ///
    /// The session stays registered for exactly as long as the guard is
    /// alive; dropping it (stream closed, client gone) deregisters.
    pub fn register(&self) -> SessionGuard {
        let id = Uuid::new_v4();
        self.sessions.lock().unwrap().insert(
            id,
            ConnectedSession {
                connected_at: Utc::now(),
            },
        );
        tracing::info!("[Session] Connected: {}", id);
        SessionGuard {
            id,
            registry: self.clone(),
        }
    }

    fn deregister(&self, id: Uuid) {
        self.sessions.lock().unwrap().remove(&id);
        tracing::info!("[Session] Disconnected: {}", id);
    }

    /// Number of currently registered sessions
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Whether a session id is currently registered
    pub fn is_registered(&self, id: Uuid) -> bool {
        self.sessions.lock().unwrap().contains_key(&id)
    }
}

/// RAII guard tying a session's registration to the transport stream
pub struct SessionGuard {
    id: Uuid,
    registry: SessionRegistry,
}

impl SessionGuard {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.registry.deregister(self.id);
    }
}
