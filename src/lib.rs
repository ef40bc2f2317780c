//! Taskboard - Main Library
//!
//! A small real-time task board: a server persists to-do tasks and
//! broadcasts every mutation to all connected client sessions, so every
//! client stays in sync without manual refresh.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and backend
//!   - The Task record and its create/patch inputs
//!   - Broadcast event types and validation errors
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr`
//!   feature, enabled by default)
//!   - Axum HTTP server with the `/api/tasks` CRUD surface
//!   - Broadcast channel and SSE subscription endpoint
//!   - Postgres persistence via sqlx
//!
//! - **`client`** - Client-side components
//!   - REST client over reqwest
//!   - Session manager: persistent SSE connection with reconnect
//!   - Task view: local state merged from List + broadcast events
//!
//! # Control Flow
//!
//! A client mounts, fetches the full task list over HTTP, then opens a
//! persistent broadcast connection. Mutations go over HTTP; the server
//! persists and then publishes the change to every connected session.
//! Clients, including the originator, apply the pushed event rather
//! than the HTTP response body.
//!
//! # Error Handling
//!
//! - `Result<T, E>` with custom `thiserror` types in `shared::error`,
//!   `backend::error`, and `client`
//! - Validation failures map to 400, missing ids to 404, store
//!   failures to 500
//!
//! # Thread Safety
//!
//! Server state is shared through cheap handles (`PgPool`,
//! `broadcast::Sender`, `Arc`-backed registry); the client view is
//! owned by a single consumer fed from a channel.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client-side components
pub mod client;
