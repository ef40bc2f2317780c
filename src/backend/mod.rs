//! Backend Module
//!
//! This module contains all server-side code for the task board. It
//! provides an Axum HTTP server exposing the task CRUD API, a broadcast
//! channel mirroring every mutation to all connected sessions, and
//! Postgres persistence.
//!
//! This module is only compiled when the `ssr` feature is enabled
//! (it is part of the default feature set).
//!
//! # Architecture
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`tasks`** - task store and CRUD handlers
//! - **`realtime`** - broadcast publisher, session registry, SSE endpoint
//! - **`error`** - API error taxonomy and HTTP conversion

pub mod server;
pub mod routes;
pub mod tasks;
pub mod realtime;
pub mod error;
