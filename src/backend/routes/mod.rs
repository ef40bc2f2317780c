//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`router`** - top-level router: API routes, CORS, static assets
//! - **`task_routes`** - the `/api/tasks` and `/api/events` route group

pub mod router;
pub mod task_routes;

pub use router::create_router;
