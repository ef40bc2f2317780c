//! Tasks Module
//!
//! The task store and the CRUD handlers over it.
//!
//! - **`store`** - persistent task collection (Postgres or in-memory)
//! - **`handlers`** - the four `/api/tasks` operations

pub mod store;
pub mod handlers;

pub use store::TaskStore;
