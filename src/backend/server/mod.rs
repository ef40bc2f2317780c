//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Explicit startup configuration
//! └── init.rs         - Store connection and app assembly
//! ```

pub mod state;
pub mod config;
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use state::AppState;
