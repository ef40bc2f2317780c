//! Client-side components: REST access, the persistent broadcast
//! session, and the local task view they feed.

pub mod api;
pub mod session;
pub mod view;

pub use api::{ClientError, TaskApiClient};
pub use session::{
    spawn_session, ConnectionState, SessionConfig, SessionHandle, SessionUpdate,
};
pub use view::TaskView;
