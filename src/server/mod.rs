//! TCP front end: bind a port, pair up connections, run sessions.
//!
//! Each pair of connections gets its own `Session` on its own thread.
//! Sessions share no state.

pub mod config;
#[allow(clippy::module_inception)]
pub mod server;

pub use config::ServerConfig;
pub use server::{run_session, Server, ServerError};
