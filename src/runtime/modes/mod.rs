//! Mode routing
//!
//! - Server mode (HTTP server, the default)
//! - CLI mode (offline link management on the storage file)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
