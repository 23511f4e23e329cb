//! HTTP server module.
//!
//! Serves plain HTTP/1.1 on the configured address until a shutdown future
//! resolves (SIGINT/SIGTERM in the binary), then drains in-flight connections.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::{shutdown_on, shutdown_signal};
