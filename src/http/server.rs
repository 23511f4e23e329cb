//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Runs until `shutdown` resolves and the open connections have drained.
/// The binary passes [`shutdown::shutdown_signal`].
pub async fn start_server<F>(
    app: Router,
    config: &AppConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.http.socket_addr()?;
    let handle = Handle::new();

    shutdown::shutdown_on(handle.clone(), shutdown);

    serve(app, addr, handle).await
}

/// Bind `addr` and serve `app` until `handle` is shut down.
///
/// Binding to port 0 picks a free port; await `handle.listening()` to learn it.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
