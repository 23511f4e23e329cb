//! Graceful shutdown and signal handling.
//!
//! [`shutdown_signal`] resolves on SIGINT or SIGTERM. [`shutdown_on`] ties any
//! such future to a server [`Handle`]: once the future resolves, the server
//! stops accepting connections and drains the open ones for at most
//! `SHUTDOWN_GRACE_PERIOD_SECS`.

use std::future::Future;
use std::time::Duration;

use axum_server::Handle;

use crate::config::SHUTDOWN_GRACE_PERIOD_SECS;

/// Resolves when the process receives SIGINT (Ctrl+C) or SIGTERM.
///
/// A signal whose handler cannot be installed never fires; the other one
/// still does.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
}

/// Spawn a task that shuts `handle` down gracefully once `signal` resolves.
pub fn shutdown_on<F>(handle: Handle, signal: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        signal.await;

        handle.graceful_shutdown(Some(Duration::from_secs(SHUTDOWN_GRACE_PERIOD_SECS)));
        tracing::info!(
            grace_period_secs = SHUTDOWN_GRACE_PERIOD_SECS,
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}
