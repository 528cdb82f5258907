//! OS signal handling.
//!
//! Translates process signals into shutdown of the serve loop. Shutdown
//! sources race; whichever fires first wins and the rest are ignored.

use tokio::sync::broadcast;

/// Resolve when the process should stop serving.
///
/// Completes on Ctrl+C, SIGTERM (unix), or a [`crate::Shutdown`] trigger,
/// whichever comes first.
pub async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
        _ = shutdown.recv() => tracing::info!("Shutdown triggered"),
    }
}
