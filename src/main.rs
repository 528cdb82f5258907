//! Process entry point for the backend HTTP application.
//!
//! The launcher does exactly four things, in order: initialize logging,
//! resolve the listen port from the environment, obtain the application
//! object from the backend module, and serve it on `0.0.0.0` until the
//! process is told to stop. Any failure along the way is fatal with a
//! non-zero exit; recovery belongs to a process supervisor, not this layer.

use backend_launcher::backend;
use backend_launcher::config::LauncherConfig;
use backend_launcher::http::HttpServer;
use backend_launcher::lifecycle::Shutdown;
use backend_launcher::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("backend-launcher v0.1.0 starting");

    let config = LauncherConfig::from_env()?;

    tracing::info!(port = config.port, "Configuration resolved");

    let app = backend::app();
    let server = HttpServer::new(app, config.port);
    let listener = server.bind().await?;

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
