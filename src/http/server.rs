//! HTTP server setup and run loop.
//!
//! # Responsibilities
//! - Bind the listening socket on all interfaces
//! - Dispatch connections to the application router
//! - Exit the serve loop on shutdown signal
//!
//! The application router is an opaque handle: the server never inspects,
//! configures, or validates it. The port arrives as an explicit parameter,
//! never from the environment.

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::lifecycle::signals::shutdown_signal;

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listening socket.
    #[error("failed to bind: {0}")]
    Bind(#[source] std::io::Error),

    /// The serve loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// HTTP server for the backend application.
pub struct HttpServer {
    app: Router,
    port: u16,
}

impl HttpServer {
    /// Create a new server from an application router and an explicit port.
    pub fn new(app: Router, port: u16) -> Self {
        Self { app, port }
    }

    /// Bind the listening socket on `0.0.0.0:<port>`.
    ///
    /// Port `0` requests an OS-assigned ephemeral port; the real port is in
    /// the listener's `local_addr`. Bind failure (port in use, insufficient
    /// privilege) is fatal to startup.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port));

        let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ServerError::Bind)?;

        tracing::info!(
            address = %local_addr,
            "Listener bound"
        );

        Ok(listener)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Does not return under normal operation; the loop drains only when a
    /// shutdown signal fires, after which `Ok(())` is returned.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Port the server was configured with.
    pub fn port(&self) -> u16 {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[tokio::test]
    async fn bind_uses_wildcard_interface() {
        let server = HttpServer::new(Router::new(), 0);
        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();

        assert_eq!(addr.ip(), IpAddr::from(Ipv4Addr::UNSPECIFIED));
        assert_ne!(addr.port(), 0, "port 0 should resolve to an ephemeral port");
    }

    #[tokio::test]
    async fn bind_honors_explicit_port() {
        // Grab an ephemeral port first so the explicit bind has a free one.
        let probe = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).await.unwrap();
        let port = probe.local_addr().unwrap().port();
        drop(probe);

        let server = HttpServer::new(Router::new(), port);
        let listener = server.bind().await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port);
    }
}
