//! The development server.
//!
//! Binds a TCP listener on the configured port and serves the webroot with
//! standard static-file semantics, delegated wholesale to
//! `tower_http::services::ServeDir`: existing file → 200 with the file bytes
//! and a content type inferred from the extension, directory → its
//! `index.html`, missing path → 404. Runs until Ctrl+C, then shuts down
//! cleanly and releases the listener.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::browser;
use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
use crate::ui;

/// Static file server over a fixed webroot.
pub struct DevServer {
    config: ServerConfig,
}

impl DevServer {
    /// Create a new server for the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the axum router.
    ///
    /// Everything falls through to `ServeDir`; there are no routes of our
    /// own.
    pub fn router(&self) -> Router {
        Router::new().fallback_service(ServeDir::new(&self.config.root))
    }

    /// Bind the listener on the configured address.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::PortInUse`] when the port is already bound by
    /// another process, [`ServerError::Bind`] for any other OS-level bind
    /// failure.
    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.bind_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::from_bind(addr, e))
    }

    /// Bind, print the startup banner, open the browser, and serve until
    /// interrupted.
    ///
    /// The browser launch is best-effort and never aborts the server. On
    /// Ctrl+C the serve loop drains, the listener is released, and the
    /// shutdown notice is printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or the serve loop
    /// fails at the socket level.
    pub async fn start(self) -> Result<()> {
        let listener = self.bind().await?;
        debug!("listener bound on {}", self.config.bind_addr());

        let server_url = self.config.server_url();
        ui::success(&format!("Dev server running at {}", server_url));
        ui::info(&format!("Test runner at {}", self.config.tests_url()));
        ui::info("Press Ctrl+C to stop");

        browser::open_browser(&server_url);

        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        ui::info("Server stopped");
        Ok(())
    }
}

/// Resolve when the process receives an interrupt signal.
///
/// If the Ctrl+C handler cannot be installed the server keeps running; it
/// can still be stopped by killing the process.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        ui::warning(&format!("Failed to listen for Ctrl+C: {}", e));
        std::future::pending::<()>().await;
    }
    debug!("interrupt received, shutting down");
}
