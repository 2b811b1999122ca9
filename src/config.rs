//! Listener configuration.
//!
//! The server's behavior is fixed by two values: the listening port and the
//! webroot. Both are resolved once in `main` and never change for the
//! lifetime of the process.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Conventional location of the browser test runner under the webroot.
///
/// Printed as a convenience hint at startup; it is an ordinary static path
/// with no special routing behind it.
pub const TEST_RUNNER_PATH: &str = "/tests/test-runner.html";

/// Static server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind
    pub port: u16,

    /// Directory served as the webroot
    pub root: PathBuf,
}

impl ServerConfig {
    /// Create a configuration for the given port and webroot.
    pub fn new(port: u16, root: PathBuf) -> Self {
        Self { port, root }
    }

    /// Socket address to bind: the wildcard address on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Get the server base URL as a string.
    ///
    /// Uses `localhost` for display even though the listener binds the
    /// wildcard address.
    pub fn server_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// URL of the test runner page, printed as a startup hint.
    pub fn tests_url(&self) -> String {
        format!("{}{}", self.server_url(), TEST_RUNNER_PATH)
    }
}
