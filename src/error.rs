//! Error handling for the dev server.
//!
//! Uses `thiserror` for structured errors with actionable messages. Only the
//! bind boundary produces recognized failures; both are terminal and exit
//! the process with status 1 through the miette bridge in [`to_miette`].

use std::net::SocketAddr;
use thiserror::Error;

/// Top-level server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured port is already bound by another process
    #[error("Port {port} is already in use\n\nHint: Stop the other process, or change the port constant and rebuild")]
    PortInUse {
        /// The port that could not be bound
        port: u16,
    },

    /// Any other OS-level bind failure
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address the bind was attempted on
        addr: SocketAddr,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// I/O errors outside the bind path (webroot resolution, serve loop)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Classify a bind failure, recognizing the portable "address in use"
    /// condition rather than any platform-specific errno.
    pub fn from_bind(addr: SocketAddr, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::AddrInUse {
            ServerError::PortInUse { port: addr.port() }
        } else {
            ServerError::Bind { addr, source }
        }
    }
}

/// Result type alias using `ServerError` as the default error type.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Convert a ServerError to a miette Report for rendered diagnostics.
pub fn to_miette(err: ServerError) -> miette::Report {
    match err {
        ServerError::PortInUse { port } => miette::miette!(
            help = "Stop the other process, or change the port constant and rebuild",
            "Port {} is already in use",
            port
        ),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::net::SocketAddr;

    fn addr() -> SocketAddr {
        "0.0.0.0:8000".parse().unwrap()
    }

    #[test]
    fn test_addr_in_use_maps_to_port_in_use() {
        let source = io::Error::new(io::ErrorKind::AddrInUse, "address in use");
        let err = ServerError::from_bind(addr(), source);
        assert!(matches!(err, ServerError::PortInUse { port: 8000 }));
    }

    #[test]
    fn test_other_bind_failure_keeps_raw_error() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let err = ServerError::from_bind(addr(), source);
        let msg = err.to_string();
        assert!(matches!(err, ServerError::Bind { .. }));
        assert!(msg.contains("permission denied"));
        assert!(msg.contains("0.0.0.0:8000"));
    }

    #[test]
    fn test_port_in_use_message_has_hint() {
        let err = ServerError::PortInUse { port: 8000 };
        let msg = err.to_string();
        assert!(msg.contains("Port 8000 is already in use"));
        assert!(msg.contains("Hint:"));
    }
}
