//! Devserve - zero-config static file server for local development.
//!
//! Serves the current working directory over HTTP on a fixed port, opens the
//! default browser, and runs until interrupted. There is no routing, no
//! templating, and no configuration surface: the behavior is fully determined
//! by two constants (listening port and webroot).
//!
//! # Architecture
//!
//! - [`config`] - Listener configuration (port, webroot, display URLs)
//! - [`server`] - The HTTP server: bind, serve, graceful shutdown
//! - [`browser`] - Best-effort default-browser launch
//! - [`error`] - Structured error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status messages for the terminal

// Public modules
pub mod browser;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::DevServer;
