//! Devserve - zero-config static file server for local development.
//!
//! Takes no arguments: serves the current working directory on port 8000,
//! opens a browser tab, and runs until Ctrl+C. Clean interrupt shutdown
//! exits 0; bind failures exit 1 with a rendered diagnostic.

use devserve::config::{ServerConfig, DEFAULT_PORT};
use devserve::{error, logger, DevServer};
use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init_logger();

    let run = async {
        let root = std::env::current_dir()?;
        let config = ServerConfig::new(DEFAULT_PORT, root);
        DevServer::new(config).start().await
    };

    // Render failures as miette diagnostics; a returned Err exits with
    // status 1, the clean shutdown path exits 0.
    run.await.map_err(error::to_miette)
}
