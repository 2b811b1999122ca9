//! Logging infrastructure built on the `tracing` ecosystem.
//!
//! There are no verbosity flags; the default level is INFO for this crate
//! and can be overridden through the `RUST_LOG` environment variable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Called once at startup, before any logging occurs. Colors follow the
/// same detection as the status messages in [`crate::ui`].
pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devserve=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
