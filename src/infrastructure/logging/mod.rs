// Logging module - Logging infrastructure
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::io;

/// Pick the log level from the command line flags and the configured default
pub fn derive_level(verbose: bool, quiet: bool, configured: &str) -> tracing::Level {
    if quiet {
        return tracing::Level::ERROR;
    }
    if verbose {
        return tracing::Level::DEBUG;
    }
    match configured {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::WARN,
    }
}

/// Initialize logging system
///
/// Logs go to stderr; stdout carries command output only. `RUST_LOG`
/// overrides `level`. Returns false when a subscriber was already installed.
pub fn init_logging(level: tracing::Level) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("globus_cli={},warn", level.as_str().to_lowercase())));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
        )
        .try_init()
        .is_ok();

    tracing::debug!("globus-cli logging system initialized");
    installed
}
