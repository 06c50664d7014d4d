//! Startup utilities: logging initialisation and startup banner.

use cadastro_config::{AppConfig, ObservabilityConfig};
use tracing::{info, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used before configuration is available.
const BOOTSTRAP_FILTER: &str = "info";

/// Builds the log filter: `RUST_LOG` wins, otherwise the configured level.
#[must_use]
pub fn log_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},cadastro=debug",
            level = config.log_level.to_lowercase()
        ))
    })
}

/// Subscriber for the bootstrap phase, while configuration is loaded.
///
/// Meant to be scoped with [`tracing::subscriber::with_default`] so the
/// global subscriber can still be installed by [`init_logging`].
#[must_use]
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so the report on stdout stays clean.
pub fn init_logging(config: &ObservabilityConfig) {
    let registry = tracing_subscriber::registry().with(log_filter(config));

    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Logs application startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Application: {} v{}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("Seed users:  {}", config.seed.users.len());
    info!("{}", separator);
}
