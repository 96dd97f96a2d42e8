//! Logging setup utilities for the chat bot.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Every target in `targets` (crate names, binary names) gets `default_log_level`.
/// The filter can be overridden using the `RUST_LOG` environment variable.
///
/// # Examples
///
/// ```no_run
/// use hcbot_shared::logger::setup_logger;
///
/// setup_logger(&["hcbot", env!("CARGO_PKG_NAME")], "info");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_filter(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}
