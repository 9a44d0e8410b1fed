use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub(super) const LOG_ENV: &str = "LARDER_LOG";
pub(super) const LOG_FORMAT_ENV: &str = "LARDER_LOG_FORMAT";

/// Logs go to stderr so listings on stdout stay clean.
pub(super) fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "larder=debug,info"
        } else {
            "larder=warn"
        })
    });

    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}
