//! Tracing setup for processes that embed the grammar.

use crate::{PacerConfig, PacerError, PacerResult};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber described by `config`.
///
/// With a debug log path everything at DEBUG and above goes to that file.
/// Otherwise `RUST_LOG` wins over the configured filter and output goes to
/// stderr. Calling this a second time returns [`PacerError::Logging`]
/// without touching the debug log file.
pub fn init_tracing(config: &PacerConfig) -> PacerResult<()> {
    if tracing::dispatcher::has_been_set() {
        return Err(PacerError::Logging(
            "a global tracing subscriber is already installed".to_string(),
        ));
    }

    if let Some(log_path) = &config.debug_log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        tracing_subscriber::fmt()
            .with_writer(Mutex::new(log_file))
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init()
            .map_err(|e| PacerError::Logging(e.to_string()))?;

        tracing::debug!("Debug logging to {}", log_path.display());
    } else {
        tracing_subscriber::registry()
            .with(env_filter(config))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| PacerError::Logging(e.to_string()))?;
    }

    Ok(())
}

fn env_filter(config: &PacerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.effective_log_filter()))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
