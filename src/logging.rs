//! src/logging.rs
//!
//! Tracing setup. Output goes to a file because the TUI owns the terminal;
//! the level defaults to INFO and follows `RUST_LOG` when set.

use std::fs::File;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Builder;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::AppConfig;

fn filter_builder() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

/// Install the global subscriber, filtered by `RUST_LOG`.
pub fn init(config: &AppConfig) -> color_eyre::Result<()> {
    subscriber(config, filter_builder().from_env_lossy())?
        .try_init()
        .map_err(|e| eyre!("installing tracing subscriber: {e}"))?;

    tracing::info!(path = %config.log_path.display(), "logging initialised");
    Ok(())
}

/// Plain-text subscriber writing to `config.log_path` (truncated).
pub fn subscriber(
    config: &AppConfig,
    filter: EnvFilter,
) -> color_eyre::Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = File::create(&config.log_path)
        .wrap_err_with(|| format!("creating log file {}", config.log_path.display()))?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish())
}
