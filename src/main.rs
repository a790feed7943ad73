//! src/main.rs
//!
//! Entrypoint: install error reporting and logging, then hand over to `app::run()`.

use panel_nav::{app, config::AppConfig, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = AppConfig::from_env();
    logging::init(&config)?;
    app::run(config)
}
