//! src/config.rs
//!
//! Runtime settings for the menu app: frame pacing, press feedback, button
//! style, diagnostics capacity and the log destination.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::ui::ButtonStyle;

/// Environment variable overriding the log file path.
pub const LOG_PATH_ENV: &str = "PANEL_NAV_LOG";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Target time per frame.
    pub frame_time: Duration,

    /// How long a pressed button shows its pressed colour before its action fires.
    pub press_hold: Duration,

    /// Navigation events kept for the status panel.
    pub recent_events: usize,

    /// Style every menu button starts with.
    pub button: ButtonStyle,

    /// Where tracing output goes; the terminal itself belongs to the UI.
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Defaults, with the log path taken from `PANEL_NAV_LOG` when set.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var_os(key))
    }

    /// Like `from_env`, reading variables through `lookup`. Empty values
    /// count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut cfg = Self::default();
        if let Some(path) = lookup(LOG_PATH_ENV).filter(|p| !p.is_empty()) {
            cfg.log_path = PathBuf::from(path);
        }
        cfg
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_time: Duration::from_millis(33),
            press_hold: Duration::from_millis(120),
            recent_events: 32,
            button: ButtonStyle::default(),
            log_path: PathBuf::from("panel_nav.log"),
        }
    }
}
