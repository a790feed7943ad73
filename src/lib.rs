//! src/lib.rs
//!
//! Stack-based panel navigation and the terminal menu app built on it.
//!
//! [`nav`] is the self-contained core: a [`nav::PanelNavigator`] tracks which
//! panel of a fixed set is showing and how to get back. The remaining
//! modules wire it into a ratatui menu with animated buttons.

pub mod app;
pub mod config;
pub mod logging;
pub mod menu;
pub mod nav;
pub mod panels;
pub mod ui;
