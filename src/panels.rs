//! src/panels.rs
//!
//! Read-only display panels framing the active menu.

pub mod hint;
pub mod history;
pub mod status;
pub mod title;

pub use hint::HintPanel;
pub use history::HistoryPanel;
pub use status::StatusPanel;
pub use title::TitlePanel;
