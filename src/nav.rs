//! src/nav.rs
//!
//! Panel navigation: identity handles, the history stack, and its diagnostics.

pub mod events;
pub mod handle;
pub mod navigator;

pub use events::{EventLog, NavEvent, NavObserver, TracingObserver};
pub use handle::{Displayable, PanelHandle};
pub use navigator::{PanelNavigator, ShowOutcome};
