//! src/ui.rs
//!
//! Top-level UI module re-exporting node helpers and the animated button.

pub mod button;
pub mod node;

pub use button::{AnimatedButton, ButtonStyle, Rgb};
pub use node::{Node, Surface, group, leaf};
