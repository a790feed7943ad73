//! src/ui/node.rs
//!
//! Screen composition. The app describes each frame as a tree: groups split
//! their area with a ratatui `Layout`, leaves hand their slice to a
//! [`Surface`] (menu stage, hint bar, history trail, ...).

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Something that paints into a slice of the frame. Menu panels, the stage
/// and the side panels all implement it.
pub trait Surface {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// One frame's layout. Built fresh each tick from the current scene, so it
/// never holds navigation state of its own.
pub enum Node {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Leaf {
        surface: Box<dyn Surface>,
    },
}

impl Node {
    /// Children beyond the last constraint get no area and are not drawn.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { surface } => surface.draw(f, area),
        }
    }
}

pub fn group(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

pub fn leaf(surface: impl Surface + 'static) -> Node {
    Node::Leaf {
        surface: Box::new(surface),
    }
}
