//! src/panels/hint.rs
//!
//! Key help footer. The back hint is only offered when back is possible.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::Surface;

pub struct HintPanel {
    pub can_go_back: bool,
}

impl HintPanel {
    pub fn new(can_go_back: bool) -> Self {
        Self { can_go_back }
    }

    pub fn text(&self) -> String {
        let mut parts = vec!["↑/↓/Tab=Select", "Enter=Press", "Mouse=Hover/Click"];
        if self.can_go_back {
            parts.push("Esc=Back");
        }
        parts.push("Q=Quit");
        parts.join("  ")
    }
}

impl Surface for HintPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.text())
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
