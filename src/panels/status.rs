//! src/panels/status.rs
//!
//! Navigation status: current panel, depth, and the latest diagnostics.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::menu::NavSnapshot;
use crate::ui::Surface;

pub struct StatusPanel {
    pub snapshot: NavSnapshot,
}

impl StatusPanel {
    pub fn new(snapshot: NavSnapshot) -> Self {
        Self { snapshot }
    }
}

impl Surface for StatusPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let s = &self.snapshot;
        let current = s.current.as_deref().unwrap_or("<none>");

        let mut lines = vec![
            Line::from(vec![
                Span::styled(current, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  depth={}  back={}", s.depth, s.can_go_back)),
            ]),
            Line::raw(""),
        ];

        // newest first, as many as fit
        let room = area.height.saturating_sub(4) as usize;
        lines.extend(s.recent.iter().rev().take(room).map(|e| {
            Line::from(Span::styled(e.clone(), Style::default().fg(Color::DarkGray)))
        }));

        let block = Block::default().title("Status").borders(Borders::ALL);
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            area,
        );
    }
}
