//! src/panels/history.rs
//!
//! Navigation trail, root at the top, current panel highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::Surface;

pub struct HistoryPanel {
    /// Root first.
    pub trail: Vec<String>,
}

impl HistoryPanel {
    pub fn new(trail: Vec<String>) -> Self {
        Self { trail }
    }
}

impl Surface for HistoryPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // keep the top of the stack on screen when the trail is long
        let height = area.height.saturating_sub(2) as usize;
        let start = self.trail.len().saturating_sub(height);
        let last_index = self.trail.len().saturating_sub(1);

        let lines: Vec<Line> = self
            .trail
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, name)| {
                let is_top = i == last_index;
                let style = if is_top {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(vec![
                    Span::styled(format!("[{i}] "), Style::default().fg(Color::Yellow)),
                    Span::styled(name.clone(), style),
                ])
            })
            .collect();

        let block = Block::default().title("History").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
