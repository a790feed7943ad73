//! src/panels/title.rs
//!
//! Scene title header.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::Surface;

pub struct TitlePanel {
    pub title: String,
    pub subtitle: Option<String>,
}

impl TitlePanel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }
}

impl Surface for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let text = match &self.subtitle {
            Some(sub) => format!("{} · {}", self.title, sub),
            None => self.title.clone(),
        };
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
