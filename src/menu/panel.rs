//! src/menu/panel.rs
//!
//! A menu panel: a titled box with optional body text and a column of
//! animated buttons. Visibility is owned by the navigator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::action::MenuAction;
use crate::nav::{Displayable, PanelHandle};
use crate::ui::{AnimatedButton, ButtonStyle, Surface};

#[derive(Clone, Debug)]
pub struct MenuButton {
    pub action: MenuAction,
    pub anim: AnimatedButton,
}

#[derive(Debug)]
pub struct MenuPanel {
    title: String,
    body: Option<String>,
    buttons: Vec<MenuButton>,
    visible: bool,

    /// Screen rect of each button from the last draw, for hit-testing.
    button_areas: Vec<Rect>,
}

impl MenuPanel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: None,
            buttons: Vec::new(),
            visible: false,
            button_areas: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn with_button(mut self, label: &str, action: MenuAction, style: &ButtonStyle) -> Self {
        self.buttons.push(MenuButton {
            action,
            anim: AnimatedButton::new(label, style.clone()),
        });
        self
    }

    pub fn into_handle(self) -> PanelHandle<MenuPanel> {
        PanelHandle::new(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut [MenuButton] {
        &mut self.buttons
    }

    pub fn button_mut(&mut self, idx: usize) -> Option<&mut MenuButton> {
        self.buttons.get_mut(idx)
    }

    /// First button bound to `action`.
    pub fn find(&mut self, action: MenuAction) -> Option<&mut MenuButton> {
        self.buttons.iter_mut().find(|b| b.action == action)
    }

    /// Button under the given terminal cell, as of the last draw.
    pub fn button_at(&self, column: u16, row: u16) -> Option<usize> {
        self.button_areas.iter().position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }

    pub fn tick(&mut self, dt: f32) {
        for b in &mut self.buttons {
            b.anim.tick(dt);
        }
    }

    fn render(&mut self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let body_height = if self.body.is_some() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(body_height), Constraint::Min(0)])
            .split(inner);

        if let Some(body) = &self.body {
            let p = Paragraph::new(body.clone())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().add_modifier(Modifier::ITALIC));
            f.render_widget(p, chunks[0]);
        }

        // one row per button with a spacer row between
        let rows = chunks[1];
        self.button_areas.clear();
        for (i, b) in self.buttons.iter().enumerate() {
            let y = rows.y + (i as u16) * 2;
            if y >= rows.y + rows.height {
                break;
            }
            let text = b.anim.render_label();
            let width = (text.chars().count() as u16).min(rows.width);
            let x = rows.x + (rows.width - width) / 2;
            let cell = Rect::new(x, y, width, 1);
            f.render_widget(
                Paragraph::new(Line::styled(text, b.anim.text_style())),
                cell,
            );
            self.button_areas.push(cell);
        }
    }
}

impl Displayable for MenuPanel {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.button_areas.clear();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn name(&self) -> &str {
        &self.title
    }
}

impl Surface for PanelHandle<MenuPanel> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        self.borrow_mut().render(f, area);
    }
}

/// Draws every visible panel of a set, splitting the area between them.
///
/// With the navigator's invariants in place this is exactly one panel.
pub struct Stage {
    pub panels: Vec<PanelHandle<MenuPanel>>,
}

impl Surface for Stage {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let visible: Vec<_> = self.panels.iter().filter(|p| p.is_visible()).collect();
        if visible.is_empty() {
            return;
        }
        let constraints = vec![Constraint::Ratio(1, visible.len() as u32); visible.len()];
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        for (panel, chunk) in visible.into_iter().zip(chunks.iter()) {
            panel.draw(f, *chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn panel() -> PanelHandle<MenuPanel> {
        let style = ButtonStyle::default();
        MenuPanel::new("Main Menu")
            .with_button("Start", MenuAction::Start, &style)
            .with_button("Exit", MenuAction::Exit, &style)
            .into_handle()
    }

    #[test]
    fn stage_draws_only_visible_panels_and_records_hit_areas() {
        let shown = panel();
        let hidden = MenuPanel::new("Hidden").into_handle();
        shown.borrow_mut().show();

        let stage = Stage {
            panels: vec![shown.clone(), hidden],
        };
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                stage.draw(f, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Main Menu"));
        assert!(text.contains("[Start]"));
        assert!(!text.contains("Hidden"));

        let p = shown.borrow();
        assert_eq!(p.button_at(0, 0), None);
        // first button row sits right under the top border
        let first = (0..40).find_map(|x| p.button_at(x, 1).map(|i| (x, i)));
        assert_eq!(first.map(|(_, i)| i), Some(0));
        assert!((0..40).any(|x| p.button_at(x, 3) == Some(1)));
    }

    #[test]
    fn hide_forgets_hit_areas() {
        let p = panel();
        p.borrow_mut().show();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                p.draw(f, area);
            })
            .unwrap();
        assert!((0..40).any(|x| p.borrow().button_at(x, 1).is_some()));

        p.borrow_mut().hide();
        assert!((0..40).all(|x| p.borrow().button_at(x, 1).is_none()));
    }

    #[test]
    fn find_by_action() {
        let p = panel();
        let mut p = p.borrow_mut();
        assert_eq!(
            p.find(MenuAction::Exit).map(|b| b.anim.label.clone()),
            Some("Exit".to_string())
        );
        assert!(p.find(MenuAction::Back).is_none());
    }
}
