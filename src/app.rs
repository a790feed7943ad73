//! src/app.rs
//!
//! Terminal menu app: owns the active controller, routes keyboard and mouse
//! input to its buttons, and runs the frame loop.
//!
//! # Controls
//!
//! - **↑/↓, Tab/Shift-Tab** — move the selection over the enabled buttons.
//! - **Enter/Space** — press the selected button.
//! - **Mouse** — hovering highlights a button, left click presses it.
//! - **Esc/Backspace** — go back one panel.
//! - **q** — quit.
//!
//! A press shows the button's pressed colour for `press_hold`, then releases
//! it and dispatches its action. Actions go to the current controller
//! ([`MainMenu`] on the title screen, [`GameMenu`] inside a chapter); a
//! `Command::Load` swaps controllers and `Command::Quit` ends the loop.

use std::io::{Write, stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction};

use crate::config::AppConfig;
use crate::menu::panel::Stage;
use crate::menu::{Command, Controller, GameMenu, MainMenu, MenuAction, MenuPanel, SceneId};
use crate::nav::PanelHandle;
use crate::panels::{HintPanel, HistoryPanel, StatusPanel, TitlePanel};
use crate::ui::{Node, group, leaf};

/// A button held down, waiting for its release.
struct PendingPress {
    panel: PanelHandle<MenuPanel>,
    button: usize,
    release_at: Instant,
}

pub struct App {
    config: AppConfig,
    scene: Box<dyn Controller>,

    /// Panel the focus/hover indices refer to.
    shown: Option<PanelHandle<MenuPanel>>,
    focus: Option<usize>,
    hovered: Option<usize>,
    pending: Option<PendingPress>,
    running: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let scene = Box::new(MainMenu::new(&config.button, config.recent_events));
        let mut app = Self {
            config,
            scene,
            shown: None,
            focus: None,
            hovered: None,
            pending: None,
            running: true,
        };
        app.refocus();
        app
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn controller(&self) -> &dyn Controller {
        self.scene.as_ref()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn current_panel(&self) -> Option<PanelHandle<MenuPanel>> {
        self.scene.current()
    }

    /// Reset focus when the visible panel changed since the last call.
    fn refocus(&mut self) {
        let current = self.current_panel();
        if current == self.shown {
            return;
        }
        if let Some(old) = &self.shown {
            for b in old.borrow_mut().buttons_mut() {
                b.anim.pointer_exit();
                b.anim.deselect();
            }
        }
        self.shown = current;
        self.hovered = None;
        self.focus = None;
        if let Some(panel) = &self.shown {
            let mut p = panel.borrow_mut();
            self.focus = p.buttons().iter().position(|b| b.anim.is_interactable());
            if let Some(b) = self.focus.and_then(|i| p.button_mut(i)) {
                b.anim.select();
            }
        }
    }

    /// Move the selection by `step`, skipping disabled buttons.
    fn move_focus(&mut self, step: isize) {
        let Some(panel) = self.shown.clone() else {
            return;
        };
        let mut p = panel.borrow_mut();
        let len = p.buttons().len() as isize;
        if len == 0 {
            return;
        }
        let start = self.focus.map(|i| i as isize).unwrap_or(-step.signum());
        let next = (1..=len)
            .map(|k| (start + step * k).rem_euclid(len) as usize)
            .find(|&i| p.buttons()[i].anim.is_interactable());
        let Some(next) = next else {
            return;
        };
        if let Some(b) = self.focus.and_then(|i| p.button_mut(i)) {
            b.anim.deselect();
        }
        if let Some(b) = p.button_mut(next) {
            b.anim.select();
        }
        self.focus = Some(next);
    }

    fn press(&mut self, button: usize, now: Instant) {
        if self.pending.is_some() {
            return;
        }
        let Some(panel) = self.shown.clone() else {
            return;
        };
        {
            let mut p = panel.borrow_mut();
            let Some(b) = p.button_mut(button) else {
                return;
            };
            if !b.anim.is_interactable() {
                tracing::debug!(label = %b.anim.label, "press on disabled button ignored");
                return;
            }
            b.anim.pointer_down();
        }
        self.pending = Some(PendingPress {
            panel,
            button,
            release_at: now + self.config.press_hold,
        });
    }

    fn set_hover(&mut self, hit: Option<usize>) {
        if hit == self.hovered {
            return;
        }
        let Some(panel) = self.shown.clone() else {
            return;
        };
        let mut p = panel.borrow_mut();
        if let Some(b) = self.hovered.and_then(|i| p.button_mut(i)) {
            b.anim.pointer_exit();
        }
        // the keyboard selection survives the mouse leaving it
        if let Some(focus) = self.focus.filter(|&f| Some(f) != hit) {
            if let Some(b) = p.button_mut(focus) {
                b.anim.select();
            }
        }
        if let Some(b) = hit.and_then(|i| p.button_mut(i)) {
            b.anim.pointer_enter();
        }
        self.hovered = hit;
    }

    fn dispatch(&mut self, action: MenuAction) {
        match self.scene.handle(action) {
            Command::Stay => {}
            Command::Quit => {
                tracing::info!("quit requested");
                self.running = false;
            }
            Command::Load(scene) => self.load(scene),
        }
        self.refocus();
    }

    fn load(&mut self, scene: SceneId) {
        tracing::info!(?scene, "loading scene");
        let cfg = &self.config;
        let next: Box<dyn Controller> = match scene {
            SceneId::MainMenu => Box::new(MainMenu::new(&cfg.button, cfg.recent_events)),
            SceneId::Chapter(n) => Box::new(GameMenu::new(n, &cfg.button, cfg.recent_events)),
        };
        self.scene = next;
        self.pending = None;
    }

    /// Advance button animations and release a due press.
    pub fn tick(&mut self, dt: Duration, now: Instant) {
        let secs = dt.as_secs_f32();
        for panel in self.scene.navigator().panels() {
            panel.borrow_mut().tick(secs);
        }

        let due = self.pending.as_ref().is_some_and(|p| now >= p.release_at);
        if !due {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };
        let action = {
            let mut p = pending.panel.borrow_mut();
            p.button_mut(pending.button).map(|b| {
                b.anim.pointer_up();
                b.action
            })
        };
        // a press only counts if its panel is still the one on screen
        if self.shown.as_ref() == Some(&pending.panel) {
            if let Some(action) = action {
                self.dispatch(action);
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('q') => {
                tracing::info!("quit key");
                self.running = false;
            }
            KeyCode::Up | KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Down | KeyCode::Tab => self.move_focus(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(i) = self.focus {
                    self.press(i, now);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => self.dispatch(MenuAction::Back),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16, now: Instant) {
        let hit = self
            .shown
            .as_ref()
            .and_then(|p| p.borrow().button_at(column, row));
        match kind {
            MouseEventKind::Moved => self.set_hover(hit),
            MouseEventKind::Down(MouseButton::Left) => {
                self.set_hover(hit);
                if let Some(i) = hit {
                    self.press(i, now);
                }
            }
            _ => {}
        }
    }

    /// Screen layout for the current frame.
    pub fn layout(&self) -> Node {
        let snapshot = self.scene.snapshot();
        let title = TitlePanel::new(self.scene.title()).with_subtitle(snapshot.current.clone());
        let stage = Stage {
            panels: self.scene.navigator().panels().to_vec(),
        };

        group(
            Direction::Vertical,
            vec![
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ],
            vec![
                leaf(title),
                group(
                    Direction::Horizontal,
                    vec![Constraint::Percentage(60), Constraint::Percentage(40)],
                    vec![
                        leaf(stage),
                        group(
                            Direction::Vertical,
                            vec![Constraint::Percentage(40), Constraint::Percentage(60)],
                            vec![
                                leaf(HistoryPanel::new(snapshot.trail.clone())),
                                leaf(StatusPanel::new(snapshot.clone())),
                            ],
                        ),
                    ],
                ),
                leaf(HintPanel::new(self.scene.back_visible())),
            ],
        )
    }
}

pub fn run(config: AppConfig) -> color_eyre::Result<()> {
    let mut terminal = ratatui::init();
    let result = with_mouse_capture(&mut stdout(), || {
        event_loop(&mut terminal, App::new(config))
    });
    ratatui::restore();
    result
}

/// Run `body` with mouse capture enabled on `out`.
///
/// `body` is skipped when capture cannot be enabled. Capture is disabled
/// again in every case; a failure there is logged rather than returned so the
/// caller still gets to restore the terminal.
fn with_mouse_capture<W: Write>(
    out: &mut W,
    body: impl FnOnce() -> color_eyre::Result<()>,
) -> color_eyre::Result<()> {
    let result = crossterm::execute!(out, EnableMouseCapture)
        .wrap_err("enabling mouse capture")
        .and_then(|()| body());
    if let Err(e) = crossterm::execute!(out, DisableMouseCapture) {
        tracing::warn!(error = %e, "disabling mouse capture failed");
    }
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    let frame_time = app.config.frame_time;
    let mut last = Instant::now();

    while app.is_running() {
        let frame_start = Instant::now();
        app.tick(frame_start - last, frame_start);
        last = frame_start;

        let root = app.layout();
        terminal.draw(|f| {
            let area = f.area();
            root.draw(f, area);
        })?;

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    app.handle_key(key.code, Instant::now())
                }
                Event::Mouse(m) => app.handle_mouse(m.kind, m.column, m.row, Instant::now()),
                _ => {}
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let config = AppConfig {
            press_hold: Duration::from_millis(100),
            ..AppConfig::default()
        };
        App::new(config)
    }

    fn current_title(app: &App) -> String {
        app.controller()
            .current()
            .map(|p| p.borrow().title().to_string())
            .unwrap_or_default()
    }

    /// Press the focused button and let the hold elapse.
    fn click(app: &mut App, now: Instant) -> Instant {
        app.handle_key(KeyCode::Enter, now);
        let later = now + Duration::from_millis(150);
        app.tick(Duration::from_millis(150), later);
        later
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let root = app.layout();
        terminal
            .draw(|f| {
                let area = f.area();
                root.draw(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn starts_with_first_button_selected() {
        let app = app();
        assert_eq!(current_title(&app), "Main Menu");
        assert_eq!(app.focus(), Some(0));
        let panel = app.controller().current().unwrap();
        let p = panel.borrow();
        assert_eq!(p.buttons()[0].anim.target_color(), p.buttons()[0].anim.style().selected);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = app();
        app.handle_key(KeyCode::Up, Instant::now());
        assert_eq!(app.focus(), Some(2));
        app.handle_key(KeyCode::Down, Instant::now());
        assert_eq!(app.focus(), Some(0));
        app.handle_key(KeyCode::Tab, Instant::now());
        assert_eq!(app.focus(), Some(1));
    }

    #[test]
    fn press_fires_after_hold() {
        let mut app = app();
        let now = Instant::now();
        app.handle_key(KeyCode::Down, now);
        app.handle_key(KeyCode::Enter, now);

        // still held
        app.tick(Duration::from_millis(10), now + Duration::from_millis(10));
        assert_eq!(current_title(&app), "Main Menu");

        app.tick(Duration::from_millis(150), now + Duration::from_millis(150));
        assert_eq!(current_title(&app), "Settings");
        assert_eq!(app.focus(), Some(0));
    }

    #[test]
    fn escape_goes_back_and_root_escape_is_harmless() {
        let mut app = app();
        click(&mut app, Instant::now());
        assert_eq!(current_title(&app), "Chapters");

        app.handle_key(KeyCode::Esc, Instant::now());
        assert_eq!(current_title(&app), "Main Menu");
        app.handle_key(KeyCode::Esc, Instant::now());
        assert_eq!(current_title(&app), "Main Menu");
        assert!(app.is_running());
    }

    #[test]
    fn chapter_loads_game_and_main_menu_returns() {
        let mut app = app();
        let t = click(&mut app, Instant::now()); // Start
        let t = click(&mut app, t); // Chapter 1
        assert_eq!(app.controller().title(), "Chapter 1");
        assert_eq!(current_title(&app), "Chapter 1");

        let t = click(&mut app, t); // Menu
        assert_eq!(current_title(&app), "Paused");
        app.handle_key(KeyCode::Down, t);
        click(&mut app, t); // Main Menu
        assert_eq!(app.controller().title(), "Main Menu");
        assert_eq!(app.controller().navigator().depth(), 1);
    }

    #[test]
    fn exit_button_and_q_stop_the_loop() {
        let mut app = app();
        app.handle_key(KeyCode::Up, Instant::now());
        click(&mut app, Instant::now());
        assert!(!app.is_running());

        let mut app = self::app();
        app.handle_key(KeyCode::Char('q'), Instant::now());
        assert!(!app.is_running());
    }

    #[test]
    fn mouse_hover_and_click() {
        let mut app = app();
        render(&app);

        let panel = app.controller().current().unwrap();
        let (col, row) = (0..100u16)
            .flat_map(|x| (0..30u16).map(move |y| (x, y)))
            .find(|&(x, y)| panel.borrow().button_at(x, y) == Some(1))
            .unwrap();

        let now = Instant::now();
        app.handle_mouse(MouseEventKind::Moved, col, row, now);
        assert_eq!(app.hovered(), Some(1));
        {
            let p = panel.borrow();
            assert_eq!(p.buttons()[1].anim.target_color(), p.buttons()[1].anim.style().hover);
        }

        app.handle_mouse(MouseEventKind::Moved, 0, 0, now);
        assert_eq!(app.hovered(), None);

        app.handle_mouse(MouseEventKind::Down(MouseButton::Left), col, row, now);
        app.tick(Duration::from_millis(150), now + Duration::from_millis(150));
        assert_eq!(current_title(&app), "Settings");
    }

    #[test]
    fn layout_renders_menu_history_and_hints() {
        let mut app = app();
        let text = render(&app);
        assert!(text.contains("Main Menu"));
        assert!(text.contains("[Start]") || text.contains("Start"));
        assert!(!text.contains("Esc=Back"));

        click(&mut app, Instant::now());
        let text = render(&app);
        assert!(text.contains("Chapters"));
        assert!(text.contains("Esc=Back"));
        assert!(text.contains("History"));
    }

    /// Writer whose every write fails, like a terminal that went away.
    struct Unwritable;

    impl Write for Unwritable {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_mouse_capture_skips_the_loop() {
        let mut ran = false;
        let result = with_mouse_capture(&mut Unwritable, || {
            ran = true;
            Ok(())
        });
        assert!(result.is_err());
        assert!(!ran);
    }

    #[test]
    fn mouse_capture_is_released_even_when_the_loop_fails() {
        let mut out: Vec<u8> = Vec::new();
        let result = with_mouse_capture(&mut out, || Err(color_eyre::eyre::eyre!("loop failed")));
        assert!(result.is_err());

        let written = String::from_utf8_lossy(&out);
        let enabled = written.find("?1000h").expect("capture enabled");
        let disabled = written.find("?1000l").expect("capture disabled");
        assert!(enabled < disabled);
    }

    #[test]
    fn hud_button_regains_focus_after_pause() {
        let mut app = app();
        let t = click(&mut app, Instant::now());
        let t = click(&mut app, t);
        let t = click(&mut app, t); // pause
        // back to the HUD; its only button is enabled again and focused
        app.handle_key(KeyCode::Esc, t);
        assert_eq!(current_title(&app), "Chapter 1");
        assert_eq!(app.focus(), Some(0));
    }
}
