//! src/menu/main_menu.rs
//!
//! Title-screen controller: main menu, chapter select and settings.
//!
//! Start opens the chapter list, Settings opens the settings panel, Back (or
//! Esc) returns along the navigation history and Exit quits. Picking a chapter
//! asks the app to load that chapter's scene.

use super::action::{Command, MenuAction, SceneId};
use super::panel::{MenuButton, MenuPanel};
use super::{Controller, MenuNavigator, menu_navigator};
use crate::nav::PanelHandle;
use crate::ui::{ButtonStyle, Rgb};

pub const CHAPTERS: u8 = 3;

/// Alternate palettes cycled from the settings panel: (normal, hover, pressed).
const THEMES: [(&str, Rgb, Rgb, Rgb); 2] = [
    (
        "Classic",
        Rgb::new(0.8, 0.8, 0.8),
        Rgb::new(0.35, 0.6, 1.0),
        Rgb::new(0.9, 0.2, 0.2),
    ),
    (
        "Ember",
        Rgb::new(0.95, 0.75, 0.45),
        Rgb::new(1.0, 0.5, 0.1),
        Rgb::new(0.7, 0.1, 0.0),
    ),
];

pub struct MainMenu {
    navigator: MenuNavigator,
    main: PanelHandle<MenuPanel>,
    chapters: PanelHandle<MenuPanel>,
    settings: PanelHandle<MenuPanel>,
    theme: usize,
}

impl MainMenu {
    pub fn new(style: &ButtonStyle, recent_events: usize) -> Self {
        let main = MenuPanel::new("Main Menu")
            .with_button("Start", MenuAction::Start, style)
            .with_button("Settings", MenuAction::Settings, style)
            .with_button("Exit", MenuAction::Exit, style)
            .into_handle();

        let mut chapters = MenuPanel::new("Chapters").with_body("Choose where to begin.");
        for n in 1..=CHAPTERS {
            chapters = chapters.with_button(&format!("Chapter {n}"), MenuAction::Chapter(n), style);
        }
        let chapters = chapters.with_button("Back", MenuAction::Back, style).into_handle();

        let settings = MenuPanel::new("Settings")
            .with_button(&smooth_label(style.smooth), MenuAction::ToggleSmooth, style)
            .with_button(&scale_label(style.scale_on_hover), MenuAction::ToggleHoverScale, style)
            .with_button(&theme_label(0), MenuAction::CycleTheme, style)
            .with_button("Back", MenuAction::Back, style)
            .into_handle();

        let navigator = menu_navigator(
            &[main.clone(), chapters.clone(), settings.clone()],
            recent_events,
        );
        let mut menu = Self {
            navigator,
            main,
            chapters,
            settings,
            theme: 0,
        };
        menu.navigator.show_panel(Some(&menu.main));
        menu
    }

    pub fn main_panel(&self) -> &PanelHandle<MenuPanel> {
        &self.main
    }

    pub fn chapters_panel(&self) -> &PanelHandle<MenuPanel> {
        &self.chapters
    }

    pub fn settings_panel(&self) -> &PanelHandle<MenuPanel> {
        &self.settings
    }

    fn toggle_smooth(&mut self) {
        let smooth = !self.first_style().smooth;
        self.for_each_button(|b| b.anim.set_smooth(smooth));
        self.relabel(MenuAction::ToggleSmooth, smooth_label(smooth));
        tracing::info!(smooth, "button transitions");
    }

    fn toggle_hover_scale(&mut self) {
        let enabled = !self.first_style().scale_on_hover;
        self.for_each_button(|b| b.anim.set_scale_on_hover(enabled));
        self.relabel(MenuAction::ToggleHoverScale, scale_label(enabled));
        tracing::info!(enabled, "hover scale");
    }

    fn cycle_theme(&mut self) {
        self.theme = (self.theme + 1) % THEMES.len();
        let (name, normal, hover, pressed) = THEMES[self.theme];
        self.for_each_button(|b| b.anim.change_colors(normal, hover, pressed));
        self.relabel(MenuAction::CycleTheme, theme_label(self.theme));
        tracing::info!(theme = name, "theme changed");
    }

    fn first_style(&self) -> ButtonStyle {
        self.settings
            .borrow()
            .buttons()
            .first()
            .map(|b| b.anim.style().clone())
            .unwrap_or_default()
    }

    fn for_each_button(&self, mut f: impl FnMut(&mut MenuButton)) {
        for panel in self.navigator.panels() {
            for b in panel.borrow_mut().buttons_mut() {
                f(b);
            }
        }
    }

    fn relabel(&self, action: MenuAction, label: String) {
        if let Some(b) = self.settings.borrow_mut().find(action) {
            b.anim.label = label;
        }
    }
}

fn smooth_label(on: bool) -> String {
    format!("Smooth transitions: {}", if on { "on" } else { "off" })
}

fn scale_label(on: bool) -> String {
    format!("Hover scale: {}", if on { "on" } else { "off" })
}

fn theme_label(idx: usize) -> String {
    format!("Theme: {}", THEMES[idx].0)
}

impl Controller for MainMenu {
    fn title(&self) -> &str {
        "Main Menu"
    }

    fn navigator(&self) -> &MenuNavigator {
        &self.navigator
    }

    fn handle(&mut self, action: MenuAction) -> Command {
        tracing::debug!(?action, "main menu action");
        match action {
            MenuAction::Start => {
                self.navigator.show_panel(Some(&self.chapters));
            }
            MenuAction::Settings => {
                self.navigator.show_panel(Some(&self.settings));
            }
            MenuAction::Back => {
                self.navigator.go_back();
            }
            MenuAction::Exit => return Command::Quit,
            MenuAction::Chapter(n) => return Command::Load(SceneId::Chapter(n)),
            MenuAction::ToggleSmooth => self.toggle_smooth(),
            MenuAction::ToggleHoverScale => self.toggle_hover_scale(),
            MenuAction::CycleTheme => self.cycle_theme(),
            MenuAction::OpenMenu | MenuAction::ToMainMenu => {
                tracing::warn!(?action, "not available on the title screen");
            }
        }
        Command::Stay
    }
}
