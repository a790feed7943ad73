//! src/menu/game_menu.rs
//!
//! In-game controller: the chapter HUD and its pause menu.

use super::action::{Command, MenuAction, SceneId};
use super::panel::MenuPanel;
use super::{Controller, MenuNavigator, menu_navigator};
use crate::nav::PanelHandle;
use crate::ui::ButtonStyle;

pub struct GameMenu {
    title: String,
    navigator: MenuNavigator,
    hud: PanelHandle<MenuPanel>,
    pause: PanelHandle<MenuPanel>,
}

impl GameMenu {
    pub fn new(chapter: u8, style: &ButtonStyle, recent_events: usize) -> Self {
        let title = format!("Chapter {chapter}");
        let hud = MenuPanel::new(&title)
            .with_body("The level plays here. Open the menu to pause.")
            .with_button("Menu", MenuAction::OpenMenu, style)
            .into_handle();
        let pause = MenuPanel::new("Paused")
            .with_button("Back", MenuAction::Back, style)
            .with_button("Main Menu", MenuAction::ToMainMenu, style)
            .into_handle();

        let navigator = menu_navigator(&[hud.clone(), pause.clone()], recent_events);
        let mut game = Self {
            title,
            navigator,
            hud,
            pause,
        };
        game.navigator.show_panel(Some(&game.hud));
        game.sync_menu_button();
        game
    }

    pub fn hud_panel(&self) -> &PanelHandle<MenuPanel> {
        &self.hud
    }

    pub fn pause_panel(&self) -> &PanelHandle<MenuPanel> {
        &self.pause
    }

    /// The menu button only works while the HUD itself is on top.
    fn sync_menu_button(&self) {
        let on_hud = self.navigator.current() == Some(&self.hud);
        if let Some(b) = self.hud.borrow_mut().find(MenuAction::OpenMenu) {
            b.anim.set_interactable(on_hud);
        }
    }
}

impl Controller for GameMenu {
    fn title(&self) -> &str {
        &self.title
    }

    fn navigator(&self) -> &MenuNavigator {
        &self.navigator
    }

    fn handle(&mut self, action: MenuAction) -> Command {
        tracing::debug!(?action, "game menu action");
        let command = match action {
            MenuAction::OpenMenu => {
                self.navigator.show_panel(Some(&self.pause));
                Command::Stay
            }
            MenuAction::Back => {
                self.navigator.go_back();
                Command::Stay
            }
            MenuAction::ToMainMenu => Command::Load(SceneId::MainMenu),
            other => {
                tracing::warn!(action = ?other, "not available in game");
                Command::Stay
            }
        };
        self.sync_menu_button();
        command
    }
}
