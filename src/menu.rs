//! src/menu.rs
//!
//! Menu panels and the controllers that drive a [`PanelNavigator`] from
//! button activations.

pub mod action;
pub mod game_menu;
pub mod main_menu;
pub mod panel;

pub use action::{Command, MenuAction, SceneId};
pub use game_menu::GameMenu;
pub use main_menu::MainMenu;
pub use panel::{MenuButton, MenuPanel};

use crate::nav::{EventLog, PanelHandle, PanelNavigator, TracingObserver};

/// Navigator used by menu controllers: traced and journaled.
pub type MenuNavigator = PanelNavigator<MenuPanel, (TracingObserver, EventLog)>;

pub fn menu_navigator(panels: &[PanelHandle<MenuPanel>], recent_events: usize) -> MenuNavigator {
    PanelNavigator::with_observer(
        panels.iter().cloned(),
        (TracingObserver, EventLog::with_capacity(recent_events)),
    )
}

/// A screen-level owner of panels and their navigation.
pub trait Controller {
    fn title(&self) -> &str;
    fn navigator(&self) -> &MenuNavigator;
    fn handle(&mut self, action: MenuAction) -> Command;

    /// The back control is only offered off the root panel.
    fn back_visible(&self) -> bool {
        self.navigator().can_go_back()
    }

    fn current(&self) -> Option<PanelHandle<MenuPanel>> {
        self.navigator().current().cloned()
    }

    fn snapshot(&self) -> NavSnapshot {
        NavSnapshot::of(self.navigator())
    }
}

/// Owned view of navigation state for the display panels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavSnapshot {
    pub current: Option<String>,
    pub depth: usize,
    pub can_go_back: bool,
    /// Root first.
    pub trail: Vec<String>,
    /// Oldest first.
    pub recent: Vec<String>,
}

impl NavSnapshot {
    pub fn of(nav: &MenuNavigator) -> Self {
        Self {
            current: nav.current().map(PanelHandle::name),
            depth: nav.depth(),
            can_go_back: nav.can_go_back(),
            trail: nav.history().map(PanelHandle::name).collect(),
            recent: nav.observer().1.events().map(ToString::to_string).collect(),
        }
    }
}
