//! src/menu/action.rs
//!
//! What a menu button does, and what the app should do afterwards.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Settings,
    Exit,
    Back,
    Chapter(u8),
    OpenMenu,
    ToMainMenu,
    ToggleSmooth,
    ToggleHoverScale,
    CycleTheme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneId {
    MainMenu,
    Chapter(u8),
}

/// Follow-up requested by a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Stay,
    Quit,
    Load(SceneId),
}
