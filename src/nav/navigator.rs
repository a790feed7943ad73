//! src/nav/navigator.rs
//!
//! History stack over a fixed set of panels.
//!
//! Invariants kept by every operation:
//! - once a panel has been shown the history is never empty again;
//! - the top of the history is the only visible panel of the known set;
//! - no two consecutive history entries are the same panel.
//!
//! Nothing here fails hard. A missing panel, an unknown panel, a redundant
//! show and a back at the root are reported to the observer and otherwise
//! ignored, so a live menu can never be brought down by navigation.

use super::events::{NavEvent, NavObserver, TracingObserver};
use super::handle::{Displayable, PanelHandle};

/// What `show_panel` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowOutcome {
    /// Pushed; `depth` is the new history depth.
    Shown { depth: usize },
    /// Already on top, nothing changed.
    AlreadyCurrent,
    /// No panel supplied.
    Missing,
    /// Panel is outside the known set and was rejected.
    Unknown,
}

pub struct PanelNavigator<D, O = TracingObserver> {
    history: Vec<PanelHandle<D>>,
    panels: Box<[PanelHandle<D>]>,
    observer: O,
}

impl<D: Displayable> PanelNavigator<D> {
    /// Navigator over `panels` that reports through `tracing`.
    pub fn new(panels: impl IntoIterator<Item = PanelHandle<D>>) -> Self {
        Self::with_observer(panels, TracingObserver)
    }
}

impl<D: Displayable, O: NavObserver> PanelNavigator<D, O> {
    /// The known set is fixed here for the navigator's lifetime. Panel
    /// visibility is left untouched until the first show.
    pub fn with_observer(panels: impl IntoIterator<Item = PanelHandle<D>>, observer: O) -> Self {
        Self {
            history: Vec::new(),
            panels: panels.into_iter().collect(),
            observer,
        }
    }

    /// Hide every known panel, show `panel` and push it.
    pub fn show_panel(&mut self, panel: Option<&PanelHandle<D>>) -> ShowOutcome {
        let Some(panel) = panel else {
            self.observer.record(&NavEvent::MissingPanel);
            return ShowOutcome::Missing;
        };

        if self.current() == Some(panel) {
            self.observer.record(&NavEvent::AlreadyCurrent {
                panel: panel.name(),
            });
            return ShowOutcome::AlreadyCurrent;
        }

        // an unknown panel would never be hidden again by later shows
        if !self.is_known(panel) {
            self.observer.record(&NavEvent::UnknownPanel {
                panel: panel.name(),
            });
            return ShowOutcome::Unknown;
        }

        for p in self.panels.iter() {
            p.borrow_mut().hide();
        }
        panel.borrow_mut().show();
        self.history.push(panel.clone());

        let depth = self.history.len();
        self.observer.record(&NavEvent::Shown {
            panel: panel.name(),
            depth,
        });
        ShowOutcome::Shown { depth }
    }

    /// Pop the current panel and reveal the one below it.
    ///
    /// Returns the revealed panel, or `None` when already at the root (or
    /// nothing has been shown yet).
    pub fn go_back(&mut self) -> Option<PanelHandle<D>> {
        if !self.can_go_back() {
            self.observer.record(&NavEvent::AtRoot {
                depth: self.history.len(),
            });
            return None;
        }

        let popped = self.history.pop()?;
        popped.borrow_mut().hide();
        let previous = self.history.last()?.clone();
        previous.borrow_mut().show();

        self.observer.record(&NavEvent::WentBack {
            from: popped.name(),
            to: previous.name(),
            depth: self.history.len(),
        });
        Some(previous)
    }

    pub fn current(&self) -> Option<&PanelHandle<D>> {
        self.history.last()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// History from root to top.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &PanelHandle<D>> {
        self.history.iter()
    }

    pub fn panels(&self) -> &[PanelHandle<D>] {
        &self.panels
    }

    pub fn is_known(&self, panel: &PanelHandle<D>) -> bool {
        self.panels.iter().any(|p| p == panel)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}
