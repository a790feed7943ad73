//! src/nav/events.rs
//!
//! Diagnostics emitted by the navigator and the observers that consume them.
//!
//! The navigator never logs on its own; every show/back/no-op is handed to a
//! [`NavObserver`]. `TracingObserver` turns them into `tracing` events,
//! `EventLog` keeps a bounded journal for display, `()` discards.

use std::collections::VecDeque;
use std::fmt;

use tracing::Level;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// A panel was shown and pushed.
    Shown { panel: String, depth: usize },
    /// The requested panel is already on top; nothing changed.
    AlreadyCurrent { panel: String },
    /// `show_panel` was called without a panel.
    MissingPanel,
    /// The panel is not part of the navigator's known set.
    UnknownPanel { panel: String },
    /// Popped `from`, revealing `to`.
    WentBack {
        from: String,
        to: String,
        depth: usize,
    },
    /// Back was requested at the root.
    AtRoot { depth: usize },
}

impl NavEvent {
    pub fn level(&self) -> Level {
        match self {
            NavEvent::MissingPanel | NavEvent::UnknownPanel { .. } | NavEvent::AtRoot { .. } => {
                Level::WARN
            }
            _ => Level::INFO,
        }
    }

    /// Stable short name, recorded as the `kind` field of trace events.
    pub fn kind(&self) -> &'static str {
        match self {
            NavEvent::Shown { .. } => "shown",
            NavEvent::AlreadyCurrent { .. } => "already_current",
            NavEvent::MissingPanel => "missing_panel",
            NavEvent::UnknownPanel { .. } => "unknown_panel",
            NavEvent::WentBack { .. } => "went_back",
            NavEvent::AtRoot { .. } => "at_root",
        }
    }
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::Shown { panel, depth } => write!(f, "show {panel} (depth {depth})"),
            NavEvent::AlreadyCurrent { panel } => write!(f, "{panel} already active, skipped"),
            NavEvent::MissingPanel => f.write_str("show called without a panel"),
            NavEvent::UnknownPanel { panel } => write!(f, "{panel} is not a known panel"),
            NavEvent::WentBack { from, to, depth } => {
                write!(f, "back {from} -> {to} (depth {depth})")
            }
            NavEvent::AtRoot { depth } => write!(f, "at root (depth {depth}), cannot go back"),
        }
    }
}

/// Sink for navigator diagnostics.
pub trait NavObserver {
    fn record(&mut self, event: &NavEvent);
}

impl NavObserver for () {
    fn record(&mut self, _event: &NavEvent) {}
}

/// Forward to both observers, left first.
impl<A: NavObserver, B: NavObserver> NavObserver for (A, B) {
    fn record(&mut self, event: &NavEvent) {
        self.0.record(event);
        self.1.record(event);
    }
}

/// Emits each event as a structured `tracing` record under the `nav` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl NavObserver for TracingObserver {
    fn record(&mut self, event: &NavEvent) {
        let kind = event.kind();
        if event.level() == Level::WARN {
            tracing::warn!(target: "nav", kind, "{event}");
        } else {
            tracing::info!(target: "nav", kind, "{event}");
        }
    }
}

/// Bounded journal of the most recent events (oldest at front).
#[derive(Debug)]
pub struct EventLog {
    events: VecDeque<NavEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn events(&self) -> impl DoubleEndedIterator<Item = &NavEvent> {
        self.events.iter()
    }

    pub fn last(&self) -> Option<&NavEvent> {
        self.events.back()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl NavObserver for EventLog {
    fn record(&mut self, event: &NavEvent) {
        if self.capacity == 0 {
            return;
        }
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
    }
}
