//! Typed event bus.
//!
//! Replaces ad-hoc DOM custom events (`route-changed`, `theme-changed`)
//! with a registry keyed by [`EventKind`]. Listeners live for the whole
//! application; there is no unsubscribe.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::store::User;
use crate::theme::{ResolvedTheme, ThemeMode};

/// Events published by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A route was selected for `path`, before its view is rendered.
    RouteChanged { path: String },
    /// Theme mode changed through `set_theme` or `toggle_theme`.
    ThemeChanged {
        mode: ThemeMode,
        resolved: ResolvedTheme,
    },
    /// Session user logged in (`Some`) or out (`None`).
    SessionChanged { user: Option<User> },
}

/// Discriminant of [`AppEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    RouteChanged,
    ThemeChanged,
    SessionChanged,
}

impl AppEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::RouteChanged { .. } => EventKind::RouteChanged,
            Self::ThemeChanged { .. } => EventKind::ThemeChanged,
            Self::SessionChanged { .. } => EventKind::SessionChanged,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteChanged => write!(f, "route-changed"),
            Self::ThemeChanged => write!(f, "theme-changed"),
            Self::SessionChanged => write!(f, "session-changed"),
        }
    }
}

type Listener = Rc<dyn Fn(&AppEvent)>;

/// Cloneable handle to a shared listener registry.
#[derive(Clone, Default)]
pub struct EventBus {
    listeners: Rc<RefCell<HashMap<EventKind, Vec<Listener>>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.borrow();
        f.debug_struct("EventBus")
            .field("kinds", &listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of `kind`.
    pub fn subscribe(&self, kind: EventKind, listener: impl Fn(&AppEvent) + 'static) {
        self.listeners
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(listener));
    }

    /// Deliver `event` to its listeners in subscription order.
    ///
    /// The listener list is snapshotted first, so listeners may publish or
    /// subscribe without re-entrancy failures.
    pub fn publish(&self, event: &AppEvent) {
        let kind = event.kind();
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .get(&kind)
            .cloned()
            .unwrap_or_default();
        trace!(event = %kind, listeners = snapshot.len(), "publishing event");
        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of listeners for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.borrow().get(&kind).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn given_listener_when_matching_event_published_then_delivered() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bus.subscribe(EventKind::RouteChanged, move |event| {
            if let AppEvent::RouteChanged { path } = event {
                sink.borrow_mut().push(path.clone());
            }
        });

        bus.publish(&AppEvent::RouteChanged {
            path: "/about".to_string(),
        });

        assert_eq!(*seen.borrow(), vec!["/about".to_string()]);
    }

    #[test]
    fn given_listener_when_other_kind_published_then_not_delivered() {
        let bus = EventBus::new();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        bus.subscribe(EventKind::ThemeChanged, move |_| *sink.borrow_mut() += 1);

        bus.publish(&AppEvent::RouteChanged {
            path: "/".to_string(),
        });

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn given_listener_that_publishes_when_event_published_then_no_reentrancy_failure() {
        let bus = EventBus::new();
        let inner = bus.clone();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&hits);
        bus.subscribe(EventKind::RouteChanged, move |_| {
            inner.publish(&AppEvent::SessionChanged { user: None });
        });
        bus.subscribe(EventKind::SessionChanged, move |event| {
            sink.borrow_mut().push(event.kind());
        });

        bus.publish(&AppEvent::RouteChanged {
            path: "/".to_string(),
        });

        assert_eq!(*hits.borrow(), vec![EventKind::SessionChanged]);
    }

    #[test]
    fn given_kinds_when_displayed_then_dom_event_names() {
        assert_eq!(EventKind::RouteChanged.to_string(), "route-changed");
        assert_eq!(EventKind::ThemeChanged.to_string(), "theme-changed");
        assert_eq!(EventKind::SessionChanged.to_string(), "session-changed");
    }
}
