//! Navigation controller.
//!
//! Owns the current route. The location is written only through
//! [`Router::navigate`]; popstate and link activations funnel into
//! [`Router::handle_route_change`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::events::{AppEvent, EventBus};
use crate::matcher::match_index;
use crate::platform::History;
use crate::render::{RenderOutcome, ViewRenderer};
use crate::result::ResultExt;
use crate::routes::{Route, RouteContext, RouteTable};

/// Result of a successful route evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    pub path: String,
    /// Index of the selected route in the table.
    pub index: usize,
    pub title: String,
    pub outcome: RenderOutcome,
}

/// A click on an anchor, reduced to what the interception rules need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkActivation {
    /// The anchor carries the in-app routing marker.
    pub routed: bool,
    /// Raw `href` attribute.
    pub href: Option<String>,
    /// Mouse button; `0` is the primary button.
    pub button: i16,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
}

impl LinkActivation {
    /// Plain primary-button click on a routed link to `href`.
    pub fn routed(href: impl Into<String>) -> Self {
        Self {
            routed: true,
            href: Some(href.into()),
            ..Self::default()
        }
    }

    const fn has_modifier(&self) -> bool {
        self.ctrl_key || self.meta_key || self.shift_key || self.alt_key
    }

    /// In-app target path if this activation should be intercepted.
    pub fn intercepted_path(&self) -> Option<&str> {
        if !self.routed || self.button != 0 || self.has_modifier() {
            return None;
        }
        let href = self.href.as_deref()?.trim();
        if href.is_empty() || href.starts_with('#') || is_external(href) {
            return None;
        }
        Some(href)
    }
}

/// Protocol-relative, or starting with a URL scheme (`https:`, `mailto:`,
/// `tel:` ...). A `://` later in the query or fragment does not count.
fn is_external(href: &str) -> bool {
    href.starts_with("//") || has_scheme(href)
}

fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Client-side router over a static route table.
pub struct Router<N: 'static> {
    table: RouteTable<N>,
    current: Cell<Option<usize>>,
    history: Rc<dyn History>,
    renderer: ViewRenderer<N>,
    bus: EventBus,
}

impl<N: 'static> fmt::Debug for Router<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("current", &self.current.get())
            .finish_non_exhaustive()
    }
}

impl<N: 'static> Router<N> {
    pub fn new(
        table: RouteTable<N>,
        history: Rc<dyn History>,
        renderer: ViewRenderer<N>,
        bus: EventBus,
    ) -> Self {
        Self {
            table,
            current: Cell::new(None),
            history,
            renderer,
            bus,
        }
    }

    pub const fn table(&self) -> &RouteTable<N> {
        &self.table
    }

    pub const fn renderer(&self) -> &ViewRenderer<N> {
        &self.renderer
    }

    /// Location as reported by history.
    pub fn current_path(&self) -> String {
        self.history.current_path()
    }

    pub fn current_route(&self) -> Option<&Route<N>> {
        self.current.get().and_then(|index| self.table.get(index))
    }

    pub fn current_route_title(&self) -> Option<&str> {
        self.current_route().map(Route::title)
    }

    /// Push `path` and evaluate it.
    ///
    /// A rejected push is logged; evaluation still runs against whatever the
    /// location now is.
    pub fn navigate(&self, path: &str) -> Option<RouteChange> {
        let _ = self
            .history
            .push(path)
            .inspect_error(|e| warn!(error = %e, path, "history push failed"));
        self.handle_route_change()
    }

    /// Back/forward: evaluate the location without pushing.
    pub fn handle_popstate(&self) -> Option<RouteChange> {
        debug!("popstate");
        self.handle_route_change()
    }

    /// Intercept `activation` if it targets an in-app path.
    ///
    /// Returns `true` when the caller must prevent default navigation.
    pub fn handle_link_activation(&self, activation: &LinkActivation) -> bool {
        match activation.intercepted_path() {
            Some(path) => {
                self.navigate(path);
                true
            }
            None => false,
        }
    }

    /// Match the location and render the selected route.
    ///
    /// With no exact match and no wildcard, nothing changes and `None` is
    /// returned.
    pub fn handle_route_change(&self) -> Option<RouteChange> {
        let path = self.history.current_path();
        let Some(index) = match_index(&self.table, &path) else {
            debug!(path = %path, "no route matched, view unchanged");
            return None;
        };
        let route = self.table.get(index)?;

        if let Some(previous) = self.current_route() {
            previous.leave();
        }
        self.current.set(Some(index));
        route.enter();

        self.bus.publish(&AppEvent::RouteChanged { path: path.clone() });

        let ctx = RouteContext {
            path: path.clone(),
            title: route.title().to_string(),
        };
        let outcome = self.renderer.render(route, &ctx);
        info!(path = %path, route = %route.pattern(), generation = outcome.generation(), "route changed");

        Some(RouteChange {
            path,
            index,
            title: ctx.title,
            outcome,
        })
    }
}
