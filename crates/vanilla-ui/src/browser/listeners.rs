//! Page-lifetime DOM listeners
//!
//! Each listener is installed once during bootstrap and its closure is
//! leaked; the page never tears the shell down.

use std::rc::Rc;

use tracing::debug;
use vanilla_core::{AppContext, LinkActivation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, MediaQueryList, MouseEvent, Window};

use super::outlet::Page;
use crate::error::{Result, UiError};

type Shell = Rc<AppContext<Page>>;

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| UiError::listener_failed(event, &e))?;
    callback.forget();
    debug!(event, "listener installed");
    Ok(())
}

/// Delegated click handling for routed links and the theme toggle.
///
/// # Errors
/// Returns `UiError::ListenerFailed` if the listener cannot be attached.
pub fn install_click_listener(document: &Document, ctx: Shell) -> Result<()> {
    let link_selector = ctx.config().routed_link_selector();
    let toggle_selector = ctx.config().theme_toggle_selector();
    listen(document, "click", move |event| {
        if event.default_prevented() {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        if let Some(anchor) = target.closest(&link_selector).ok().flatten() {
            let activation = link_activation(&event, &anchor);
            if ctx.router().handle_link_activation(&activation) {
                event.prevent_default();
            }
            return;
        }

        if target.closest(&toggle_selector).ok().flatten().is_some() {
            event.prevent_default();
            ctx.theme().toggle_theme();
        }
    })
}

/// Back/forward navigation.
///
/// # Errors
/// Returns `UiError::ListenerFailed` if the listener cannot be attached.
pub fn install_popstate_listener(window: &Window, ctx: Shell) -> Result<()> {
    listen(window, "popstate", move |_| {
        ctx.router().handle_popstate();
    })
}

/// System colour-scheme changes.
///
/// # Errors
/// Returns `UiError::ListenerFailed` if the listener cannot be attached.
pub fn install_color_scheme_listener(query: &MediaQueryList, ctx: Shell) -> Result<()> {
    listen(query, "change", move |_| {
        ctx.theme().handle_system_change();
    })
}

fn link_activation(event: &Event, anchor: &Element) -> LinkActivation {
    let mouse = event.dyn_ref::<MouseEvent>();
    LinkActivation {
        routed: true,
        href: anchor.get_attribute("href"),
        button: mouse.map_or(0, MouseEvent::button),
        ctrl_key: mouse.is_some_and(MouseEvent::ctrl_key),
        meta_key: mouse.is_some_and(MouseEvent::meta_key),
        shift_key: mouse.is_some_and(MouseEvent::shift_key),
        alt_key: mouse.is_some_and(MouseEvent::alt_key),
    }
}
