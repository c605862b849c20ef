//! Application bootstrap
//!
//! Wires the browser adapters into the shell context, mounts the layout,
//! installs the page-lifetime listeners, and renders the initial location.

use std::rc::Rc;

use leptos::prelude::*;
use tracing::{error, info, warn};
use vanilla_core::{error_panel_markup, AppConfig, AppContext, Platform};
use web_sys::{Document, Window};

use crate::browser::{
    install_click_listener, install_color_scheme_listener, install_popstate_listener,
    local_or_memory, BrowserHistory, BrowserSpawner, DocumentRoot, DomLinks, MediaQueryScheme,
    Page, SignalOutlet,
};
use crate::components::Layout;
use crate::config::{ConfigSource, CONFIG_ELEMENT_ID};
use crate::error::{Result, UiError};
use crate::router::build_routes;
use crate::state::{bridge, run_commands, sync, UiHandle};
use crate::{config, logging};

fn browser_globals() -> Result<(Window, Document)> {
    let window =
        web_sys::window().ok_or_else(|| UiError::BrowserUnavailable("window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| UiError::BrowserUnavailable("document".to_string()))?;
    Ok((window, document))
}

/// Start the shell.
///
/// # Errors
/// Returns an error if a browser global is missing, the inline config is
/// malformed, or a listener cannot be attached.
pub fn bootstrap() -> Result<Rc<AppContext<Page>>> {
    let (window, document) = browser_globals()?;
    let (config, source) = config::load(Some(&document))?;
    logging::init(&config);
    if source == ConfigSource::Defaults {
        warn!(id = CONFIG_ELEMENT_ID, "no inline config; using defaults");
    }

    let (ui, commands) = UiHandle::channel();
    let outlet = SignalOutlet::new();
    let content = outlet.signal();
    let app_name = config.app_name.clone();
    mount_to_body(move || view! { <Layout ui=ui content=content app_name=app_name /> });

    let scheme = Rc::new(MediaQueryScheme::new(&window));
    let scheme_query = scheme.query().cloned();
    let platform = Platform {
        history: Rc::new(BrowserHistory::new(window.clone())),
        outlet: Rc::new(outlet),
        links: Rc::new(DomLinks::new(
            document.clone(),
            config.active_link_selector(),
            config.link_styles.clone(),
        )),
        storage: local_or_memory(&window),
        color_scheme: scheme,
        root: Rc::new(DocumentRoot::new(&window)?),
        spawner: Rc::new(BrowserSpawner),
    };

    let ctx = Rc::new(AppContext::new(config, platform, |stores, config| {
        build_routes(stores, config, ui)
    }));
    bridge(&ctx, ui.signals);

    install_click_listener(&document, Rc::clone(&ctx))?;
    install_popstate_listener(&window, Rc::clone(&ctx))?;
    if let Some(query) = &scheme_query {
        install_color_scheme_listener(query, Rc::clone(&ctx))?;
    }

    let initial = ctx.start();
    sync(&ctx, ui.signals);
    info!(
        path = %ctx.router().current_path(),
        route = initial.as_ref().map(|change| change.title.as_str()),
        "application ready"
    );

    wasm_bindgen_futures::spawn_local(run_commands(Rc::clone(&ctx), commands));
    Ok(ctx)
}

/// Bootstrap, replacing the page with the error panel on failure.
pub fn run() {
    if let Err(e) = bootstrap() {
        logging::init(&AppConfig::default());
        error!(error = %e, "failed to initialize application");
        let markup = error_panel_markup(&e.to_string());
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            body.set_inner_html(&markup);
        }
    }
}
