//! Signal-backed router outlet
//!
//! The core mounts content by writing a signal; the `RouterOutlet`
//! component renders whatever the signal holds. Leptos flushes the change
//! on its own schedule, which is why link refreshes are deferred.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use tracing::trace;
use vanilla_core::{Content, Outlet};

/// A constructed page view.
#[derive(Clone)]
pub struct Page(Arc<dyn Fn() -> AnyView + Send + Sync>);

impl Page {
    pub fn new<F, V>(render: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self(Arc::new(move || render().into_any()))
    }

    pub fn render(&self) -> AnyView {
        (self.0)()
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Page(..)")
    }
}

/// What the outlet currently shows.
#[derive(Debug, Clone)]
pub enum OutletView {
    Markup(String),
    Page(Page),
}

impl From<Content<Page>> for OutletView {
    fn from(content: Content<Page>) -> Self {
        match content {
            Content::Markup(markup) => Self::Markup(markup),
            Content::Node(page) => Self::Page(page),
        }
    }
}

/// Outlet writing into a reactive signal.
#[derive(Debug, Clone, Copy)]
pub struct SignalOutlet {
    view: RwSignal<Option<OutletView>>,
}

impl Default for SignalOutlet {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalOutlet {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(None),
        }
    }

    pub const fn signal(&self) -> RwSignal<Option<OutletView>> {
        self.view
    }
}

impl Outlet for SignalOutlet {
    type Node = Page;

    fn mount(&self, content: Content<Page>) {
        trace!("outlet content replaced");
        self.view.set(Some(content.into()));
    }

    fn set_document_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Renders the outlet signal into `<main id="router-outlet">`.
#[component]
pub fn RouterOutlet(content: RwSignal<Option<OutletView>>) -> impl IntoView {
    view! {
        <main id="router-outlet" class="flex-grow">
            {move || match content.get() {
                Some(OutletView::Markup(markup)) => {
                    view! { <div inner_html=markup></div> }.into_any()
                }
                Some(OutletView::Page(page)) => page.render(),
                None => ().into_any(),
            }}
        </main>
    }
}
