//! View renderer.
//!
//! Mounts a route's output into the outlet. Deferred output is tagged with
//! the navigation generation it was started under and is discarded if
//! another render began before it resolved.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use tracing::debug;

use crate::platform::{LinkSurface, Outlet, Spawner};
use crate::routes::{Route, RouteContext};

/// Output of a view action once available.
pub enum Content<N> {
    /// Raw markup, set as the outlet's inner HTML.
    Markup(String),
    /// A single constructed view.
    Node(N),
}

impl<N> fmt::Debug for Content<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            Self::Node(_) => f.write_str("Node(..)"),
        }
    }
}

/// What a view action returns.
pub enum RenderResult<N> {
    /// Output available now; mounted synchronously.
    Immediate(Content<N>),
    /// Output produced later on the event loop.
    Deferred(LocalBoxFuture<'static, Content<N>>),
}

impl<N> RenderResult<N> {
    pub fn markup(markup: impl Into<String>) -> Self {
        Self::Immediate(Content::Markup(markup.into()))
    }

    pub fn node(node: N) -> Self {
        Self::Immediate(Content::Node(node))
    }

    pub fn deferred<F>(producer: F) -> Self
    where
        F: Future<Output = Content<N>> + 'static,
    {
        Self::Deferred(producer.boxed_local())
    }

    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<N> fmt::Debug for RenderResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(content) => f.debug_tuple("Immediate").field(content).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// How a render request was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Content was mounted before `render` returned.
    Mounted { generation: u64 },
    /// A producer was spawned; it mounts only if still current.
    Pending { generation: u64 },
}

impl RenderOutcome {
    #[must_use]
    pub const fn generation(self) -> u64 {
        match self {
            Self::Mounted { generation } | Self::Pending { generation } => generation,
        }
    }
}

/// Mounts route output into the outlet and refreshes active links.
pub struct ViewRenderer<N: 'static> {
    outlet: Rc<dyn Outlet<Node = N>>,
    links: Rc<dyn LinkSurface>,
    spawner: Rc<dyn Spawner>,
    generation: Rc<Cell<u64>>,
    app_name: String,
}

impl<N: 'static> ViewRenderer<N> {
    pub fn new(
        outlet: Rc<dyn Outlet<Node = N>>,
        links: Rc<dyn LinkSurface>,
        spawner: Rc<dyn Spawner>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            outlet,
            links,
            spawner,
            generation: Rc::new(Cell::new(0)),
            app_name: app_name.into(),
        }
    }

    /// Generation of the most recent render request.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Document title for a route title.
    pub fn document_title(&self, title: &str) -> String {
        format!("{title} | {}", self.app_name)
    }

    /// Render `route` for `ctx`.
    pub fn render(&self, route: &Route<N>, ctx: &RouteContext) -> RenderOutcome {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        self.outlet
            .set_document_title(&self.document_title(route.title()));

        match route.render(ctx) {
            RenderResult::Immediate(content) => {
                commit(self.outlet.as_ref(), self.links.as_ref(), content, &ctx.path);
                debug!(path = %ctx.path, generation, "mounted view");
                RenderOutcome::Mounted { generation }
            }
            RenderResult::Deferred(producer) => {
                let outlet = Rc::clone(&self.outlet);
                let links = Rc::clone(&self.links);
                let current = Rc::clone(&self.generation);
                let path = ctx.path.clone();
                self.spawner.spawn_local(
                    async move {
                        let content = producer.await;
                        if current.get() != generation {
                            debug!(
                                path = %path,
                                generation,
                                latest = current.get(),
                                "discarding stale deferred render"
                            );
                            return;
                        }
                        commit(outlet.as_ref(), links.as_ref(), content, &path);
                        debug!(path = %path, generation, "mounted deferred view");
                    }
                    .boxed_local(),
                );
                RenderOutcome::Pending { generation }
            }
        }
    }

    /// Replace the outlet with the generic error panel.
    pub fn render_error(&self, message: &str) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.outlet
            .set_document_title(&self.document_title("Application Error"));
        self.outlet
            .mount(Content::Markup(error_panel_markup(message)));
    }
}

fn commit<N>(outlet: &dyn Outlet<Node = N>, links: &dyn LinkSurface, content: Content<N>, path: &str) {
    outlet.mount(content);
    links.refresh_active(path);
}

/// Generic "Application Error" panel showing `message`.
pub fn error_panel_markup(message: &str) -> String {
    format!(
        concat!(
            r#"<div class="p-4 bg-red-100 text-red-700 rounded-md" role="alert">"#,
            r#"<h2 class="text-lg font-semibold">Application Error</h2>"#,
            r#"<p class="mt-2">{}</p>"#,
            "</div>"
        ),
        escape_html(message)
    )
}

/// Escape text for inclusion in markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
