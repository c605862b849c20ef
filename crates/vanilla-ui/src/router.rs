//! Route table for the Vanilla UI
//!
//! Maps each path to its page component. The Blog route is deferred: it
//! fetches posts before its page is mounted. Leaving the route abandons
//! the fetch, and a fetch superseded by a newer one writes nothing.

use std::future::Future;

use leptos::prelude::*;
use vanilla_core::{paths, AppConfig, Content, Post, RenderResult, Route, RouteTable, Stores};

use crate::api::fetch_posts;
use crate::browser::Page;
use crate::error::Result;
use crate::pages::{About, Blog, Dashboard, Home, Login, NotFound, Register};
use crate::state::UiHandle;

/// Titles in table order; the last belongs to the wildcard.
pub const ROUTE_TITLES: [&str; 7] = [
    "Home",
    "About",
    "Blog",
    "Sign In",
    "Create Account",
    "Dashboard",
    "Not Found",
];

fn page<F, V>(render: F) -> RenderResult<Page>
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    RenderResult::node(Page::new(render))
}

/// Build the application's routes.
pub fn build_routes(stores: &Stores, config: &AppConfig, ui: UiHandle) -> RouteTable<Page> {
    build_routes_with(stores, config, ui, |url| async move { fetch_posts(&url).await })
}

/// Build the routes with `fetch` answering the posts request for a URL.
pub fn build_routes_with<F, Fut>(
    stores: &Stores,
    config: &AppConfig,
    ui: UiHandle,
    fetch: F,
) -> RouteTable<Page>
where
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<Post>>> + 'static,
{
    let posts = stores.posts.clone();
    let leaving = stores.posts.clone();
    let posts_url = config.posts_url();

    let blog = Route::new(paths::BLOG, ROUTE_TITLES[2], move |_| {
        let posts = posts.clone();
        let request = fetch(posts_url.clone());
        let signal = ui.signals.posts;
        let ticket = posts.begin_loading();
        RenderResult::deferred(async move {
            posts.finish(ticket, request.await.map_err(|e| e.to_string()));
            Content::Node(Page::new(move || view! { <Blog posts=signal /> }))
        })
    })
    .on_leave(move || leaving.abandon());

    RouteTable::builder()
        .route(paths::HOME, ROUTE_TITLES[0], move |_| page(move || view! { <Home ui=ui /> }))
        .route(paths::ABOUT, ROUTE_TITLES[1], |_| page(|| view! { <About /> }))
        .add(blog)
        .route(paths::LOGIN, ROUTE_TITLES[3], move |_| page(move || view! { <Login ui=ui /> }))
        .route(paths::REGISTER, ROUTE_TITLES[4], move |_| page(move || view! { <Register ui=ui /> }))
        .route(paths::DASHBOARD, ROUTE_TITLES[5], move |_| page(move || view! { <Dashboard ui=ui /> }))
        .wildcard(ROUTE_TITLES[6], |ctx| {
            let path = ctx.path.clone();
            page(move || view! { <NotFound path=path.clone() /> })
        })
        .build()
}
