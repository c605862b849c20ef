//! Router, theme manager and observable stores for the Vanilla shell.
//!
//! This crate holds everything that does not touch a browser API:
//!
//! - **Routing**: static route table, exact/wildcard matcher, navigation
//!   controller with enter/leave hooks
//! - **Rendering**: immediate or deferred view output, stale results dropped
//! - **Active links**: class and `aria-current` bookkeeping for routed links
//! - **Theme**: light/dark/system with persisted mode
//! - **Stores**: counter, session and posts state with listeners
//!
//! Host environments plug in through the traits in [`platform`]. The
//! [`headless`] module implements them in memory.
//!
//! # Example
//!
//! ```ignore
//! use vanilla_core::{AppConfig, AppContext, RenderResult, RouteTable};
//!
//! let ctx = AppContext::new(AppConfig::default(), platform, |_, _| {
//!     RouteTable::builder()
//!         .route("/", "Home", |_| RenderResult::markup("<h1>Home</h1>"))
//!         .wildcard("Not Found", |_| RenderResult::markup("<h1>404</h1>"))
//!         .build()
//! });
//! ctx.start();
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod forms;
pub mod headless;
pub mod links;
pub mod matcher;
pub mod navigation;
pub mod platform;
pub mod render;
pub mod result;
pub mod routes;
pub mod store;
pub mod theme;

// Re-export main types
pub use config::AppConfig;
pub use context::{AppCommand, AppContext, Platform, Stores};
pub use error::Error;
pub use events::{AppEvent, EventBus, EventKind};
pub use forms::{Field, FieldErrors, RegistrationForm};
pub use links::{active_link_classes, class_names, is_link_active, update_active_links, LinkStyles};
pub use matcher::{match_index, match_route};
pub use navigation::{LinkActivation, RouteChange, Router};
pub use platform::{
    ColorSchemeSource, History, KeyValueStorage, LinkSurface, Outlet, RoutedLink, Spawner,
    ThemeRoot,
};
pub use render::{error_panel_markup, escape_html, Content, RenderOutcome, RenderResult, ViewRenderer};
pub use result::{Result, ResultExt};
pub use routes::{paths, Route, RouteContext, RoutePattern, RouteTable, RouteTableBuilder, WILDCARD};
pub use store::{
    AuthState, AuthStore, CounterStore, FetchTicket, Post, PostsState, PostsStore, Store,
    SubscriptionId, User,
};
pub use theme::{ResolvedTheme, ThemeManager, ThemeMode};
