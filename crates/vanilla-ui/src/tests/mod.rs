//! Behavioral tests for the browser shell
//!
//! Given-when-then named tests that run natively: the shell context is
//! wired with the in-memory platform from `vanilla_core::headless`, so only
//! code that never touches `web-sys` is exercised here.

#![allow(clippy::expect_used)]

pub mod api_behaviors;
pub mod config_behaviors;
pub mod logging_behaviors;
pub mod state_behaviors;

use std::rc::Rc;

use futures::executor::LocalPool;
use vanilla_core::headless::{
    FixedColorScheme, MemoryHistory, MemoryLinks, MemoryStorage, PoolSpawner, RecordingOutlet,
    RecordingRoot,
};
use vanilla_core::{AppConfig, AppContext, Platform, RouteTable, Stores};

use crate::browser::Page;
use crate::router::build_routes;
use crate::state::{bridge, UiHandle};

/// A shell context on in-memory adapters, bridged to fresh signals.
pub struct Harness {
    pub ctx: AppContext<Page>,
    pub ui: UiHandle,
    pub history: Rc<MemoryHistory>,
    pub outlet: Rc<RecordingOutlet<Page>>,
    pub pool: LocalPool,
}

impl Harness {
    pub fn at(path: &str) -> Self {
        Self::with_routes(path, build_routes)
    }

    /// A harness whose route table comes from `routes`.
    pub fn with_routes<F>(path: &str, routes: F) -> Self
    where
        F: FnOnce(&Stores, &AppConfig, UiHandle) -> RouteTable<Page>,
    {
        let pool = LocalPool::new();
        let config = AppConfig::default();
        let history = Rc::new(MemoryHistory::new(path));
        let outlet = Rc::new(RecordingOutlet::<Page>::new());
        let platform = Platform {
            history: history.clone(),
            outlet: outlet.clone(),
            links: Rc::new(MemoryLinks::new(config.link_styles.clone())),
            storage: Rc::new(MemoryStorage::new()),
            color_scheme: Rc::new(FixedColorScheme::new(false)),
            root: Rc::new(RecordingRoot::default()),
            spawner: Rc::new(PoolSpawner::new(pool.spawner())),
        };
        let (ui, _commands) = UiHandle::channel();
        let ctx = AppContext::new(config, platform, |stores, config| routes(stores, config, ui));
        bridge(&ctx, ui.signals);
        Self {
            ctx,
            ui,
            history,
            outlet,
            pool,
        }
    }
}
