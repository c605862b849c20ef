//! Application context: the single owner of router, theme and stores.
//!
//! Built once at startup and shared by reference; there are no global
//! singletons.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::events::EventBus;
use crate::navigation::{RouteChange, Router};
use crate::platform::{
    ColorSchemeSource, History, KeyValueStorage, LinkSurface, Outlet, Spawner, ThemeRoot,
};
use crate::render::ViewRenderer;
use crate::routes::{paths, RouteTable};
use crate::store::{AuthStore, CounterStore, PostsStore, User};
use crate::theme::{ThemeManager, ThemeMode};

/// Host implementations of every platform seam.
pub struct Platform<N: 'static> {
    pub history: Rc<dyn History>,
    pub outlet: Rc<dyn Outlet<Node = N>>,
    pub links: Rc<dyn LinkSurface>,
    pub storage: Rc<dyn KeyValueStorage>,
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    pub root: Rc<dyn ThemeRoot>,
    pub spawner: Rc<dyn Spawner>,
}

impl<N: 'static> fmt::Debug for Platform<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").finish_non_exhaustive()
    }
}

/// Stores shared between the context and the views.
#[derive(Debug, Clone)]
pub struct Stores {
    pub counter: CounterStore,
    pub auth: AuthStore,
    pub posts: PostsStore,
}

/// Side effects requested by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(String),
    ToggleTheme,
    SetTheme(ThemeMode),
    Increment,
    Decrement,
    ResetCounter,
    /// Start a session and go to the dashboard.
    Login(User),
    /// End the session and go to the sign-in page.
    Logout,
}

pub struct AppContext<N: 'static> {
    config: AppConfig,
    bus: EventBus,
    router: Router<N>,
    theme: ThemeManager,
    stores: Stores,
}

impl<N: 'static> fmt::Debug for AppContext<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("router", &self.router)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl<N: 'static> AppContext<N> {
    /// Wire the shell together. `routes` builds the route table once the
    /// stores exist so views can capture them.
    pub fn new<F>(config: AppConfig, platform: Platform<N>, routes: F) -> Self
    where
        F: FnOnce(&Stores, &AppConfig) -> RouteTable<N>,
    {
        let bus = EventBus::new();
        let stores = Stores {
            counter: CounterStore::new(),
            auth: AuthStore::new(
                Rc::clone(&platform.storage),
                bus.clone(),
                config.user_storage_key.clone(),
            ),
            posts: PostsStore::new(),
        };
        let theme = ThemeManager::new(
            Rc::clone(&platform.storage),
            platform.color_scheme,
            platform.root,
            bus.clone(),
            config.theme_storage_key.clone(),
        );
        let renderer = ViewRenderer::new(
            platform.outlet,
            platform.links,
            platform.spawner,
            config.app_name.clone(),
        );
        let table = routes(&stores, &config);
        debug!(routes = table.len(), wildcard = table.has_wildcard(), "route table built");
        let router = Router::new(table, platform.history, renderer, bus.clone());

        Self {
            config,
            bus,
            router,
            theme,
            stores,
        }
    }

    /// Apply the stored theme, restore the session and render the initial
    /// location.
    pub fn start(&self) -> Option<RouteChange> {
        let mode = self.theme.init();
        let restored = self.stores.auth.check_auth();
        info!(theme = %mode, session = restored, "shell started");
        self.router.handle_route_change()
    }

    /// Perform a view-layer command.
    pub fn dispatch(&self, command: AppCommand) {
        debug!(?command, "dispatch");
        match command {
            AppCommand::Navigate(path) => {
                self.router.navigate(&path);
            }
            AppCommand::ToggleTheme => {
                self.theme.toggle_theme();
            }
            AppCommand::SetTheme(mode) => self.theme.set_theme(mode),
            AppCommand::Increment => {
                self.stores.counter.increment();
            }
            AppCommand::Decrement => {
                self.stores.counter.decrement();
            }
            AppCommand::ResetCounter => self.stores.counter.reset(),
            AppCommand::Login(user) => {
                self.stores.auth.login(user);
                self.router.navigate(paths::DASHBOARD);
            }
            AppCommand::Logout => {
                self.stores.auth.logout();
                self.router.navigate(paths::LOGIN);
            }
        }
    }

    /// Replace the outlet with the Application Error panel.
    pub fn show_error(&self, error: &dyn std::error::Error) {
        tracing::error!(error = %error, "showing application error");
        self.router.renderer().render_error(&error.to_string());
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub const fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub const fn router(&self) -> &Router<N> {
        &self.router
    }

    pub const fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub const fn stores(&self) -> &Stores {
        &self.stores
    }
}
