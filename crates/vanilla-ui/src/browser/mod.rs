//! `web-sys` implementations of the shell's platform seams
//!
//! Everything in here touches browser globals and only runs on
//! `wasm32-unknown-unknown`.

pub mod history;
pub mod links;
pub mod listeners;
pub mod outlet;
pub mod spawner;
pub mod storage;
pub mod theme;

pub use history::BrowserHistory;
pub use links::{DomLink, DomLinks};
pub use listeners::{install_click_listener, install_color_scheme_listener, install_popstate_listener};
pub use outlet::{OutletView, Page, RouterOutlet, SignalOutlet};
pub use spawner::BrowserSpawner;
pub use storage::{local_or_memory, BrowserStorage};
pub use theme::{DocumentRoot, MediaQueryScheme, DARK_SCHEME_QUERY};
