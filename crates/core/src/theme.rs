//! Theme manager: light / dark / system with persisted mode.
//!
//! The persisted value is always the mode, `"system"` included, so reloading
//! keeps following the environment preference instead of freezing whatever
//! it resolved to last time.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::events::{AppEvent, EventBus};
use crate::platform::{ColorSchemeSource, KeyValueStorage, ThemeRoot};
use crate::result::{Result, ResultExt};

/// User-selected theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete theme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Toggle order: dark → light → system → dark.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::System,
            Self::System => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Icon shown on the theme toggle.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
            Self::System => "🖥️",
        }
    }

    /// Label for the toggle's tooltip.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Concrete theme given the environment preference.
    #[must_use]
    pub const fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System if prefers_dark => ResolvedTheme::Dark,
            Self::System => ResolvedTheme::Light,
        }
    }
}

impl ResolvedTheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The class that must be removed when this theme is applied.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(Error::InvalidTheme(other.to_string())),
        }
    }
}

/// Owns the theme mode, its persistence and its presentation.
pub struct ThemeManager {
    mode: Cell<ThemeMode>,
    storage: Rc<dyn KeyValueStorage>,
    scheme: Rc<dyn ColorSchemeSource>,
    root: Rc<dyn ThemeRoot>,
    bus: EventBus,
    storage_key: String,
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("mode", &self.mode.get())
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl ThemeManager {
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        scheme: Rc<dyn ColorSchemeSource>,
        root: Rc<dyn ThemeRoot>,
        bus: EventBus,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            mode: Cell::new(ThemeMode::System),
            storage,
            scheme,
            root,
            bus,
            storage_key: storage_key.into(),
        }
    }

    /// Load the persisted mode and apply it.
    ///
    /// An absent value selects `System` and persists `"system"`. Unreadable
    /// storage or an unknown value selects `System` without failing.
    pub fn init(&self) -> ThemeMode {
        let mode = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw.parse::<ThemeMode>().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored theme");
                ThemeMode::System
            }),
            Ok(None) => {
                self.persist(ThemeMode::System);
                ThemeMode::System
            }
            Err(e) => {
                warn!(error = %e, "theme storage unreadable, following system preference");
                ThemeMode::System
            }
        };
        self.mode.set(mode);
        self.apply();
        info!(mode = %mode, resolved = %self.resolved(), "theme initialized");
        mode
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Theme currently applied to the document.
    pub fn resolved(&self) -> ResolvedTheme {
        self.mode.get().resolve(self.scheme.prefers_dark())
    }

    /// Set, persist, apply and announce `mode`.
    pub fn set_theme(&self, mode: ThemeMode) {
        self.mode.set(mode);
        self.persist(mode);
        self.apply();
        debug!(mode = %mode, "theme changed");
        self.bus.publish(&AppEvent::ThemeChanged {
            mode,
            resolved: self.resolved(),
        });
    }

    /// [`Self::set_theme`] from a mode name.
    ///
    /// # Errors
    /// Returns `Error::InvalidTheme` for unknown names; state is unchanged.
    pub fn set_theme_named(&self, name: &str) -> Result<()> {
        let mode = name.parse::<ThemeMode>()?;
        self.set_theme(mode);
        Ok(())
    }

    /// Cycle dark → light → system → dark.
    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.mode.get().next();
        self.set_theme(next);
        next
    }

    /// The environment preference changed; re-apply when following it.
    pub fn handle_system_change(&self) {
        if self.mode.get() == ThemeMode::System {
            self.apply();
            debug!(resolved = %self.resolved(), "system colour scheme changed");
        }
    }

    fn apply(&self) {
        self.root.apply_theme(self.resolved());
    }

    fn persist(&self, mode: ThemeMode) {
        let _ = self
            .storage
            .set(&self.storage_key, mode.as_str())
            .into_option_logged();
    }
}
