//! Application configuration.
//!
//! Every field has a default so a partial JSON document (or none at all)
//! yields a usable configuration.

use serde::Deserialize;

use crate::error::Error;
use crate::links::LinkStyles;
use crate::result::Result;

/// Shell configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Suffix appended to every document title.
    pub app_name: String,
    /// Attribute marking an anchor as handled by the in-app router.
    pub router_marker: String,
    /// Attribute marking the theme toggle button.
    pub theme_toggle_marker: String,
    /// Local storage key holding the theme mode.
    pub theme_storage_key: String,
    /// Local storage key holding the serialized session user.
    pub user_storage_key: String,
    /// Base URL of the posts API.
    pub api_base_url: String,
    /// Maximum log level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
    /// Selector of the containers whose routed links show active state.
    /// Routed links elsewhere keep their own classes.
    pub active_link_scope: String,
    /// Classes toggled by the active-link updater.
    pub link_styles: LinkStyles,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Vanilla App".to_string(),
            router_marker: "data-router".to_string(),
            theme_toggle_marker: "data-theme-toggle".to_string(),
            theme_storage_key: "theme".to_string(),
            user_storage_key: "user".to_string(),
            api_base_url: "http://localhost:5000/api".to_string(),
            log_level: "info".to_string(),
            active_link_scope: "nav".to_string(),
            link_styles: LinkStyles::default(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON configuration document.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if the document is not valid JSON or
    /// a field has the wrong type, or if a marker attribute is empty.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|e| Error::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()
    }

    /// Override the posts API base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Max level as a `tracing` level, falling back to `INFO`.
    #[must_use]
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse::<tracing::Level>()
            .unwrap_or(tracing::Level::INFO)
    }

    /// CSS selector matching every routed link.
    #[must_use]
    pub fn routed_link_selector(&self) -> String {
        format!("a[{}]", self.router_marker)
    }

    /// CSS selector matching the routed links that receive active state.
    ///
    /// An empty scope selects every routed link.
    #[must_use]
    pub fn active_link_selector(&self) -> String {
        let scope = self.active_link_scope.trim();
        if scope.is_empty() {
            self.routed_link_selector()
        } else {
            format!("{scope} {}", self.routed_link_selector())
        }
    }

    /// CSS selector matching the theme toggle.
    #[must_use]
    pub fn theme_toggle_selector(&self) -> String {
        format!("[{}]", self.theme_toggle_marker)
    }

    /// Posts endpoint derived from the base URL.
    #[must_use]
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.api_base_url.trim_end_matches('/'))
    }

    fn validate(self) -> Result<Self> {
        if self.router_marker.trim().is_empty() {
            return Err(Error::InvalidConfig {
                reason: "router_marker must not be empty".to_string(),
            });
        }
        if self.theme_toggle_marker.trim().is_empty() {
            return Err(Error::InvalidConfig {
                reason: "theme_toggle_marker must not be empty".to_string(),
            });
        }
        Ok(self)
    }
}
