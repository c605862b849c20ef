//! Runtime configuration for the browser shell
//!
//! The page may embed `<script id="app-config" type="application/json">`
//! with partial [`AppConfig`] overrides. A `VANILLA_API_URL` set at build
//! time wins over both the document and the defaults.

use vanilla_core::AppConfig;

use crate::error::Result;

/// Id of the inline configuration element.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Build-time API base override.
pub const API_URL_OVERRIDE: Option<&str> = option_env!("VANILLA_API_URL");

/// Where the loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// The inline `app-config` element.
    Inline,
    /// No usable element; defaults apply.
    Defaults,
}

fn inline_document(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|raw| !raw.is_empty())
}

/// Classify the inline element's text.
pub fn source_of(raw: Option<&str>) -> ConfigSource {
    if inline_document(raw).is_some() {
        ConfigSource::Inline
    } else {
        ConfigSource::Defaults
    }
}

/// Merge the inline document (if any) and the build-time override.
///
/// # Errors
/// Returns the core configuration error when `raw` is present but invalid.
pub fn resolve(raw: Option<&str>, api_override: Option<&str>) -> Result<AppConfig> {
    let config = match inline_document(raw) {
        Some(raw) => AppConfig::from_json(raw)?,
        None => AppConfig::default(),
    };
    Ok(match api_override.filter(|url| !url.is_empty()) {
        Some(url) => config.with_api_base_url(url),
        None => config,
    })
}

/// Read configuration from the current document.
///
/// Nothing is logged here; the caller reports the source once a
/// subscriber is installed.
///
/// # Errors
/// Returns the core configuration error for a malformed inline document.
pub fn load(document: Option<&web_sys::Document>) -> Result<(AppConfig, ConfigSource)> {
    let raw = document
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    let config = resolve(raw.as_deref(), API_URL_OVERRIDE)?;
    Ok((config, source_of(raw.as_deref())))
}
