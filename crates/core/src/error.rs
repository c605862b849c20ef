//! Core error types for the Vanilla shell.
//!
//! All errors are explicit and recoverable. Storage and theme failures are
//! expected to degrade to in-memory defaults at the call site rather than
//! abort the application.

use thiserror::Error;

/// Core error type for shell operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Storage errors
    #[error("storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("failed to read storage key '{key}': {reason}")]
    StorageReadFailed { key: String, reason: String },

    #[error("failed to write storage key '{key}': {reason}")]
    StorageWriteFailed { key: String, reason: String },

    // Navigation errors
    #[error("history push to '{path}' failed: {reason}")]
    HistoryPushFailed { path: String, reason: String },

    // Theme errors
    #[error("unknown theme '{0}' (expected light, dark or system)")]
    InvalidTheme(String),

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Startup errors
    #[error("initialization failed: {reason}")]
    InitializationFailed { reason: String },
}

impl Error {
    /// Create a storage unavailable error.
    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a storage read error.
    pub fn storage_read_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StorageReadFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage write error.
    pub fn storage_write_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StorageWriteFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a history push error.
    pub fn history_push_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::HistoryPushFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an initialization error.
    pub fn initialization_failed(reason: impl Into<String>) -> Self {
        Self::InitializationFailed {
            reason: reason.into(),
        }
    }

    /// Whether the error came from the key-value storage layer.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { .. }
                | Self::StorageReadFailed { .. }
                | Self::StorageWriteFailed { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json_parse_failed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = Error::storage_write_failed("theme", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "failed to write storage key 'theme': quota exceeded"
        );
        assert!(err.is_storage());
    }

    #[test]
    fn test_invalid_theme_display() {
        let err = Error::InvalidTheme("sepia".to_string());
        assert!(err.to_string().contains("sepia"));
        assert!(!err.is_storage());
    }

    #[test]
    fn test_json_error_conversion() {
        let parsed: std::result::Result<u32, serde_json::Error> = serde_json::from_str("{");
        let err: Error = match parsed {
            Ok(_) => Error::json_parse_failed("unexpected success"),
            Err(e) => e.into(),
        };
        assert!(matches!(err, Error::JsonParseFailed { .. }));
    }
}
