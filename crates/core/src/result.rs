//! Result type definition and the logging combinators used where the shell
//! degrades instead of failing (storage, history).

use crate::error::Error;

/// The standard Result type for shell operations.
///
/// # Examples
///
/// ```ignore
/// let session = storage.get("auth_user").or_default_logged(None);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait providing logged fallbacks for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error at warn level.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or a default, logging the error at warn level.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "operation failed, continuing without result");
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "operation failed, using default");
                default
            }
        }
    }

    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_into_option_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.into_option_logged(), Some(42));
    }

    #[test]
    fn test_result_into_option_err() {
        let result: Result<i32> = Err(Error::storage_unavailable("disabled"));
        assert_eq!(result.into_option_logged(), None);
    }

    #[test]
    fn test_result_or_default_logged_err() {
        let result: Result<i32> = Err(Error::storage_unavailable("disabled"));
        assert_eq!(result.or_default_logged(99), 99);
    }

    #[test]
    fn test_result_inspect_error() {
        let result: Result<i32> = Err(Error::InvalidTheme("x".into()));
        let mut called = false;
        let _ = result.inspect_error(|_| {
            called = true;
        });
        assert!(called);
    }
}
