//! Global error handling for repo2md
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for repo2md operations
#[derive(Error, Debug)]
pub enum Repo2MdError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory listing errors that are not recovered locally
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// A file recorded for content emission no longer resolves to a language
    #[error("Internal consistency violation: {0}")]
    Consistency(String),
}

/// Specialized Result type for repo2md operations
pub type Result<T> = std::result::Result<T, Repo2MdError>;

/// Creates a Repo2MdError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::Repo2MdError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(n > 0, Config, "expected a positive value, got {}", n);
        Ok(n)
    }

    #[test]
    fn ensure_macro_builds_formatted_variant() {
        assert_eq!(check_positive(3).unwrap(), 3);

        let err = check_positive(-1).unwrap_err();
        assert!(matches!(err, Repo2MdError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: expected a positive value, got -1"
        );
    }
}
