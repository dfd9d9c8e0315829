//! Error types for archive assembly operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ZipError`.
pub type Result<T> = std::result::Result<T, ZipError>;

/// Errors that can occur while assembling a ZIP archive.
#[derive(Error, Debug)]
pub enum ZipError {
    /// The operation is missing required settings or carries invalid ones.
    #[error("invalid configuration: {reason}")]
    Configuration {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// An explicitly named source file does not exist.
    #[error("named source file not found: {path}")]
    FileNotFound {
        /// The configured path.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A raw pattern string is not a valid regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    PatternCompile {
        /// The raw pattern text.
        pattern: String,
        /// Underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

impl ZipError {
    /// Returns `true` if the error stems from what the caller configured
    /// rather than from the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipwright_core::ZipError;
    /// use std::path::PathBuf;
    ///
    /// let err = ZipError::FileNotFound {
    ///     path: PathBuf::from("missing.txt"),
    /// };
    /// assert!(err.is_user_error());
    ///
    /// let err = ZipError::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::FileNotFound { .. } | Self::PatternCompile { .. }
        )
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
