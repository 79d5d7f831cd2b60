//! Error types for the newsdeck core.
//!
//! The pager itself is total over the five-section domain; neighbor
//! absence is `Option`, never an error. What remains error-worthy is
//! startup configuration (pane setup, theme files).

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use toml::de::Error as ThemeParseError;

/// Errors that can occur while setting up the strip.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The presentation layer did not yield one distinct pane per
    /// section. Fatal at startup; the pager refuses to run with a
    /// partially populated strip.
    #[error("pane setup mismatch: expected {expected} distinct panes, got {actual}")]
    PaneSetup { expected: usize, actual: usize },

    /// A theme file could not be parsed.
    #[error("invalid theme at {path:?}: {source}")]
    Theme {
        path: PathBuf,
        source: ThemeParseError,
    },

    /// Underlying IO error bubbled up from filesystem operations.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_setup_display() {
        let err = CoreError::PaneSetup {
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "pane setup mismatch: expected 5 distinct panes, got 4"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::other("boom");
        let err: CoreError = io_err.into();
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
