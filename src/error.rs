//! Error types for management commands.
//!
//! This module defines [`AdminError`], the error type a verb returns from
//! its run operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Dispatch misses and usage-parse failures are recovered inside the
//!   dispatcher and never become an `AdminError`
//! - Anything a verb returns as `Err` is fatal to the process
//! - Use `anyhow::Error` (via `AdminError::Other`) for verb-internal errors

use thiserror::Error;

/// Core error type for management operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A verb ran and reported failure.
    #[error("Command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for management operations.
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_message() {
        let err = AdminError::CommandFailed {
            command: "add".into(),
            message: "server unreachable".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("add"));
        assert!(msg.contains("server unreachable"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AdminError = io_err.into();
        assert!(matches!(err, AdminError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: AdminError = anyhow::anyhow!("plugin bundle is corrupt").into();
        assert_eq!(err.to_string(), "plugin bundle is corrupt");
    }
}
