//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::AdminTheme;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Verbs receive it when run.
pub trait UserInterface {
    /// Display a message to the user on standard output.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
