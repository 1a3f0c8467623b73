//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{AdminTheme, UserInterface};

/// Terminal UI implementation.
///
/// Messages go to standard output; errors to standard error.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: AdminTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(color: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: AdminTheme::for_color(color),
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
