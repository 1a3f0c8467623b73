//! Visual theme and styling.

use console::Style;

/// Styles used by the management front-ends.
#[derive(Debug, Clone)]
pub struct AdminTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for AdminTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(color: bool) -> Self {
        if color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}
