//! Process-level settings read from the environment.
//!
//! The front-ends take no flags of their own: every argument after the
//! program name belongs to the dispatched verb. What little is configurable
//! comes from environment variables.

/// Variable holding an `EnvFilter` directive for the front-ends.
pub const LOG_ENV: &str = "CONCOURSE_ADMIN_LOG";

/// Filter used when neither [`LOG_ENV`] nor `RUST_LOG` is set.
///
/// Warnings are on so command-name collisions surface at startup.
pub const DEFAULT_LOG_FILTER: &str = "concourse_admin=warn";

/// Settings for a single front-end invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `EnvFilter` directive for the tracing subscriber.
    pub log_filter: String,
    /// Whether terminal output may be styled.
    pub color: bool,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            console::Term::stdout().is_term(),
        )
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// `is_term` reports whether standard output is a terminal.
    pub fn from_lookup<F>(lookup: F, is_term: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        // https://no-color.org/
        let color = lookup("NO_COLOR").is_none() && is_term;

        Self { log_filter, color }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_in(&[]), false);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
        assert!(!settings.color);
    }

    #[test]
    fn own_variable_takes_precedence_over_rust_log() {
        let settings = Settings::from_lookup(
            lookup_in(&[(LOG_ENV, "concourse_admin=debug"), ("RUST_LOG", "info")]),
            false,
        );
        assert_eq!(settings.log_filter, "concourse_admin=debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let settings = Settings::from_lookup(lookup_in(&[("RUST_LOG", "trace")]), false);
        assert_eq!(settings.log_filter, "trace");
    }

    #[test]
    fn blank_filter_is_ignored() {
        let settings = Settings::from_lookup(lookup_in(&[(LOG_ENV, "  ")]), false);
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn color_requires_terminal_and_no_no_color() {
        assert!(Settings::from_lookup(lookup_in(&[]), true).color);
        assert!(!Settings::from_lookup(lookup_in(&[("NO_COLOR", "1")]), true).color);
    }
}
