//! The two management front-ends.
//!
//! Both front-ends share the dispatch mechanism and differ only in their
//! program name, description template and the verbs they serve.

use std::fmt;

use super::commands::VerbCandidate;

/// A management front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frontend {
    /// Adds, modifies and removes server environments.
    Environment,
    /// Installs and manages server plugins.
    Plugin,
}

impl Frontend {
    /// Program name shown in usage output.
    pub fn program_name(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Plugin => "plugin",
        }
    }

    /// Noun phrase for the thing this front-end manages.
    pub fn subject(self) -> &'static str {
        match self {
            Self::Environment => "an environment",
            Self::Plugin => "a plugin",
        }
    }

    /// Description for a verb that supplies none, e.g. `"add an environment"`.
    pub fn default_description(self, command: &str) -> String {
        format!("{} {}", command, self.subject())
    }

    /// Verb types served by this front-end.
    ///
    /// Verbs live next to the server operations they drive and are listed
    /// here when linked into the build; discovery sorts them, so order does
    /// not matter.
    pub fn catalog(self) -> Vec<VerbCandidate> {
        match self {
            Self::Environment => Vec::new(),
            Self::Plugin => Vec::new(),
        }
    }
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program_name())
    }
}
