//! Command registry.
//!
//! The [`CommandRegistry`] indexes command descriptors by name. It is built
//! once per process by [`CommandRegistry::discover`] and only read after
//! that.

use std::collections::HashMap;

use super::descriptor::CommandDescriptor;
use super::verb::VerbCandidate;
use crate::cli::frontend::Frontend;

/// Registry of the commands a front-end can dispatch.
pub struct CommandRegistry {
    entries: HashMap<String, CommandDescriptor>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a registry from candidate verb types.
    ///
    /// Candidates are visited in ascending type-path order. When two derive
    /// the same command name the one visited later replaces the earlier and
    /// a warning is logged.
    pub fn discover(
        frontend: Frontend,
        candidates: impl IntoIterator<Item = VerbCandidate>,
    ) -> Self {
        let mut candidates: Vec<VerbCandidate> = candidates.into_iter().collect();
        candidates.sort_by(|a, b| a.type_key.cmp(b.type_key));

        let mut registry = Self::new();
        for candidate in &candidates {
            let Some(descriptor) = CommandDescriptor::from_candidate(candidate, frontend) else {
                tracing::warn!(
                    frontend = %frontend,
                    verb = candidate.type_key,
                    "Cannot derive a command name; verb not registered"
                );
                continue;
            };
            let kept = descriptor.type_key().to_string();
            if let Some(replaced) = registry.register(descriptor) {
                tracing::warn!(
                    frontend = %frontend,
                    command = replaced.name(),
                    kept = %kept,
                    replaced = replaced.type_key(),
                    "Command name collision; later verb wins"
                );
            }
        }
        tracing::debug!(frontend = %frontend, commands = registry.len(), "Discovery finished");
        registry
    }

    /// Register a descriptor, replacing any entry with the same name.
    ///
    /// Returns the replaced descriptor, if any.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Option<CommandDescriptor> {
        self.entries.insert(descriptor.name().to_string(), descriptor)
    }

    /// Find a command by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.entries.get(&name.to_lowercase())
    }

    /// All descriptors, ordered by implementing type rather than by name.
    pub fn list(&self) -> Vec<&CommandDescriptor> {
        let mut descriptors: Vec<&CommandDescriptor> = self.entries.values().collect();
        descriptors.sort_by(|a, b| {
            a.type_key()
                .cmp(b.type_key())
                .then_with(|| a.name().cmp(b.name()))
        });
        descriptors
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
