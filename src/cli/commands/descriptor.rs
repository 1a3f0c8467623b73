//! Command descriptors and command-name derivation.

use super::verb::{Factory, Verb, VerbCandidate};
use crate::cli::frontend::Frontend;

/// Discovery-time metadata for one verb: its name, description and factory.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    description: String,
    type_key: String,
    factory: Factory,
}

impl CommandDescriptor {
    /// Create a descriptor. The name is lowercased.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        type_key: impl Into<String>,
        factory: Factory,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: description.into(),
            type_key: type_key.into(),
            factory,
        }
    }

    /// Derive a descriptor for a discovered verb type.
    ///
    /// Returns `None` when no usable command name can be derived.
    pub fn from_candidate(candidate: &VerbCandidate, frontend: Frontend) -> Option<Self> {
        let name = match candidate.command {
            Some(command) => command.trim().to_lowercase(),
            None => derive_command_name(candidate.identifier()),
        };
        if name.is_empty() {
            return None;
        }
        let description = candidate
            .description
            .map(str::to_string)
            .unwrap_or_else(|| frontend.default_description(&name));
        Some(Self {
            name,
            description,
            type_key: candidate.type_key.to_string(),
            factory: candidate.factory,
        })
    }

    /// The canonical command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description for usage output.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Identifier of the implementing type; orders usage output.
    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    /// Build a verb instance without running it.
    pub fn instantiate(&self, args: Vec<String>) -> Box<dyn Verb> {
        (self.factory)(args)
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("type_key", &self.type_key)
            .finish_non_exhaustive()
    }
}

/// Derive a command name from a camel-case type identifier.
///
/// The identifier is converted to lowercase underscore-delimited words and
/// only the first word is kept. Every ASCII uppercase letter starts a new
/// word; other characters are left as they are.
pub fn derive_command_name(identifier: &str) -> String {
    let mut snake = String::with_capacity(identifier.len() + 4);
    for (i, ch) in identifier.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            snake.push('_');
        }
        snake.push(ch.to_ascii_lowercase());
    }
    snake.split('_').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::verb::{CommandResult, VerbType};
    use crate::error::Result;
    use crate::ui::UserInterface;

    struct InstallPlugin;

    impl Verb for InstallPlugin {
        fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
            Ok(CommandResult::success())
        }
    }

    impl VerbType for InstallPlugin {
        fn from_args(_args: Vec<String>) -> Self {
            Self
        }
    }

    struct Described;

    impl Verb for Described {
        fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
            Ok(CommandResult::success())
        }
    }

    impl VerbType for Described {
        const COMMAND: Option<&'static str> = Some("Ls");
        const DESCRIPTION: Option<&'static str> = Some("List the environments");

        fn from_args(_args: Vec<String>) -> Self {
            Self
        }
    }

    #[test]
    fn derives_first_word() {
        assert_eq!(derive_command_name("AddEnvironment"), "add");
        assert_eq!(derive_command_name("RemoveUserEnvironment"), "remove");
        assert_eq!(derive_command_name("List"), "list");
    }

    #[test]
    fn every_capital_opens_a_word() {
        assert_eq!(derive_command_name("HTTPServer"), "h");
    }

    #[test]
    fn only_ascii_capitals_split_words() {
        assert_eq!(derive_command_name("ÉtendreEnvironment"), "Étendre");
        assert_eq!(derive_command_name("AjouterÉnvironment"), "ajouterÉnvironment");
    }

    #[test]
    fn digits_and_underscores() {
        assert_eq!(derive_command_name("Add2Environment"), "add2");
        assert_eq!(derive_command_name("Drop_all"), "drop");
        assert_eq!(derive_command_name("_Hidden"), "");
    }

    #[test]
    fn default_description_uses_frontend_template() {
        let candidate = VerbCandidate::of::<InstallPlugin>();

        let plugin = CommandDescriptor::from_candidate(&candidate, Frontend::Plugin).unwrap();
        assert_eq!(plugin.name(), "install");
        assert_eq!(plugin.description(), "install a plugin");

        let env = CommandDescriptor::from_candidate(&candidate, Frontend::Environment).unwrap();
        assert_eq!(env.description(), "install an environment");
    }

    #[test]
    fn explicit_metadata_wins() {
        let candidate = VerbCandidate::of::<Described>();
        let descriptor =
            CommandDescriptor::from_candidate(&candidate, Frontend::Environment).unwrap();
        assert_eq!(descriptor.name(), "ls");
        assert_eq!(descriptor.description(), "List the environments");
    }

    #[test]
    fn new_lowercases_name() {
        let descriptor = CommandDescriptor::new("ADD", "Add things", "x::Add", |_| {
            Box::new(InstallPlugin)
        });
        assert_eq!(descriptor.name(), "add");
        assert_eq!(descriptor.type_key(), "x::Add");
    }
}
