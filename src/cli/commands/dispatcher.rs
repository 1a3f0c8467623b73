//! Command dispatching.
//!
//! [`Dispatcher`] takes the raw argument vector of a front-end, treats the
//! first token as a command name and routes the rest to the matching verb.
//! When nothing matches it prints usage instead; a miss is not an error.

use super::registry::CommandRegistry;
use super::usage::UsageFormatter;
use super::verb::{CommandResult, VerbCandidate};
use crate::cli::frontend::Frontend;
use crate::error::Result;
use crate::ui::UserInterface;

/// A classified argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all.
    Empty,
    /// A command key (lowercased) and the arguments that follow it.
    Command { name: String, args: Vec<String> },
}

impl Invocation {
    /// Split raw arguments into a command key and leftover arguments.
    pub fn classify(mut args: Vec<String>) -> Self {
        if args.is_empty() {
            return Self::Empty;
        }
        let rest = args.split_off(1);
        let name = args.swap_remove(0).to_lowercase();
        Self::Command { name, args: rest }
    }
}

/// Why usage was shown instead of running a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageReason {
    /// No command was given.
    NoCommand,
    /// The command is not registered.
    UnknownCommand(String),
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A verb ran to completion.
    Ran {
        command: String,
        result: CommandResult,
    },
    /// Usage was printed.
    Usage { reason: UsageReason },
}

impl Outcome {
    /// Exit code for the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Ran { result, .. } => result.exit_code,
            Self::Usage { .. } => 0,
        }
    }
}

/// Dispatches front-end arguments to verbs.
pub struct Dispatcher {
    frontend: Frontend,
    registry: CommandRegistry,
}

impl Dispatcher {
    /// Create a dispatcher serving the front-end's own catalog.
    pub fn for_frontend(frontend: Frontend) -> Self {
        Self::new(frontend, frontend.catalog())
    }

    /// Create a dispatcher over an explicit set of verb types.
    pub fn new(frontend: Frontend, candidates: impl IntoIterator<Item = VerbCandidate>) -> Self {
        Self::with_registry(frontend, CommandRegistry::discover(frontend, candidates))
    }

    /// Create a dispatcher over an already built registry.
    pub fn with_registry(frontend: Frontend, registry: CommandRegistry) -> Self {
        Self { frontend, registry }
    }

    /// The front-end being served.
    pub fn frontend(&self) -> Frontend {
        self.frontend
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Usage text for this front-end.
    pub fn usage(&self) -> String {
        self.formatter().render()
    }

    fn formatter(&self) -> UsageFormatter<'_> {
        UsageFormatter::new(self.frontend.program_name(), &self.registry)
    }

    /// Dispatch and execute a command.
    ///
    /// Leftover arguments reach the verb's factory unchanged. Errors come
    /// only from the verb itself and are meant to end the process.
    pub fn dispatch(&self, args: Vec<String>, ui: &mut dyn UserInterface) -> Result<Outcome> {
        if let Some(matches) = self.formatter().tolerant_parse(&args) {
            tracing::trace!(
                subcommand = matches.subcommand_name(),
                "Arguments match the usage screen"
            );
        }

        let (name, rest) = match Invocation::classify(args) {
            Invocation::Empty => return Ok(self.show_usage(UsageReason::NoCommand, ui)),
            Invocation::Command { name, args } => (name, args),
        };

        let Some(descriptor) = self.registry.lookup(&name) else {
            tracing::debug!(frontend = %self.frontend, command = %name, "Unknown command");
            return Ok(self.show_usage(UsageReason::UnknownCommand(name), ui));
        };

        tracing::debug!(
            frontend = %self.frontend,
            command = descriptor.name(),
            verb = descriptor.type_key(),
            args = rest.len(),
            "Dispatching"
        );
        let verb = descriptor.instantiate(rest);
        let result = verb.execute(ui)?;
        Ok(Outcome::Ran {
            command: descriptor.name().to_string(),
            result,
        })
    }

    fn show_usage(&self, reason: UsageReason, ui: &mut dyn UserInterface) -> Outcome {
        ui.message(&self.usage());
        Outcome::Usage { reason }
    }
}
