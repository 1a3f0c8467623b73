//! Usage text for a front-end.
//!
//! [`UsageFormatter`] renders the registry as a header line followed by one
//! `<name>\t<description>` line per command, in [`CommandRegistry::list`]
//! order. It also owns the tolerant parse of the raw arguments, which only
//! ever informs the usage screen.

use clap::{Arg, ArgMatches, Command};

use super::registry::CommandRegistry;

/// Renders help text for a registry.
pub struct UsageFormatter<'a> {
    program: &'a str,
    registry: &'a CommandRegistry,
}

impl<'a> UsageFormatter<'a> {
    /// Create a formatter for `program` over `registry`.
    pub fn new(program: &'a str, registry: &'a CommandRegistry) -> Self {
        Self { program, registry }
    }

    /// Render the usage text.
    pub fn render(&self) -> String {
        let mut text = format!("Usage: {} <command> [args...]", self.program);
        for descriptor in self.registry.list() {
            text.push('\n');
            text.push_str(descriptor.name());
            text.push('\t');
            text.push_str(descriptor.description());
        }
        text
    }

    /// A clap command mirroring the registry.
    ///
    /// Each subcommand accepts any trailing arguments; verbs parse their own.
    pub fn clap_command(&self) -> Command {
        let subcommands = self.registry.list().into_iter().map(|descriptor| {
            Command::new(descriptor.name().to_string())
                .about(descriptor.description().to_string())
                .disable_help_flag(true)
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                )
        });

        Command::new(self.program.to_string())
            .no_binary_name(true)
            .disable_version_flag(true)
            .disable_help_subcommand(true)
            .subcommands(subcommands)
    }

    /// Parse `args` against [`Self::clap_command`], discarding any error.
    ///
    /// Malformed arguments are expected here: the verb has its own parser,
    /// and this pass must never stop dispatch.
    pub fn tolerant_parse(&self, args: &[String]) -> Option<ArgMatches> {
        match self.clap_command().try_get_matches_from(args) {
            Ok(matches) => Some(matches),
            Err(err) => {
                tracing::debug!(
                    program = self.program,
                    kind = ?err.kind(),
                    "Ignoring argument parse failure while preparing usage"
                );
                None
            }
        }
    }
}
