//! The contract verb implementations satisfy.
//!
//! A verb is a struct built from the arguments left over after the command
//! token, plus a run operation. The dispatcher never looks inside a verb; it
//! only needs the pieces gathered into a [`VerbCandidate`].

use crate::error::Result;
use crate::ui::UserInterface;

/// A runnable verb instance.
pub trait Verb {
    /// Execute the verb.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// A verb type that can be discovered by a front-end.
///
/// The command name is derived from the type's own identifier unless
/// [`VerbType::COMMAND`] overrides it. For example:
///
/// ```
/// use concourse_admin::cli::{CommandResult, Verb, VerbType};
/// use concourse_admin::ui::UserInterface;
///
/// struct AddEnvironment {
///     args: Vec<String>,
/// }
///
/// impl Verb for AddEnvironment {
///     fn execute(&self, ui: &mut dyn UserInterface) -> concourse_admin::Result<CommandResult> {
///         ui.message(&format!("adding {}", self.args.join(" ")));
///         Ok(CommandResult::success())
///     }
/// }
///
/// impl VerbType for AddEnvironment {
///     const DESCRIPTION: Option<&'static str> = Some("Create a new environment");
///
///     fn from_args(args: Vec<String>) -> Self {
///         Self { args }
///     }
/// }
/// ```
pub trait VerbType: Verb + Sized + 'static {
    /// Command name to use instead of the derived one.
    const COMMAND: Option<&'static str> = None;

    /// Description shown in usage; the front-end's template applies if absent.
    const DESCRIPTION: Option<&'static str> = None;

    /// Build an instance from the leftover arguments.
    ///
    /// Must not do any work beyond holding on to its input.
    fn from_args(args: Vec<String>) -> Self;
}

/// Constructs a boxed verb from leftover arguments.
pub type Factory = fn(Vec<String>) -> Box<dyn Verb>;

fn construct<T: VerbType>(args: Vec<String>) -> Box<dyn Verb> {
    Box::new(T::from_args(args))
}

/// Everything discovery needs to know about one verb type.
#[derive(Clone, Copy)]
pub struct VerbCandidate {
    /// Fully qualified type path, e.g. `my_crate::env::AddEnvironment`.
    pub type_key: &'static str,
    pub command: Option<&'static str>,
    pub description: Option<&'static str>,
    pub factory: Factory,
}

impl VerbCandidate {
    /// Describe the verb type `T`.
    pub fn of<T: VerbType>() -> Self {
        Self {
            type_key: std::any::type_name::<T>(),
            command: T::COMMAND,
            description: T::DESCRIPTION,
            factory: construct::<T>,
        }
    }

    /// The bare type identifier, without module path or generic arguments.
    pub fn identifier(&self) -> &'static str {
        simple_identifier(self.type_key)
    }
}

impl std::fmt::Debug for VerbCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerbCandidate")
            .field("type_key", &self.type_key)
            .field("command", &self.command)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Strip the module path and generic arguments from a type path.
pub fn simple_identifier(type_path: &str) -> &str {
    let base = type_path.split('<').next().unwrap_or(type_path);
    base.rsplit("::").next().unwrap_or(base)
}

/// Result of verb execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the verb succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}
