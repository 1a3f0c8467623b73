//! Verb discovery and dispatch.
//!
//! # Architecture
//!
//! - [`verb`] - The [`Verb`] contract and [`VerbCandidate`] metadata
//! - [`descriptor`] - Named, described factories built from candidates
//! - [`registry`] - Name-indexed descriptors for one front-end
//! - [`usage`] - Usage rendering and the tolerant usage parse
//! - [`dispatcher`] - Routes an argument vector to a verb or to usage
//!
//! Adding a verb means implementing [`VerbType`] and listing the type in a
//! front-end catalog; the dispatcher itself never changes.

pub mod descriptor;
pub mod dispatcher;
pub mod registry;
pub mod usage;
pub mod verb;

pub use descriptor::{derive_command_name, CommandDescriptor};
pub use dispatcher::{Dispatcher, Invocation, Outcome, UsageReason};
pub use registry::CommandRegistry;
pub use usage::UsageFormatter;
pub use verb::{CommandResult, Factory, Verb, VerbCandidate, VerbType};
