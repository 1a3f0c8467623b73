//! Command-line front-ends.
//!
//! # Architecture
//!
//! - [`commands`] - Verb discovery, registry and dispatch
//! - [`frontend`] - The environment and plugin front-ends
//! - [`entry`] - Process entry point shared by both binaries

pub mod commands;
pub mod entry;
pub mod frontend;

pub use commands::{
    CommandDescriptor, CommandRegistry, CommandResult, Dispatcher, Outcome, UsageFormatter,
    UsageReason, Verb, VerbCandidate, VerbType,
};
pub use entry::{run, run_with};
pub use frontend::Frontend;
