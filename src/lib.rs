//! Management front-ends for a storage server.
//!
//! Two binaries, `environment` and `plugin`, share one dispatcher: the first
//! argument names a verb, the rest go to that verb untouched, and anything
//! unrecognised prints usage.
//!
//! # Modules
//!
//! - [`cli`] - Verb discovery, registry, usage and dispatch
//! - [`config`] - Settings read from the environment
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output and a mock for tests
//!
//! # Example
//!
//! ```
//! use concourse_admin::cli::{Dispatcher, Frontend, Outcome};
//! use concourse_admin::ui::MockUI;
//!
//! let dispatcher = Dispatcher::for_frontend(Frontend::Environment);
//! let mut ui = MockUI::new();
//! let outcome = dispatcher.dispatch(vec!["frobulate".into()], &mut ui).unwrap();
//!
//! assert!(matches!(outcome, Outcome::Usage { .. }));
//! assert_eq!(ui.output(), "Usage: environment <command> [args...]");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{AdminError, Result};
