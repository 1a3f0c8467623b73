//! Process entry point shared by the front-end binaries.

use std::ffi::OsString;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::commands::{Dispatcher, VerbCandidate};
use super::frontend::Frontend;
use crate::config::{Settings, DEFAULT_LOG_FILTER};
use crate::ui::{TerminalUI, UserInterface};

/// Initialize the tracing subscriber for logging.
///
/// Log output goes to standard error so usage text on standard output stays
/// clean. An unparsable filter falls back to [`DEFAULT_LOG_FILTER`].
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(settings.color)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Run a front-end's own catalog against the process arguments.
pub fn run(frontend: Frontend) -> ExitCode {
    run_with(frontend, frontend.catalog())
}

/// Run a front-end over an explicit set of verb types.
///
/// This is how a server build links in its verbs while keeping the shared
/// logging, settings and exit-code handling.
pub fn run_with(
    frontend: Frontend,
    candidates: impl IntoIterator<Item = VerbCandidate>,
) -> ExitCode {
    let settings = Settings::from_env();
    init_tracing(&settings);

    let args = lossy_args(std::env::args_os().skip(1));
    tracing::debug!("{} starting with args: {:?}", frontend, args);

    let mut ui = TerminalUI::new(settings.color);
    let dispatcher = Dispatcher::new(frontend, candidates);

    ExitCode::from(execute(&dispatcher, args, &mut ui))
}

/// Dispatch `args` and turn the outcome into a process exit status.
///
/// A verb error is reported on the UI and exits 1.
pub fn execute(dispatcher: &Dispatcher, args: Vec<String>, ui: &mut dyn UserInterface) -> u8 {
    match dispatcher.dispatch(args, ui) {
        Ok(outcome) => exit_status(outcome.exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            1
        }
    }
}

/// Map a verb exit code onto the 0..=255 range a process can report.
///
/// Out-of-range codes become 1 so a failure never reads as success.
pub fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Convert OS arguments to strings, replacing invalid UTF-8.
///
/// A mangled token still reaches the dispatcher, which shows usage for it.
pub fn lossy_args(args: impl IntoIterator<Item = OsString>) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
