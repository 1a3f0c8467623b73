//! Environment management entry point.

use std::process::ExitCode;

use concourse_admin::cli::{run, Frontend};

fn main() -> ExitCode {
    run(Frontend::Environment)
}
