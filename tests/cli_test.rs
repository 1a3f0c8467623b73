//! Integration tests for the front-end binaries.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn environment_no_args_shows_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("environment"));
    cmd.env("NO_COLOR", "1");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage: environment <command> [args...]",
        ));
    Ok(())
}

#[test]
fn environment_unknown_command_shows_same_usage() -> Result<(), Box<dyn std::error::Error>> {
    let empty = Command::new(cargo_bin("environment")).output()?;
    let unknown = Command::new(cargo_bin("environment"))
        .args(["frobulate", "--with", "flags"])
        .output()?;

    assert!(empty.status.success());
    assert!(unknown.status.success());
    assert_eq!(empty.stdout, unknown.stdout);
    Ok(())
}

#[test]
fn plugin_no_args_shows_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("plugin"));
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: plugin <command> [args...]"));
    Ok(())
}

#[test]
fn plugin_help_flag_falls_back_to_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("plugin"));
    cmd.env_remove("RUST_LOG")
        .env_remove("CONCOURSE_ADMIN_LOG")
        .args(["--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: plugin"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn debug_logging_goes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("environment"));
    cmd.env("CONCOURSE_ADMIN_LOG", "concourse_admin=debug")
        .env("NO_COLOR", "1")
        .arg("frobulate");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("Unknown command"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn invalid_utf8_argument_shows_usage() -> Result<(), Box<dyn std::error::Error>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut cmd = Command::new(cargo_bin("environment"));
    cmd.env("NO_COLOR", "1")
        .arg(OsStr::from_bytes(b"fro\xffbulate"));
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage: environment <command> [args...]",
        ));
    Ok(())
}
