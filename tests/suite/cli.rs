//! End-to-end tests for the `planar` binary.

use crate::common::{Sandbox, stderr, stdout};

#[test]
fn adds_integer_points() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "1,2", "3,4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(4, 6)\n");
}

#[test]
fn accepts_parenthesized_points() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "(-1, 5)", "(1, -5)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(0, 0)\n");
}

#[test]
fn env_selects_float_mode() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .env("PLANAR_NUMERIC", "float")
        .args(["add", "0.5,1", "0.25,1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(0.75, 2)\n");
}

#[test]
fn config_file_selects_float_mode() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[app]\nnumeric = \"float\"\n");
    let output = sandbox.run(&["add", "1.5,0", "1.5,0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(3, 0)\n");
}

#[test]
fn env_overrides_config_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[app]\nnumeric = \"float\"\n");
    let output = sandbox
        .command()
        .env("PLANAR_NUMERIC", "int")
        .args(["add", "1.5,0", "1,0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid x coordinate"));
}

#[test]
fn integer_overflow_fails() {
    let sandbox = Sandbox::new();
    let max = i64::MAX.to_string();
    let lhs = format!("0,{max}");
    let output = sandbox.run(&["add", &lhs, "0,1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("y coordinate overflowed"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn negative_points_are_not_mistaken_for_flags() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "-1,5", "1,-5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(0, 0)\n");
}

#[test]
fn unknown_env_mode_falls_back_to_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[app]\nnumeric = \"float\"\n");
    let output = sandbox
        .command()
        .env("PLANAR_NUMERIC", "bogus")
        .args(["add", "0.5,0", "0.5,0"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(1, 0)\n");
    assert!(stderr(&output).contains("Ignoring unknown PLANAR_NUMERIC value: bogus"));
}

#[cfg(unix)]
#[test]
fn non_utf8_env_mode_is_reported_and_ignored() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let sandbox = Sandbox::new();
    let output = sandbox
        .command()
        .env("PLANAR_NUMERIC", OsString::from_vec(vec![0x66, 0xff]))
        .args(["add", "1,2", "3,4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(4, 6)\n");
    assert!(stderr(&output).contains("Ignoring non-UTF-8 PLANAR_NUMERIC value"));
}

#[test]
fn loaded_config_path_is_logged_once() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[app]\nnumeric = \"int\"\n");
    let output = sandbox
        .command()
        .env("RUST_LOG", "debug")
        .args(["add", "1,2", "3,4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let logs = stderr(&output);
    assert_eq!(logs.matches("Loaded config").count(), 1);
    assert!(logs.contains("config.toml"));
}

#[test]
fn usage_errors_exit_with_two() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage: planar"));

    let output = sandbox.run(&["add", "1,2"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<RHS>"));
}

#[test]
fn help_goes_to_stdout() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--help"]);
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Usage: planar"));
    assert!(help.contains("PLANAR_NUMERIC"));
}

#[test]
fn subcommand_help_succeeds() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: planar add <LHS> <RHS>"));
}

#[test]
fn version_prints_package_version() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("planar {}\n", env!("CARGO_PKG_VERSION"))
    );
}
