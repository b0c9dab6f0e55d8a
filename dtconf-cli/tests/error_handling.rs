//! Integration tests for error handling and exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Semantic failure (unknown group, failed bundle check)
//! - 4: Invalid arguments
//! - 6: Other library errors
//! - 7: Settings error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();

    env.command().arg("resolve").assert().code(0);
    env.command().arg("groups").assert().code(0);
    env.command_bare().arg("keys").assert().code(0);
}

#[test]
fn test_invalid_locale_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "--locale", "en_US_POSIX_extra"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid locale"));
}

#[test]
fn test_invalid_format_rejected_by_parser() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'xml'"));
}

#[test]
fn test_missing_default_resource_exit_code() {
    let env = TestEnv::new();
    let defaults_dir = env.path().join("defaults");
    std::fs::create_dir_all(&defaults_dir).unwrap();

    env.command()
        .env("DTCONF_DEFAULTS_DIR", &defaults_dir)
        .arg("resolve")
        .assert()
        .code(6)
        .stderr(predicate::str::contains("datatables-default.properties"));
}

#[test]
fn test_invalid_settings_file_exit_code() {
    let env = TestEnv::new();
    let settings = env.write_file("broken.yaml", "bundle_name: [\n");

    env.command()
        .arg("--settings")
        .arg(&settings)
        .arg("resolve")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_environment_exit_code() {
    let env = TestEnv::new();

    env.command()
        .env("DTCONF_JSTL", "perhaps")
        .arg("resolve")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("DTCONF_JSTL"));
}

#[test]
fn test_invalid_bundle_name_exit_code() {
    let env = TestEnv::new();

    env.command()
        .env("DTCONF_BUNDLE_NAME", "../escape")
        .arg("resolve")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("bundle_name"));
}
