//! Integration tests for the envtag binary.
//!
//! These tests run the real binary against files in a temporary directory
//! and check stdout, stderr, and the structured exit codes.

mod common;

use common::Workspace;
use predicates::prelude::*;

const BASE: &str = "\
# Base settings
APP_ENV=production
DB_HOST=db.prod.internal   # primary
GREETING=\"hello # world\"
";

const LOCAL: &str = "\
APP_ENV=local
DEBUG=true
";

#[test]
fn test_check_default_file() {
    let ws = Workspace::create();
    ws.write(".env", BASE);

    ws.envtag_cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(".env: 3 keys\n");
}

#[test]
fn test_check_multiple_files_as_json() {
    let ws = Workspace::create();
    ws.write(".env", BASE);
    ws.write(".env.local", LOCAL);

    let output = ws
        .envtag_cmd()
        .args(["check", "-f", ".env", "-f", ".env.local", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report[0]["keys"], 3);
    assert_eq!(report[1]["path"], ".env.local");
    assert_eq!(report[1]["keys"], 2);
}

#[test]
fn test_check_malformed_file_fails_without_leaking_values() {
    let ws = Workspace::create();
    ws.write(".env", "GOOD=1\nsuper-secret-token\n");

    ws.envtag_cmd()
        .arg("check")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("malformed line 2"))
        .stderr(predicate::str::contains("super-secret-token").not());
}

#[test]
fn test_check_missing_file_exits_not_found() {
    let ws = Workspace::create();

    ws.envtag_cmd()
        .args(["check", "-f", "nope.env"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("failed to load file 'nope.env'"));
}

#[test]
fn test_print_first_file_wins() {
    let ws = Workspace::create();
    ws.write(".env", BASE);
    ws.write(".env.local", LOCAL);

    ws.envtag_cmd()
        .args(["print", "-f", ".env", "-f", ".env.local"])
        .assert()
        .success()
        .stdout(
            "APP_ENV=production\n\
             DB_HOST=db.prod.internal\n\
             DEBUG=true\n\
             GREETING=\"hello # world\"\n",
        );
}

#[test]
fn test_print_ignores_process_env() {
    let ws = Workspace::create();
    ws.write(".env.local", LOCAL);
    ws.write(".env", BASE);

    ws.envtag_cmd()
        .env("DEBUG", "false")
        .args(["print", "--keys-only"])
        .env("ENVTAG_FILES", ".env.local,.env")
        .assert()
        .success()
        .stdout("APP_ENV\nDB_HOST\nDEBUG\nGREETING\n");

    ws.envtag_cmd()
        .env("DEBUG", "false")
        .args(["print", "--format", "json"])
        .env("ENVTAG_FILES", ".env.local,.env")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"DEBUG\": \"true\""))
        .stdout(predicate::str::contains("\"APP_ENV\": \"local\""));
}

#[test]
fn test_get_reads_layered_value() {
    let ws = Workspace::create();
    ws.write(".env", BASE);

    ws.envtag_cmd()
        .args(["get", "GREETING"])
        .assert()
        .success()
        .stdout("hello # world\n");
}

#[test]
fn test_get_second_file_does_not_override_process_env() {
    let ws = Workspace::create();
    ws.write(".env", BASE);
    ws.write(".env.local", LOCAL);

    ws.envtag_cmd()
        .env("DEBUG", "from-shell")
        .args(["get", "DEBUG", "-f", ".env", "-f", ".env.local"])
        .assert()
        .success()
        .stdout("from-shell\n");

    ws.envtag_cmd()
        .env("APP_ENV", "from-shell")
        .args(["get", "APP_ENV", "-f", ".env", "-f", ".env.local"])
        .assert()
        .success()
        .stdout("production\n");
}

#[test]
fn test_get_uses_default_when_absent() {
    let ws = Workspace::create();
    ws.write(".env", BASE);

    ws.envtag_cmd()
        .env_remove("PORT")
        .args(["get", "PORT", "--default", "8080"])
        .assert()
        .success()
        .stdout("8080\n");
}

#[test]
fn test_get_missing_key_exits_not_found() {
    let ws = Workspace::create();
    ws.write(".env", BASE);

    ws.envtag_cmd()
        .env_remove("_ENVTAG_CLI_ABSENT")
        .args(["get", "_ENVTAG_CLI_ABSENT"])
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains(
            "environment variable _ENVTAG_CLI_ABSENT is not set",
        ));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let ws = Workspace::create();
    ws.write(".env", BASE);

    ws.envtag_cmd()
        .env("RUST_LOG", "envtag=debug")
        .arg("check")
        .assert()
        .success()
        .stdout(".env: 3 keys\n")
        .stderr(predicate::str::contains("File parsed"));
}

#[test]
fn test_invalid_format_is_usage_error() {
    let ws = Workspace::create();

    ws.envtag_cmd()
        .args(["print", "--format", "yaml"])
        .assert()
        .code(2);
}
