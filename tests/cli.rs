use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".su_sms").join("config.json")
}

const BINARY_NAME: &str = "su-sms";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal dashboard for SU SMS campaigns"))
        .stdout(contains("dashboard"));
}

#[test]
/// Compose help should list the SMS types.
fn compose_help_lists_sms_types() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["compose", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("manual"))
        .stdout(contains("student"));
}

#[test]
/// Logout command should delete an existing config file.
fn logout_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    // Run the command
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("logout")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Logging out"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Logout without a saved session is not an error.
fn logout_without_config_succeeds() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("logout")
        .env("HOME", tmp.path())
        .assert()
        .success();
}

#[test]
/// Commands that need a session fail before touching the network.
fn balance_requires_login() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("balance")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("su-sms login"));
}

#[test]
#[ignore] // This requires a live Odoo server and valid credentials.
fn login_command_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["login", "--db", "su", "--login", "admin"])
        .env("SU_SMS_PASSWORD", "admin")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Logged in"));

    assert!(config_path.exists());
}
