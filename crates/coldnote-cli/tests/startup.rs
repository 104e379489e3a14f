// crates/coldnote-cli/tests/startup.rs - Startup failure paths
//
// Everything here fails before the first prompt, so the interactive binary
// can be exercised without a terminal: missing configuration and empty
// vault/templates roots must abort with a clear message and a non-zero
// exit.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn coldnote() -> Command {
    let mut cmd = Command::cargo_bin("coldnote").unwrap();
    cmd.env_remove("VAULT_ROOT")
        .env_remove("TEMPLATES_ROOT")
        .env_remove("EDITOR_PREFERENCE");
    cmd
}

#[test]
fn missing_vault_root_aborts_with_a_clear_message() {
    coldnote()
        .assert()
        .failure()
        .stderr(contains("VAULT_ROOT environment variable not set"));
}

#[test]
fn missing_templates_root_aborts_with_a_clear_message() {
    let vault = TempDir::new().unwrap();

    coldnote()
        .env("VAULT_ROOT", vault.path())
        .assert()
        .failure()
        .stderr(contains("TEMPLATES_ROOT environment variable not set"));
}

#[test]
fn vault_without_numbered_directories_aborts() {
    let vault = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    std::fs::create_dir(vault.path().join("unnumbered")).unwrap();
    std::fs::write(templates.path().join("default.md"), "").unwrap();

    coldnote()
        .env("VAULT_ROOT", vault.path())
        .env("TEMPLATES_ROOT", templates.path())
        .assert()
        .failure()
        .stderr(contains("no note directories found"));
}

#[test]
fn templates_root_without_templates_aborts() {
    let vault = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    std::fs::create_dir(vault.path().join("01-notes")).unwrap();

    coldnote()
        .env("VAULT_ROOT", vault.path())
        .env("TEMPLATES_ROOT", templates.path())
        .assert()
        .failure()
        .stderr(contains("no template files found"));
}

#[test]
fn flag_overrides_beat_the_environment() {
    // --vault points at an empty directory, so the scan failure proves the
    // flag value was used over the (unset) variable.
    let vault = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    std::fs::write(templates.path().join("default.md"), "").unwrap();

    coldnote()
        .arg("--vault")
        .arg(vault.path())
        .arg("--templates")
        .arg(templates.path())
        .assert()
        .failure()
        .stderr(contains("no note directories found"));
}
