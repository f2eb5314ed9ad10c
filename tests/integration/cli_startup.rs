//! Integration tests for startup validation in the vaultsync binary.
//!
//! A missing or absent vault must stop the process with status 1 before any
//! pass runs, so neither the manifest nor the runtime config appears.

use crate::integration::test_utils::VaultFixture;
use std::path::Path;
use std::process::{Command, Output};

fn run_vaultsync(fixture: &VaultFixture, args: &[&str]) -> Output {
    let home = fixture.temp_dir.path().join("home");
    let xdg = fixture.temp_dir.path().join("xdg");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&xdg).unwrap();

    let bin = env!("CARGO_BIN_EXE_vaultsync");
    Command::new(bin)
        .env_clear()
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &xdg)
        .env("XDG_STATE_HOME", fixture.temp_dir.path().join("xdg-state"))
        .arg("--state-dir")
        .arg(fixture.state())
        .args(args)
        .output()
        .unwrap()
}

fn occurrences(haystack: &[u8], needle: &str) -> usize {
    String::from_utf8_lossy(haystack).matches(needle).count()
}

fn assert_nothing_written(fixture: &VaultFixture, vault: &Path) {
    assert!(!fixture.state().join("openclaw.json").exists());
    assert!(!vault.join(".sync-manifest.json").exists());
    assert!(!fixture.vault().join(".sync-manifest.json").exists());
}

#[test]
fn test_missing_vault_path_exits_with_status_one() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file("foo/CONFIG.md", "---\nstatus: active\n---\n");

    let output = run_vaultsync(&fixture, &["sync"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(occurrences(&output.stderr, "Vault path is not set"), 1);
    assert!(output.stdout.is_empty());
    assert_nothing_written(&fixture, &fixture.vault());
}

#[test]
fn test_nonexistent_vault_exits_with_status_one() {
    let fixture = VaultFixture::new();
    let vault = fixture.temp_dir.path().join("no-such-vault");

    let output = run_vaultsync(&fixture, &["--vault", vault.to_str().unwrap(), "sync"]);

    assert_eq!(output.status.code(), Some(1));
    // Reported once on stderr, not echoed again through the log.
    assert_eq!(occurrences(&output.stderr, "Vault path does not exist"), 1);
    assert_nothing_written(&fixture, &vault);
    assert!(!vault.exists());
}

#[test]
fn test_nonexistent_vault_stops_watch_before_first_pass() {
    let fixture = VaultFixture::new();
    let vault = fixture.temp_dir.path().join("no-such-vault");

    let output = run_vaultsync(&fixture, &["--vault", vault.to_str().unwrap(), "watch"]);

    assert_eq!(output.status.code(), Some(1));
    assert_nothing_written(&fixture, &vault);
}

#[test]
fn test_valid_vault_syncs_and_exits_cleanly() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file("foo/CONFIG.md", "---\nstatus: active\n---\n");
    let vault = fixture.vault();

    let output = run_vaultsync(
        &fixture,
        &["--quiet", "--vault", vault.to_str().unwrap(), "sync", "--format", "json"],
    );

    assert!(
        output.status.success(),
        "sync should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(fixture.state().join("openclaw.json").exists());
    assert!(vault.join(".sync-manifest.json").exists());
    let manifest: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(manifest["activeCount"], 1);
}
