//! Integration tests for a full reconciliation pass

use crate::integration::test_utils::{read_json, write_file, VaultFixture};
use serde_json::json;
use std::fs;
use vaultsync::manifest::SyncManifest;
use vaultsync::sync::run_pass;

#[test]
fn test_end_to_end_single_agent() {
    let fixture = VaultFixture::new();
    let workspace = fixture.temp_dir.path().join("data/ws/foo");
    fixture.write_agent_file(
        "foo/SOUL.md",
        "---\nid: foo\nstatus: active\n---\nYou are Foo.",
    );
    fixture.write_agent_file(
        "foo/CONFIG.md",
        &format!("---\nworkspace: {}\n---\n", workspace.display()),
    );
    let ctx = fixture.context();

    let report = run_pass(&ctx).unwrap();
    assert!(report.config_written);
    assert_eq!(report.inserted, 1);

    assert_eq!(
        fs::read_to_string(workspace.join("IDENTITY.md")).unwrap(),
        "You are Foo."
    );
    assert_eq!(
        read_json(&ctx.config_path),
        json!({
            "agents": {
                "list": [ { "id": "foo", "workspace": workspace.to_string_lossy() } ]
            }
        })
    );

    let manifest = SyncManifest::load(&ctx.manifest_path).unwrap();
    assert_eq!(manifest.active_count, 1);
    assert_eq!(manifest.total_count, 1);
    assert_eq!(manifest.agents[0].id, "foo");
    assert!(manifest.agents[0].has_soul && manifest.agents[0].has_config);

    let raw = read_json(&ctx.manifest_path);
    assert_eq!(raw["activeCount"], 1);
    assert_eq!(raw["totalCount"], 1);
}

#[test]
fn test_empty_root_writes_manifest_only() {
    let fixture = VaultFixture::new();
    let ctx = fixture.context();

    let report = run_pass(&ctx).unwrap();
    assert!(!report.config_written);
    assert!(!ctx.config_path.exists());

    let manifest = read_json(&ctx.manifest_path);
    assert_eq!(manifest["totalCount"], 0);
    assert_eq!(manifest["activeCount"], 0);
    assert_eq!(manifest["agents"], json!([]));
}

#[test]
fn test_missing_agents_root_is_not_an_error() {
    let fixture = VaultFixture::new();
    fs::remove_dir(fixture.agents()).unwrap();

    let report = run_pass(&fixture.context()).unwrap();
    assert_eq!(report.total_count(), 0);
}

#[test]
fn test_only_active_agents_are_merged_but_all_are_listed() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file("on/SOUL.md", "---\nstatus: active\n---\nOn prompt");
    fixture.write_agent_file("off/SOUL.md", "---\nstatus: setup\n---\nOff prompt");
    fixture.write_agent_file("paused/CONFIG.md", "---\nstatus: paused\n---\n");
    let ctx = fixture.context();

    run_pass(&ctx).unwrap();

    let doc = read_json(&ctx.config_path);
    assert_eq!(doc["agents"]["list"], json!([ { "id": "on" } ]));
    assert!(ctx.state_dir.join("workspace-on/IDENTITY.md").exists());
    assert!(!ctx.state_dir.join("workspace-off").exists());

    let manifest = SyncManifest::load(&ctx.manifest_path).unwrap();
    assert_eq!(manifest.total_count, 3);
    assert_eq!(manifest.active_count, 1);
    let ids: Vec<&str> = manifest.agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["off", "on", "paused"]);
}

#[test]
fn test_pass_preserves_existing_runtime_state() {
    let fixture = VaultFixture::new();
    let ctx = fixture.context();
    write_file(
        &ctx.config_path,
        r#"{ "gateway": { "port": 1 }, "agents": { "list": [ { "id": "main" } ] } }"#,
    );
    fixture.write_agent_file("foo/CONFIG.md", "---\nstatus: active\n---\n");

    run_pass(&ctx).unwrap();

    assert_eq!(
        read_json(&ctx.config_path),
        json!({
            "gateway": { "port": 1 },
            "agents": { "list": [ { "id": "main" }, { "id": "foo" } ] }
        })
    );
}

#[test]
fn test_removed_agent_entry_is_not_deleted() {
    let fixture = VaultFixture::new();
    let ctx = fixture.context();
    fixture.write_agent_file("a/CONFIG.md", "---\nstatus: active\n---\n");
    let b = fixture.write_agent_file("b/CONFIG.md", "---\nstatus: active\n---\n");
    run_pass(&ctx).unwrap();

    fs::remove_file(b).unwrap();
    let report = run_pass(&ctx).unwrap();
    assert_eq!(report.total_count(), 1);

    let ids: Vec<String> = read_json(&ctx.config_path)["agents"]["list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}
