//! Integration tests for the runtime config merge

use crate::integration::test_utils::{read_json, write_file};
use serde_json::json;
use tempfile::TempDir;
use vaultsync::runtime_config::{
    deep_merge, load_runtime_config, save_runtime_config, upsert_agent, UpsertOutcome,
};

#[test]
fn test_deep_merge_preserves_sibling_fields() {
    let mut entry = json!({
        "id": "foo",
        "model": { "primary": "big", "fallbacks": ["a", "b"] },
        "workspace": "/old"
    });
    deep_merge(
        &mut entry,
        &json!({ "workspace": "/new", "model": { "fallbacks": ["c"] } }),
    );
    assert_eq!(
        entry,
        json!({
            "id": "foo",
            "model": { "primary": "big", "fallbacks": ["c"] },
            "workspace": "/new"
        })
    );
}

#[test]
fn test_existing_document_round_trip_keeps_unrelated_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        &temp_dir.path().join("openclaw.json"),
        r#"{
  "gateway": { "port": 18789, "auth": { "mode": "token" } },
  "agents": {
    "defaults": { "model": "big" },
    "list": [
      { "id": "main", "default": true },
      { "id": "foo", "model": "small", "workspace": "/old/foo" }
    ]
  },
  "channels": ["slack"]
}
"#,
    );

    let mut doc = load_runtime_config(&path);
    assert_eq!(
        upsert_agent(&mut doc, "foo", &json!({ "workspace": "/data/ws/foo" })),
        UpsertOutcome::Updated
    );
    assert_eq!(
        upsert_agent(&mut doc, "scout", &json!({})),
        UpsertOutcome::Inserted
    );
    save_runtime_config(&path, &doc).unwrap();

    assert_eq!(
        read_json(&path),
        json!({
            "gateway": { "port": 18789, "auth": { "mode": "token" } },
            "agents": {
                "defaults": { "model": "big" },
                "list": [
                    { "id": "main", "default": true },
                    { "id": "foo", "model": "small", "workspace": "/data/ws/foo" },
                    { "id": "scout" }
                ]
            },
            "channels": ["slack"]
        })
    );
}

#[test]
fn test_corrupt_document_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(&temp_dir.path().join("openclaw.json"), "not json at all");

    let mut doc = load_runtime_config(&path);
    upsert_agent(&mut doc, "foo", &json!({}));
    save_runtime_config(&path, &doc).unwrap();

    assert_eq!(read_json(&path), json!({ "agents": { "list": [ { "id": "foo" } ] } }));
}

#[test]
fn test_entries_without_id_are_left_alone() {
    let mut doc = json!({ "agents": { "list": [ { "name": "anonymous" }, 42 ] } });
    upsert_agent(&mut doc, "foo", &json!({ "workspace": "/w" }));
    assert_eq!(
        doc["agents"]["list"],
        json!([ { "name": "anonymous" }, 42, { "id": "foo", "workspace": "/w" } ])
    );
}
