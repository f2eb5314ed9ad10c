//! Integration tests for descriptor documents

use serde_json::json;
use tempfile::TempDir;
use vaultsync::descriptor::{parse_document, read_document};

#[test]
fn test_document_without_marker_is_all_body() {
    let text = "# Scout\n\nid: not-a-header\n";
    let doc = parse_document(text);
    assert!(doc.header.is_empty());
    assert_eq!(doc.body, text);
}

#[test]
fn test_unterminated_header_is_all_body() {
    let text = "---\nid: foo\nstatus: active\n";
    let doc = parse_document(text);
    assert!(doc.header.is_empty());
    assert_eq!(doc.body, text);
}

#[test]
fn test_full_descriptor() {
    let doc = parse_document(
        r#"---
id: scout
status: active
tier: "core"
retries: 3
temperature: 0.7
enabled: true
notes: ~
skills:
  - search
  - 'summarize'
model:
  name: big  # primary
  fallback: small
workspace: /data/ws/scout
---
You are Scout.
"#,
    );

    assert_eq!(
        serde_json::Value::Object(doc.header),
        json!({
            "id": "scout",
            "status": "active",
            "tier": "core",
            "retries": 3,
            "temperature": 0.7,
            "enabled": true,
            "notes": null,
            "skills": ["search", "summarize"],
            "model": { "name": "big", "fallback": "small" },
            "workspace": "/data/ws/scout"
        })
    );
    assert_eq!(doc.body, "You are Scout.\n");
}

#[test]
fn test_crlf_documents_parse_like_lf() {
    let lf = parse_document("---\nid: a\nlist:\n  - x\n---\nbody\n");
    let crlf = parse_document("---\r\nid: a\r\nlist:\r\n  - x\r\n---\r\nbody\r\n");
    assert_eq!(lf, crlf);
}

#[test]
fn test_read_document_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("SOUL.md");
    std::fs::write(&path, "---\nid: disk\n---\nprompt").unwrap();

    let doc = read_document(&path).unwrap();
    assert_eq!(doc.header.get("id"), Some(&json!("disk")));
    assert_eq!(doc.trimmed_body(), Some("prompt"));

    assert!(read_document(&temp_dir.path().join("missing.md")).is_err());
}
