//! Integration tests for agent discovery

use crate::integration::test_utils::VaultFixture;
use vaultsync::agent::{discover_agents, AgentDiscovery};

#[test]
fn test_discovery_order_and_classification() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file("zeta/SOUL.md", "---\nstatus: active\n---\nZeta prompt");
    fixture.write_agent_file("alpha/CONFIG.md", "---\nid: alpha-renamed\ntier: core\n---\n");
    fixture.write_agent_file("alpha/HEARTBEAT.md", "---\nlast: now\n---\n");
    fixture.write_agent_file("notes/todo.md", "not an agent");

    let agents = discover_agents(&fixture.agents());
    let ids: Vec<&str> = agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha-renamed", "zeta"]);

    let alpha = &agents[0];
    assert_eq!(alpha.tier, "core");
    assert_eq!(alpha.status, "setup");
    assert!(alpha.has_config() && alpha.has_heartbeat() && !alpha.has_soul());
    assert_eq!(alpha.dir, fixture.agents().join("alpha"));

    let zeta = &agents[1];
    assert!(zeta.is_active());
    assert_eq!(zeta.system_prompt.as_deref(), Some("Zeta prompt"));
}

#[test]
fn test_reserved_subtrees_are_not_visited() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file(".obsidian/plugin/SOUL.md", "x");
    fixture.write_agent_file("status/board/SOUL.md", "x");
    fixture.write_agent_file("team/reports/SOUL.md", "x");
    fixture.write_agent_file("team/lead/SOUL.md", "x");

    let agents = discover_agents(&fixture.agents());
    let ids: Vec<&str> = agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["lead"]);
}

#[test]
fn test_duplicate_identities_are_both_reported() {
    let fixture = VaultFixture::new();
    fixture.write_agent_file("a/SOUL.md", "---\nid: same\n---\n");
    fixture.write_agent_file("b/SOUL.md", "---\nid: same\n---\n");

    let agents = AgentDiscovery::new(fixture.agents()).discover();
    assert_eq!(agents.len(), 2);
    assert!(agents.iter().all(|a| a.id == "same"));
}

#[test]
fn test_unreadable_descriptor_counts_as_absent() {
    let fixture = VaultFixture::new();
    // Invalid UTF-8 cannot be read as text.
    let path = fixture.agents().join("binary/SOUL.md");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let agents = discover_agents(&fixture.agents());
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].id, "binary");
    assert!(!agents[0].has_soul());
}
