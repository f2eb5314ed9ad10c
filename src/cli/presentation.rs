//! CLI presentation: text and json formatters per command.

use crate::agent::AgentRecord;
use crate::error::SyncError;
use crate::manifest::ManifestAgent;
use crate::sync::SyncReport;
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::json;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "-"
    }
}

fn agent_table(agents: &[ManifestAgent]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Agent", "Status", "Tier", "Soul", "Config", "Heartbeat"]);
    for agent in agents {
        table.add_row(vec![
            agent.id.as_str(),
            agent.status.as_str(),
            agent.tier.as_str(),
            yes_no(agent.has_soul),
            yes_no(agent.has_config),
            yes_no(agent.has_heartbeat),
        ]);
    }
    table
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, SyncError> {
    serde_json::to_string_pretty(value).map_err(SyncError::OutputError)
}

pub fn format_sync_report_text(report: &SyncReport) -> String {
    let manifest = &report.manifest;
    if manifest.agents.is_empty() {
        return format!("No agents found under {}.", manifest.vault_path);
    }

    let mut output = agent_table(&manifest.agents).to_string();
    output.push_str(&format!(
        "\n\nTotal: {} agent(s), {} active",
        manifest.total_count, manifest.active_count
    ));
    if report.config_written {
        output.push_str(&format!(
            "\nRuntime config: {} added, {} updated",
            report.inserted, report.updated
        ));
    } else {
        output.push_str("\nRuntime config: unchanged (no active agents)");
    }
    if !report.workspace_failures.is_empty() {
        output.push_str(&format!(
            "\nWorkspace write failed for: {}",
            report.workspace_failures.join(", ")
        ));
    }
    output
}

/// JSON output of `sync` is the manifest itself.
pub fn format_sync_report_json(report: &SyncReport) -> Result<String, SyncError> {
    to_json(&report.manifest)
}

pub fn format_agent_list_text(agents: &[AgentRecord]) -> String {
    if agents.is_empty() {
        return "No agents found.".to_string();
    }
    let rows: Vec<ManifestAgent> = agents.iter().map(ManifestAgent::from).collect();
    let active = agents.iter().filter(|a| a.is_active()).count();
    format!(
        "{}\n\nTotal: {} agent(s), {} active",
        agent_table(&rows),
        agents.len(),
        active
    )
}

pub fn format_agent_list_json(agents: &[AgentRecord]) -> Result<String, SyncError> {
    let list: Vec<_> = agents
        .iter()
        .map(|agent| {
            json!({
                "id": agent.id,
                "status": agent.status,
                "tier": agent.tier,
                "dir": agent.dir.to_string_lossy(),
                "hasSoul": agent.has_soul(),
                "hasConfig": agent.has_config(),
                "hasHeartbeat": agent.has_heartbeat(),
                "workspace": agent.workspace_override(),
            })
        })
        .collect();
    to_json(&json!({ "agents": list, "total": agents.len() }))
}
