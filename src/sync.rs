//! Reconciliation Driver
//!
//! One pass: discover agents, merge the active ones into the runtime config,
//! write their identity files, then persist the manifest for everything found.
//! A pass is synchronous and stateless; the watcher simply calls it again.

use crate::agent::{discover_agents, AgentRecord};
use crate::config::SyncContext;
use crate::error::SyncError;
use crate::manifest::SyncManifest;
use crate::runtime_config::{
    load_runtime_config, partial_config, save_runtime_config, upsert_agent, UpsertOutcome,
};
use crate::workspace::materialize_identity;
use tracing::{debug, info, warn};

/// Outcome of one pass.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Manifest written at the end of the pass
    pub manifest: SyncManifest,
    /// Whether the runtime config was rewritten
    pub config_written: bool,
    /// Active agents appended to the agent list
    pub inserted: usize,
    /// Active agents merged into an existing entry
    pub updated: usize,
    /// Agents whose identity file could not be written
    pub workspace_failures: Vec<String>,
}

impl SyncReport {
    pub fn active_count(&self) -> usize {
        self.manifest.active_count
    }

    pub fn total_count(&self) -> usize {
        self.manifest.total_count
    }
}

/// Run one reconciliation pass.
///
/// Per-agent workspace failures are logged and recorded in the report; only
/// persisting the runtime config or the manifest fails the pass.
pub fn run_pass(ctx: &SyncContext) -> Result<SyncReport, SyncError> {
    let agents = discover_agents(&ctx.agents_root);
    let active: Vec<&AgentRecord> = agents.iter().filter(|a| a.is_active()).collect();

    info!(
        root = %ctx.agents_root.display(),
        total = agents.len(),
        active = active.len(),
        "Discovered agents"
    );
    for agent in &agents {
        info!(
            agent_id = %agent.id,
            status = %agent.status,
            tier = %agent.tier,
            soul = agent.has_soul(),
            config = agent.has_config(),
            heartbeat = agent.has_heartbeat(),
            "Agent"
        );
    }

    let mut inserted = 0;
    let mut updated = 0;
    let mut workspace_failures = Vec::new();
    let mut config_written = false;

    if active.is_empty() {
        info!("No active agents; runtime config left untouched");
    } else {
        let mut doc = load_runtime_config(&ctx.config_path);

        for agent in &active {
            let partial = partial_config(agent);
            match upsert_agent(&mut doc, &agent.id, &partial) {
                UpsertOutcome::Inserted => inserted += 1,
                UpsertOutcome::Updated => updated += 1,
            }

            if let Err(e) = materialize_identity(agent, ctx) {
                warn!(agent_id = %agent.id, error = %e, "Failed to write workspace identity");
                workspace_failures.push(agent.id.clone());
            }
        }

        save_runtime_config(&ctx.config_path, &doc)?;
        config_written = true;
        info!(
            path = %ctx.config_path.display(),
            inserted,
            updated,
            "Runtime config updated"
        );
    }

    let manifest = SyncManifest::from_agents(&ctx.vault_root, &agents);
    manifest.write(&ctx.manifest_path)?;
    debug!(path = %ctx.manifest_path.display(), "Manifest written");

    Ok(SyncReport {
        manifest,
        config_written,
        inserted,
        updated,
        workspace_failures,
    })
}
