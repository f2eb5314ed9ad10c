//! Sync manifest: a JSON summary of the last pass, written next to the vault.

use crate::agent::AgentRecord;
use crate::atomic::write_json_atomic;
use crate::error::StorageError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Summary of every agent discovered in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncManifest {
    /// RFC 3339 timestamp of the pass
    pub synced_at: String,
    pub vault_path: String,
    pub agents: Vec<ManifestAgent>,
    pub active_count: usize,
    pub total_count: usize,
}

/// Per-agent manifest line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestAgent {
    pub id: String,
    pub tier: String,
    pub status: String,
    pub has_soul: bool,
    pub has_config: bool,
    pub has_heartbeat: bool,
}

impl From<&AgentRecord> for ManifestAgent {
    fn from(agent: &AgentRecord) -> Self {
        Self {
            id: agent.id.clone(),
            tier: agent.tier.clone(),
            status: agent.status.clone(),
            has_soul: agent.has_soul(),
            has_config: agent.has_config(),
            has_heartbeat: agent.has_heartbeat(),
        }
    }
}

impl SyncManifest {
    /// Build the manifest for the full discovered list, active or not.
    pub fn from_agents(vault_root: &Path, agents: &[AgentRecord]) -> Self {
        Self {
            synced_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            vault_path: vault_root.to_string_lossy().into_owned(),
            agents: agents.iter().map(ManifestAgent::from).collect(),
            active_count: agents.iter().filter(|a| a.is_active()).count(),
            total_count: agents.len(),
        }
    }

    /// Overwrite the manifest file.
    pub fn write(&self, path: &Path) -> Result<(), StorageError> {
        write_json_atomic(path, self)
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let text = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| StorageError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
