//! Workspace Materializer
//!
//! Every agent with a system prompt gets a workspace directory owned by the
//! runtime. The prompt is written there as `IDENTITY.md` on each pass, replacing
//! whatever the previous pass left.

use crate::agent::AgentRecord;
use crate::config::{expand_home, SyncContext};
use crate::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Side-channel file carrying the agent's system prompt.
pub const IDENTITY_FILE: &str = "IDENTITY.md";

/// Workspace directory for `agent`.
///
/// The CONFIG.md `workspace` override wins; `~/` expands to the home directory
/// and relative paths resolve against the state directory. Without an override
/// the workspace is `<state_dir>/workspace-<id>`.
pub fn resolve_workspace_dir(agent: &AgentRecord, ctx: &SyncContext) -> PathBuf {
    match agent.workspace_override() {
        Some(raw) => {
            let expanded = expand_home(Path::new(raw), ctx.home_dir.as_deref());
            if expanded.is_absolute() {
                expanded
            } else {
                ctx.state_dir.join(expanded)
            }
        }
        None => ctx.default_workspace(&agent.id),
    }
}

/// Write the agent's system prompt into its workspace.
///
/// Returns the written file, or `None` when the agent has no prompt.
pub fn materialize_identity(
    agent: &AgentRecord,
    ctx: &SyncContext,
) -> Result<Option<PathBuf>, StorageError> {
    let Some(prompt) = agent.system_prompt.as_deref() else {
        return Ok(None);
    };

    let workspace = resolve_workspace_dir(agent, ctx);
    fs::create_dir_all(&workspace).map_err(|e| StorageError::io(&workspace, e))?;

    let identity_path = workspace.join(IDENTITY_FILE);
    fs::write(&identity_path, prompt).map_err(|e| StorageError::io(&identity_path, e))?;

    debug!(
        agent_id = %agent.id,
        path = %identity_path.display(),
        "Wrote identity file"
    );
    Ok(Some(identity_path))
}
