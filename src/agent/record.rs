//! Normalized agent record derived from one descriptor folder.

use crate::descriptor::{Document, Header};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Status that makes an agent eligible for the runtime config merge.
pub const ACTIVE_STATUS: &str = "active";
/// Status used when no descriptor declares one.
pub const DEFAULT_STATUS: &str = "setup";
/// Tier used when no descriptor declares one.
pub const DEFAULT_TIER: &str = "standard";

/// Header keys checked, in order, for an explicit identity.
const IDENTITY_KEYS: &[&str] = &["id", "agent_id"];

const WORKSPACE_KEY: &str = "workspace";

/// One discovered agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRecord {
    /// Identity key used to match entries in the runtime config
    pub id: String,
    /// Lifecycle status (`active`, `setup`, ...)
    pub status: String,
    /// Tier classification
    pub tier: String,
    /// Folder the agent was discovered in
    pub dir: PathBuf,
    /// Header of SOUL.md
    pub soul: Option<Header>,
    /// Header of CONFIG.md
    pub config: Option<Header>,
    /// Header of HEARTBEAT.md
    pub heartbeat: Option<Header>,
    /// Body of SOUL.md, trimmed
    pub system_prompt: Option<String>,
}

impl AgentRecord {
    /// Build a record from whichever descriptors were present in `dir`.
    ///
    /// Identity, status and tier take the first non-empty value from the config
    /// header, then the soul header, then the fallback (folder name for identity,
    /// fixed defaults for status and tier).
    pub fn from_documents(
        dir: &Path,
        soul: Option<Document>,
        config: Option<Document>,
        heartbeat: Option<Document>,
    ) -> Self {
        let config_header = config.map(|doc| doc.header);
        let heartbeat_header = heartbeat.map(|doc| doc.header);
        let system_prompt = soul
            .as_ref()
            .and_then(|doc| doc.trimmed_body())
            .map(str::to_string);
        let soul_header = soul.map(|doc| doc.header);

        let sources = [config_header.as_ref(), soul_header.as_ref()];

        let id = first_text(&sources, IDENTITY_KEYS).unwrap_or_else(|| folder_name(dir));
        let status =
            first_text(&sources, &["status"]).unwrap_or_else(|| DEFAULT_STATUS.to_string());
        let tier = first_text(&sources, &["tier"]).unwrap_or_else(|| DEFAULT_TIER.to_string());

        Self {
            id,
            status,
            tier,
            dir: dir.to_path_buf(),
            soul: soul_header,
            config: config_header,
            heartbeat: heartbeat_header,
            system_prompt,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }

    pub fn has_soul(&self) -> bool {
        self.soul.is_some()
    }

    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    pub fn has_heartbeat(&self) -> bool {
        self.heartbeat.is_some()
    }

    /// Workspace override declared in CONFIG.md, if any.
    pub fn workspace_override(&self) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|h| h.get(WORKSPACE_KEY))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// First non-empty value across `sources` (outer) and `keys` (inner).
fn first_text(sources: &[Option<&Header>], keys: &[&str]) -> Option<String> {
    sources
        .iter()
        .flatten()
        .find_map(|header| keys.iter().find_map(|key| header_text(header, key)))
}

/// Render a scalar header value as text; empty strings and non-scalars yield `None`.
fn header_text(header: &Header, key: &str) -> Option<String> {
    let text = match header.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn folder_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned())
}
