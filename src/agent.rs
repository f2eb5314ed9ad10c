//! Agent Discovery
//!
//! Agents are folders in the vault that carry at least one descriptor file.
//! Discovery walks the agents root, parses each descriptor it finds, and derives
//! a normalized [`AgentRecord`] per folder. Records are rebuilt from disk on
//! every pass and hold no state between passes.

pub mod discovery;
pub mod record;

pub use discovery::{discover_agents, is_reserved_dir_name, AgentDiscovery};
pub use record::{AgentRecord, ACTIVE_STATUS, DEFAULT_STATUS, DEFAULT_TIER};

/// Identity and personality descriptor; its body is the agent's system prompt.
pub const SOUL_FILE: &str = "SOUL.md";
/// Operational settings descriptor.
pub const CONFIG_FILE: &str = "CONFIG.md";
/// Liveness descriptor.
pub const HEARTBEAT_FILE: &str = "HEARTBEAT.md";

/// Folder names that are never traversed, in addition to dot-prefixed ones.
pub const EXCLUDED_DIRS: &[&str] = &["status", "reports"];
