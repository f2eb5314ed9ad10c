//! Runtime Config Merge
//!
//! The runtime config is a JSON document owned by the consuming runtime. A sync
//! pass only touches the agent list at `agents.list`: each active agent is
//! upserted by `id` with a deep merge, and every other key and entry is left as
//! it was found.

mod merge;
mod store;

pub use merge::{deep_merge, ensure_agent_list, partial_config, upsert_agent, UpsertOutcome};
pub use store::{load_runtime_config, save_runtime_config};

/// Top-level key holding agent settings.
pub const AGENTS_KEY: &str = "agents";
/// Key of the entry array inside `agents`.
pub const LIST_KEY: &str = "list";
/// Identity field of each list entry.
pub const ID_KEY: &str = "id";
/// Workspace field projected from CONFIG.md.
pub const WORKSPACE_KEY: &str = "workspace";
