//! Vaultsync: Vault Agent Reconciliation
//!
//! Discovers agent descriptor folders in a vault, parses their `---` delimited
//! headers, and upserts the active agents into a runtime JSON config without
//! disturbing unrelated state. A watch mode re-runs the pass after debounced
//! filesystem changes.

pub mod agent;
pub mod atomic;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod runtime_config;
pub mod sync;
pub mod watch;
pub mod workspace;
