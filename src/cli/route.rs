//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::agent::discover_agents;
use crate::cli::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_agent_list_json, format_agent_list_text, format_sync_report_json,
    format_sync_report_text,
};
use crate::config::{SyncConfig, SyncContext};
use crate::error::SyncError;
use crate::sync::run_pass;
use crate::watch::{WatchConfig, WatchDaemon};
use std::time::{Duration, Instant};
use tracing::info;

/// Runtime context for CLI execution, resolved once from the layered config.
pub struct RunContext {
    ctx: SyncContext,
}

impl RunContext {
    /// Validate the configuration and resolve every path; fails fast on a bad vault path.
    pub fn new(config: &SyncConfig) -> Result<Self, SyncError> {
        let ctx = config.resolve()?;
        info!(
            vault = %ctx.vault_root.display(),
            state_dir = %ctx.state_dir.display(),
            runtime_config = %ctx.config_path.display(),
            "Resolved sync context"
        );
        Ok(Self { ctx })
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SyncError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, SyncError> {
        match command {
            Commands::Sync { format } => {
                let report = run_pass(&self.ctx)?;
                match format {
                    OutputFormat::Json => format_sync_report_json(&report),
                    OutputFormat::Text => Ok(format_sync_report_text(&report)),
                }
            }
            Commands::Watch { debounce_ms } => {
                let mut config = WatchConfig::for_context(&self.ctx);
                if let Some(ms) = debounce_ms {
                    config.debounce = Duration::from_millis(*ms);
                }
                let daemon = WatchDaemon::new(self.ctx.clone(), config);
                daemon.start()?;
                Ok("Watch stopped.".to_string())
            }
            Commands::List { format } => {
                let agents = discover_agents(&self.ctx.agents_root);
                match format {
                    OutputFormat::Json => format_agent_list_json(&agents),
                    OutputFormat::Text => Ok(format_agent_list_text(&agents)),
                }
            }
        }
    }
}
