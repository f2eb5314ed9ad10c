//! CLI parse: clap types for vaultsync. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vaultsync CLI - reconcile vault agent descriptors into the runtime config
#[derive(Parser)]
#[command(name = "vaultsync")]
#[command(about = "Reconcile agent descriptor folders into a runtime JSON config")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault root holding the agents folder
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Runtime state directory (default: ~/.openclaw)
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Runtime config file (default: <state-dir>/openclaw.json)
    #[arg(long, global = true)]
    pub runtime_config: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one reconciliation pass and exit
    Sync {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run one pass, then re-sync whenever the agents tree changes
    Watch {
        /// Quiet period before a change triggers a pass (overrides sync.debounce_ms)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// Discover agents and print them without writing anything
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
