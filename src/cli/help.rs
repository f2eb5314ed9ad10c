//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Stable command name recorded on the command span.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Sync { .. } => "sync",
        Commands::Watch { .. } => "watch",
        Commands::List { .. } => "list",
    }
}
