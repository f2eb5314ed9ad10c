//! Vaultsync CLI Binary
//!
//! Command-line interface for reconciling vault agent descriptors into the
//! runtime config.

use clap::Parser;
use std::process;
use tracing::{debug, info};
use vaultsync::cli::{map_error, Cli, RunContext};
use vaultsync::config::SyncConfig;
use vaultsync::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Configuration errors are fatal before logging exists; report on stderr.
    let config = match SyncConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(
            cli.vault.clone(),
            cli.state_dir.clone(),
            cli.runtime_config.clone(),
        ),
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Vaultsync starting");

    let context = match RunContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!("Invalid configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the config file section and CLI flags.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.level = "off".to_string();
        return config;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }

    // Explicit flags win over --verbose and the config file.
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file_override = Some(file.clone());
    }

    config
}
