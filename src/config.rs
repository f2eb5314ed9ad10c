//! Configuration System
//!
//! Layered configuration for the sync tool: built-in defaults, an optional global
//! TOML file, `VAULTSYNC_*` environment variables, and finally CLI overrides.
//! [`SyncConfig::resolve`] validates the result once at startup and produces the
//! immutable [`SyncContext`] that every component receives by reference.

use crate::error::SyncError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root::{config_home, expand_home, home_dir};

/// Directory name under the home directory used when no state dir is given.
pub const DEFAULT_STATE_DIR_NAME: &str = ".openclaw";
/// Runtime config file name inside the state directory.
pub const DEFAULT_RUNTIME_CONFIG_FILE: &str = "openclaw.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Vault root holding the agents folder (required)
    #[serde(default)]
    pub vault_path: Option<PathBuf>,

    /// Runtime state directory (defaults to ~/.openclaw)
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Runtime config file (defaults to <state_dir>/openclaw.json)
    #[serde(default)]
    pub config_path: Option<PathBuf>,

    /// Discovery and watch settings
    #[serde(default)]
    pub sync: SyncSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Discovery and watch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Agents folder, relative to the vault root
    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,

    /// Sync manifest file, relative to the vault root
    #[serde(default = "default_manifest_file")]
    pub manifest_file: PathBuf,

    /// Quiet period before a watch-triggered pass runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from("agents")
}

fn default_manifest_file() -> PathBuf {
    PathBuf::from(".sync-manifest.json")
}

fn default_debounce_ms() -> u64 {
    2000
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            agents_dir: default_agents_dir(),
            manifest_file: default_manifest_file(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SyncSettings {
    /// Validate sync settings
    pub fn validate(&self) -> Result<(), String> {
        if self.agents_dir.as_os_str().is_empty() {
            return Err("Agents dir cannot be empty".to_string());
        }
        if self.manifest_file.as_os_str().is_empty() {
            return Err("Manifest file cannot be empty".to_string());
        }
        if self.manifest_file.is_absolute() || self.agents_dir.is_absolute() {
            return Err("Agents dir and manifest file must be relative to the vault".to_string());
        }
        Ok(())
    }
}

/// Resolved paths and settings for one process lifetime.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Canonical vault root
    pub vault_root: PathBuf,
    /// Discovery root (`<vault>/agents` by default)
    pub agents_root: PathBuf,
    /// Runtime state directory
    pub state_dir: PathBuf,
    /// Runtime config document rewritten by each pass
    pub config_path: PathBuf,
    /// Sync manifest written after each pass
    pub manifest_path: PathBuf,
    /// Home directory captured at startup, used for `~/` expansion
    pub home_dir: Option<PathBuf>,
    /// Watch debounce window
    pub debounce: Duration,
}

impl SyncContext {
    /// Default workspace for an agent without an explicit override.
    pub fn default_workspace(&self, agent_id: &str) -> PathBuf {
        self.state_dir.join(format!("workspace-{}", agent_id))
    }
}

impl SyncConfig {
    /// Apply CLI overrides; `None` leaves the loaded value untouched.
    pub fn with_overrides(
        mut self,
        vault_path: Option<PathBuf>,
        state_dir: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Self {
        if vault_path.is_some() {
            self.vault_path = vault_path;
        }
        if state_dir.is_some() {
            self.state_dir = state_dir;
        }
        if config_path.is_some() {
            self.config_path = config_path;
        }
        self
    }

    /// Validate the configuration and resolve every path.
    ///
    /// Fails when the vault path is unset or does not point at a directory.
    pub fn resolve(&self) -> Result<SyncContext, SyncError> {
        self.sync.validate().map_err(SyncError::ConfigError)?;

        let home = home_dir();
        let vault = self
            .vault_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(SyncError::VaultPathMissing)?;
        let vault = expand_home(vault, home.as_deref());
        if !vault.is_dir() {
            return Err(SyncError::VaultNotFound(vault));
        }
        let vault_root = dunce::canonicalize(&vault).map_err(|e| {
            SyncError::ConfigError(format!(
                "Failed to canonicalize vault path {}: {}",
                vault.display(),
                e
            ))
        })?;

        let state_dir = match &self.state_dir {
            Some(dir) => expand_home(dir, home.as_deref()),
            None => home
                .as_deref()
                .map(|h| h.join(DEFAULT_STATE_DIR_NAME))
                .ok_or_else(|| {
                    SyncError::ConfigError(
                        "Could not determine state directory (HOME not set). Set VAULTSYNC_STATE_DIR."
                            .to_string(),
                    )
                })?,
        };
        let config_path = match &self.config_path {
            Some(path) => expand_home(path, home.as_deref()),
            None => state_dir.join(DEFAULT_RUNTIME_CONFIG_FILE),
        };

        Ok(SyncContext {
            agents_root: vault_root.join(&self.sync.agents_dir),
            manifest_path: vault_root.join(&self.sync.manifest_file),
            vault_root,
            state_dir,
            config_path,
            home_dir: home,
            debounce: Duration::from_millis(self.sync.debounce_ms),
        })
    }

    /// Load layered configuration, honoring an explicit config file when given.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SyncError> {
        let config = match config_file {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(config)
    }
}
