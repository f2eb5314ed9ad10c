//! Environment variable source: VAULTSYNC_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment variable prefix shared by config keys and logging overrides.
pub const ENV_PREFIX: &str = "VAULTSYNC";

/// Add environment variable overlay to builder.
/// `VAULTSYNC_VAULT_PATH` sets `vault_path`; `__` separates nested keys, as in
/// `VAULTSYNC_SYNC__DEBOUNCE_MS`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
