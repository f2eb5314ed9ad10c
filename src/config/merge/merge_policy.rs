//! Merge rules: defaults applied beneath every other source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("sync.agents_dir", "agents")?
        .set_default("sync.manifest_file", ".sync-manifest.json")?
        .set_default("sync.debounce_ms", 2000)
}
