use config::{Config, ConfigError, Environment, File};
use healthlog_models::settings::Settings;

/// Reads `appsettings.toml`, then `appsettings.local.toml` if present, then
/// `APP__SECTION__KEY` environment variables.
pub fn load() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("appsettings").required(true))
        .add_source(File::with_name("appsettings.local").required(false))
        .add_source(Environment::with_prefix("APP").prefix_separator("__").separator("__"))
        .build()?;

    settings.try_deserialize()
}
