use config::{Config, Environment, File};
use std::path::PathBuf;

use crate::{AppConfig, ConfigError, Result};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "kyber.toml";

/// Prefix for environment overrides, e.g. `KYBER__DATABASE__URL`.
pub const ENV_PREFIX: &str = "KYBER";

pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
    load_config_with_prefix(path, ENV_PREFIX)
}

/// Loads configuration from `path` (or [`DEFAULT_CONFIG_PATH`]) with
/// environment overrides under `env_prefix`. A missing file is not an error.
pub fn load_config_with_prefix(path: Option<&str>, env_prefix: &str) -> Result<AppConfig> {
    let mut builder = Config::builder();
    let pathbuf = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_PATH));
    if pathbuf.exists() {
        builder = builder.add_source(File::from(pathbuf));
    }
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .try_parsing(true)
            .separator("__"),
    );
    let cfg = builder
        .build()
        .map_err(|e| ConfigError::parse(format!("config build error: {e}")))?;
    let merged: AppConfig = cfg
        .try_deserialize()
        .map_err(|e| ConfigError::parse(format!("config deserialize error: {e}")))?;
    merged.validate()?;
    Ok(merged)
}
