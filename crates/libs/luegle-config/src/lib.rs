use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use thiserror::Error;

const DEV_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../config");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    ConfigCompilation(#[from] config::ConfigError),

    #[error("Expected '=' separator in config override '{0}'")]
    MalformedConfigOverride(String),
}

pub fn config_dir() -> PathBuf {
    let config_dir = PathBuf::from("/etc/luegle/");
    if config_dir.exists() {
        config_dir
    } else {
        PathBuf::from(DEV_CONFIG_PATH)
    }
}

/// Settings read, by increasing priority, from the TOML files of the config
/// directory, from `<ENV_PREFIX>__*` environment variables, and from
/// `key=value` overrides given on the command line.
///
/// Files are optional: a missing file is skipped, so every field without a
/// serde default must come from the environment or an override.
pub trait LuegleConfig: DeserializeOwned {
    const ENV_PREFIX: &'static str;

    fn file_sources() -> Vec<&'static str> {
        vec![]
    }

    fn root_key() -> Option<&'static str> {
        None
    }

    fn get(overrides: &[String]) -> Result<Self, ConfigError> {
        let mut override_sources = vec![];
        for value in overrides {
            if !value.contains('=') {
                return Err(ConfigError::MalformedConfigOverride(value.clone()));
            }

            // "url='http://localhost'" -> "places_api.url='http://localhost'"
            let value = match Self::root_key() {
                None => value.clone(),
                Some(key) => format!("{key}.{value}"),
            };

            override_sources.push(File::from_str(&value, FileFormat::Toml));
        }

        let dir = config_dir();
        let file_sources: Vec<File<_, _>> = Self::file_sources()
            .iter()
            .map(|path| File::from(dir.join(path)).required(false))
            .collect();

        tracing::debug!(dir = %dir.display(), files = ?Self::file_sources(), "loading configuration");

        let config = Config::builder()
            .add_source(file_sources)
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .separator("__")
                    .prefix_separator("__"),
            )
            .add_source(override_sources)
            .build()?;

        match Self::root_key() {
            None => Ok(config.try_deserialize()?),
            Some(key) => Ok(config.get::<Self>(key)?),
        }
    }
}
