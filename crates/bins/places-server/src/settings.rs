use serde::Deserialize;

use luegle_config::{ConfigError, LuegleConfig};
use places_client::PlacesApiConfig;
use serde_helpers::{default_service_host, default_service_port};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug, clap::Parser)]
#[command(
name = "places-server",
about = "REST API in front of the places API",
version = VERSION,
author = AUTHORS
)]
pub struct Opts {
    /// Override settings values using key=value
    #[arg(short = 's', long = "setting", num_args = 0..)]
    pub settings: Vec<String>,

    /// Key of the places API, takes precedence over `places_api.key`
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub places_api: PlacesApiConfig,
    #[serde(default)]
    pub service: Service,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    /// Host on which we expose the API. Example: '127.0.0.1', '0.0.0.0'
    #[serde(default = "default_service_host")]
    pub host: String,
    /// Port on which we expose the API.
    #[serde(default = "default_service_port")]
    pub port: u16,
}

impl Default for Service {
    fn default() -> Self {
        Service {
            host: default_service_host(),
            port: default_service_port(),
        }
    }
}

impl LuegleConfig for Settings {
    const ENV_PREFIX: &'static str = "PLACES_SERVER";

    fn file_sources() -> Vec<&'static str> {
        vec!["places-api.toml", "places-server.toml"]
    }
}

impl Settings {
    pub fn new(opts: &Opts) -> Result<Self, ConfigError> {
        let mut settings = Settings::get(&opts.settings)?;
        if let Some(key) = &opts.api_key {
            settings.places_api.key = Some(key.clone());
        }
        Ok(settings)
    }
}
