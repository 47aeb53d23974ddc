use std::fmt;
use std::time::Duration;

use luegle_config::LuegleConfig;
use serde::Deserialize;

use serde_helpers::{
    default_nearby_radius, default_places_api_url, default_timeout, deserialize_duration,
};

#[derive(Clone, Deserialize)]
pub struct PlacesApiConfig {
    /// Base url of the places web API, the operation path is appended to it.
    #[serde(default = "default_places_api_url")]
    pub url: String,
    /// Radius in meters of the nearby search around the requested location.
    #[serde(default = "default_nearby_radius")]
    pub radius: u32,
    /// Timeout in milliseconds on calls to the places API.
    #[serde(
        default = "default_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub timeout: Duration,
    #[serde(default)]
    pub key: Option<String>,
}

impl PlacesApiConfig {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl Default for PlacesApiConfig {
    fn default() -> Self {
        PlacesApiConfig {
            url: default_places_api_url(),
            radius: default_nearby_radius(),
            timeout: default_timeout(),
            key: None,
        }
    }
}

// Keeps the api key out of logs.
impl fmt::Debug for PlacesApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesApiConfig")
            .field("url", &self.url)
            .field("radius", &self.radius)
            .field("timeout", &self.timeout)
            .field("key", &self.key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl LuegleConfig for PlacesApiConfig {
    const ENV_PREFIX: &'static str = "PLACES";

    fn file_sources() -> Vec<&'static str> {
        vec!["places-api.toml"]
    }

    fn root_key() -> Option<&'static str> {
        Some("places_api")
    }
}
