use serde::de::Deserializer;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PLACES_API_URL: &str = "https://maps.googleapis.com/maps/api/place";
/// Radius of the nearby search, whatever the size of the requested box.
pub const DEFAULT_NEARBY_RADIUS: u32 = 50_000;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SERVICE_PORT: u16 = 3000;

pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let ms: u64 = Deserialize::deserialize(deserializer)?;
    Ok(Duration::from_millis(ms))
}

pub fn default_places_api_url() -> String {
    DEFAULT_PLACES_API_URL.to_string()
}

pub fn default_nearby_radius() -> u32 {
    DEFAULT_NEARBY_RADIUS
}

pub fn default_timeout() -> Duration {
    Duration::from_millis(DEFAULT_TIMEOUT_MS)
}

pub fn default_service_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_service_port() -> u16 {
    DEFAULT_SERVICE_PORT
}
