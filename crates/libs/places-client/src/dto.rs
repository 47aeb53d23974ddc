use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a nearby search answer. Results are kept raw, they are only
/// checked when turned into `PlaceRecord`s.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Statuses for which the provider still answers normally.
pub fn is_success_status(status: Option<&str>) -> bool {
    matches!(status, None | Some("OK") | Some("ZERO_RESULTS"))
}
