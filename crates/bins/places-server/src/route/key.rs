use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsKeyResponse {
    pub google_maps_api_key: String,
}

/// Hands the key to the browser map frontend.
pub async fn google_maps_key(State(state): State<AppState>) -> Json<MapsKeyResponse> {
    Json(MapsKeyResponse {
        google_maps_api_key: state.client.key().to_string(),
    })
}
