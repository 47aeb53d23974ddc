use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusResponseBody {
    pub version: String,
    pub places_api: PlacesApiStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlacesApiStatus {
    pub url: String,
    pub radius: u32,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponseBody> {
    Json(StatusResponseBody {
        version: VERSION.to_string(),
        places_api: PlacesApiStatus {
            url: state.client.base_url().to_string(),
            radius: state.settings.places_api.radius,
        },
    })
}
