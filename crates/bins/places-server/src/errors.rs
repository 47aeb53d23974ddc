use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use validator::ValidationErrors;

use places::errors::Error as PlacesError;
use places_client::PlacesClientError;

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(message: &str) -> Self {
        AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<PlacesClientError> for AppError {
    fn from(err: PlacesClientError) -> Self {
        tracing::error!("error with the places API: {err}");
        AppError::new(&format!("Error fetching data from the places API: {err}"))
    }
}

impl From<PlacesError> for AppError {
    fn from(err: PlacesError) -> Self {
        match err {
            PlacesError::MalformedRecord { .. } => {
                tracing::error!("unexpected places API answer: {err}");
                AppError::new(&err.to_string()).with_status(StatusCode::BAD_GATEWAY)
            }
            PlacesError::InvalidCoordinateFormat { .. } | PlacesError::InvalidCoordinates(_) => {
                AppError::new(&err.to_string()).with_status(StatusCode::BAD_REQUEST)
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::new(&format!("Invalid query: {errors}")).with_status(StatusCode::BAD_REQUEST)
    }
}
