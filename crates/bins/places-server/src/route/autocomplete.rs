use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use places_client::dto::AutocompleteResponse;

use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
    /// Text typed so far by the user
    pub input: String,
}

#[instrument(skip(state))]
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<AutocompleteResponse>, AppError> {
    let response = state.client.autocomplete(&params.input).await?;
    Ok(Json(response))
}
