use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use places::{filter_values, BoundingBox, Coord, PlaceRecord};
use places_client::dto::NearbySearchResponse;
use places_client::{NearbyQuery, NearbySearch};

use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    /// `{lat},{lng}`
    pub center: String,
    /// Meters, defaults to the configured radius.
    pub radius: Option<u32>,
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WithinParams {
    #[validate(range(min = -90.0, max = 90.0))]
    pub southwest_lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub southwest_lng: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub northeast_lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub northeast_lng: f64,
}

impl WithinParams {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            Coord::new(self.southwest_lat, self.southwest_lng),
            Coord::new(self.northeast_lat, self.northeast_lng),
        )
    }
}

/// Forwards a nearby search and answers with the provider's body.
#[instrument(skip(state))]
pub async fn nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<NearbySearchResponse>, AppError> {
    let center: Coord = params.center.parse()?;
    let radius = params.radius.unwrap_or(state.settings.places_api.radius);
    let query = NearbyQuery::new(center, radius).with_keyword(params.keyword);

    let response = state.client.nearby_search(&query).await?;
    Ok(Json(response))
}

/// Places of the bounding box, searched around its southwest corner.
#[instrument(skip(state))]
pub async fn within(
    State(state): State<AppState>,
    Query(params): Query<WithinParams>,
) -> Result<Json<Vec<PlaceRecord>>, AppError> {
    params.validate()?;
    let bbox = params.bounding_box();

    let query = NearbyQuery::new(bbox.southwest, state.settings.places_api.radius);
    let results = state.client.nearby_places(&query).await?;
    let places = filter_values(results, &bbox)?;

    Ok(Json(places))
}
