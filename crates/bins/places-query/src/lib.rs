//! Command line arguments, settings and the fetch-then-filter flow of places-query.

use serde::Deserialize;
use snafu::{ResultExt, Snafu};
use tracing::{info, warn};

use luegle_config::{ConfigError, LuegleConfig};
use places::errors::Error as PlacesError;
use places::{filter_values, BoundingBox, Coord, PlaceRecord};
use places_client::{
    GooglePlacesClient, NearbyQuery, NearbySearch, PlacesApiConfig, PlacesClientError,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Settings (Configuration or CLI) Error: {}", source))]
    Settings { source: ConfigError },

    #[snafu(display("Places API Client Error: {}", source))]
    Client { source: PlacesClientError },

    #[snafu(display("Nearby Search Error: {}", source))]
    NearbySearch { source: PlacesClientError },

    #[snafu(display("Place Records Error: {}", source))]
    Records { source: PlacesError },

    #[snafu(display("Output Serialization Error: {}", source))]
    Output { source: serde_json::Error },
}

#[derive(Debug, Clone, clap::Parser)]
#[command(
name = "places-query",
about = "Lists the places located within a bounding box",
version = VERSION,
author = AUTHORS
)]
pub struct Opts {
    /// Latitude of the southwest corner
    #[arg(allow_hyphen_values = true)]
    pub southwest_lat: f64,

    /// Longitude of the southwest corner
    #[arg(allow_hyphen_values = true)]
    pub southwest_lng: f64,

    /// Latitude of the northeast corner
    #[arg(allow_hyphen_values = true)]
    pub northeast_lat: f64,

    /// Longitude of the northeast corner
    #[arg(allow_hyphen_values = true)]
    pub northeast_lng: f64,

    /// Key of the places API
    #[arg(allow_hyphen_values = true)]
    pub api_key: String,

    /// Override settings values using key=value
    #[arg(short = 's', long = "setting")]
    pub settings: Vec<String>,

    /// Activate debug logs
    #[arg(short, long)]
    pub debug: bool,
}

impl Opts {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            Coord::new(self.southwest_lat, self.southwest_lng),
            Coord::new(self.northeast_lat, self.northeast_lng),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub places_api: PlacesApiConfig,
}

impl LuegleConfig for Settings {
    const ENV_PREFIX: &'static str = "PLACES_QUERY";

    fn file_sources() -> Vec<&'static str> {
        vec!["places-api.toml"]
    }
}

impl Settings {
    pub fn new(opts: &Opts) -> Result<Self, Error> {
        Settings::get(&opts.settings).context(SettingsSnafu)
    }
}

pub async fn run(opts: &Opts, settings: Settings) -> Result<Vec<PlaceRecord>, Error> {
    let config = settings.places_api.with_key(opts.api_key.clone());
    let radius = config.radius;
    let client = GooglePlacesClient::new(config).context(ClientSnafu)?;

    places_within(&client, &opts.bounding_box(), radius).await
}

/// Searches around the southwest corner of `bbox`, then keeps the places
/// inside `bbox`. The radius does not depend on the size of the box.
pub async fn places_within<S>(
    search: &S,
    bbox: &BoundingBox,
    radius: u32,
) -> Result<Vec<PlaceRecord>, Error>
where
    S: NearbySearch + ?Sized,
{
    let diagonal = bbox.diagonal_meters();
    if diagonal > f64::from(radius) {
        warn!(
            diagonal = diagonal.round(),
            radius, "the nearby search does not cover the whole bounding box"
        );
    }

    let query = NearbyQuery::new(bbox.southwest, radius);
    let results = search
        .nearby_places(&query)
        .await
        .context(NearbySearchSnafu)?;
    info!(count = results.len(), "places fetched");

    let places = filter_values(results, bbox).context(RecordsSnafu)?;
    info!(count = places.len(), "places within the bounding box");

    Ok(places)
}

pub fn render(places: &[PlaceRecord]) -> Result<String, Error> {
    serde_json::to_string_pretty(places).context(OutputSnafu)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use clap::Parser;
    use serde_json::{json, Value};
    use speculoos::prelude::*;

    use super::*;

    struct FakeSearch {
        results: Vec<Value>,
        queries: Mutex<Vec<NearbyQuery>>,
    }

    impl FakeSearch {
        fn new(results: Vec<Value>) -> Self {
            FakeSearch {
                results,
                queries: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl NearbySearch for FakeSearch {
        async fn nearby_places(
            &self,
            query: &NearbyQuery,
        ) -> Result<Vec<Value>, PlacesClientError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(self.results.clone())
        }
    }

    fn place(name: &str, lat: f64, lng: f64) -> Value {
        json!({
            "name": name,
            "geometry": { "location": { "lat": lat, "lng": lng } }
        })
    }

    fn manhattan() -> BoundingBox {
        BoundingBox::new(Coord::new(40.70, -74.01), Coord::new(40.75, -73.95))
    }

    #[tokio::test]
    async fn should_search_around_southwest_corner_with_fixed_radius() -> anyhow::Result<()> {
        let search = FakeSearch::new(vec![]);

        places_within(&search, &manhattan(), 50_000).await?;

        let queries = search.queries.lock().unwrap();
        assert_that!(*queries).is_equal_to(vec![NearbyQuery::new(
            Coord::new(40.70, -74.01),
            50_000,
        )]);
        Ok(())
    }

    #[tokio::test]
    async fn should_keep_only_places_inside_the_box() -> anyhow::Result<()> {
        let search = FakeSearch::new(vec![
            place("inside", 40.72, -73.98),
            place("too far north", 40.80, -73.98),
            place("too far west", 40.72, -74.05),
        ]);

        let places = places_within(&search, &manhattan(), 50_000).await?;

        let names: Vec<_> = places.iter().filter_map(PlaceRecord::name).collect();
        assert_that!(names).is_equal_to(vec!["inside"]);
        Ok(())
    }

    #[tokio::test]
    async fn should_render_empty_list_without_results() -> anyhow::Result<()> {
        let search = FakeSearch::new(vec![]);

        let places = places_within(&search, &manhattan(), 50_000).await?;

        assert_that!(render(&places)?).is_equal_to("[]".to_string());
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_record_without_location() {
        let search = FakeSearch::new(vec![
            place("inside", 40.72, -73.98),
            json!({ "name": "broken", "geometry": {} }),
        ]);

        let res = places_within(&search, &manhattan(), 50_000).await;

        assert!(matches!(
            res,
            Err(Error::Records {
                source: PlacesError::MalformedRecord { index: 1, .. }
            })
        ));
    }

    #[test]
    fn should_parse_negative_coordinates() -> anyhow::Result<()> {
        let opts = Opts::try_parse_from([
            "places-query",
            "40.70",
            "-74.01",
            "40.75",
            "-73.95",
            "my-key",
        ])?;

        assert_that!(opts.bounding_box()).is_equal_to(manhattan());
        assert_that!(opts.api_key).is_equal_to("my-key".to_string());
        Ok(())
    }

    #[test]
    fn should_parse_any_float_notation() -> anyhow::Result<()> {
        let opts = Opts::try_parse_from([
            "places-query",
            "-.5",
            "-1e-3",
            "1e1",
            "-0",
            "-key-with-dash",
        ])?;

        assert_that!(opts.southwest_lat).is_equal_to(-0.5);
        assert_that!(opts.southwest_lng).is_equal_to(-0.001);
        assert_that!(opts.northeast_lat).is_equal_to(10.0);
        assert_that!(opts.northeast_lng).is_equal_to(0.0);
        assert_that!(opts.api_key).is_equal_to("-key-with-dash".to_string());
        Ok(())
    }

    #[test]
    fn should_parse_settings_after_positionals() -> anyhow::Result<()> {
        let opts = Opts::try_parse_from([
            "places-query",
            "-.5",
            "-1",
            "2",
            "3",
            "k",
            "-d",
            "-s",
            "places_api.radius=10",
        ])?;

        assert_that!(opts.debug).is_true();
        assert_that!(opts.settings).is_equal_to(vec!["places_api.radius=10".to_string()]);
        Ok(())
    }

    #[test]
    fn should_reject_non_numeric_coordinate() {
        let res = Opts::try_parse_from(["places-query", "north", "-74.01", "40.75", "-73.95", "k"]);
        assert!(res.is_err());
    }

    #[test]
    fn should_use_default_radius_without_settings() -> anyhow::Result<()> {
        let opts = Opts::try_parse_from([
            "places-query",
            "1",
            "2",
            "3",
            "4",
            "k",
            "-s",
            "places_api.timeout=500",
        ])?;

        let settings = Settings::new(&opts)?;

        assert_that!(settings.places_api.radius).is_equal_to(50_000);
        assert_that!(settings.places_api.timeout)
            .is_equal_to(std::time::Duration::from_millis(500));
        Ok(())
    }
}
