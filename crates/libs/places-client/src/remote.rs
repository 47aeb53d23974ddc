use std::fmt;

use async_trait::async_trait;
use places::Coord;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::dto::{is_success_status, AutocompleteResponse, NearbySearchResponse};
use crate::errors::{PlacesClientError, Result};
use crate::settings::PlacesApiConfig;

/// Parameters of a single nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub center: Coord,
    /// Meters
    pub radius: u32,
    pub keyword: Option<String>,
}

impl NearbyQuery {
    pub fn new(center: Coord, radius: u32) -> Self {
        NearbyQuery {
            center,
            radius,
            keyword: None,
        }
    }

    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|kw| !kw.is_empty());
        self
    }
}

#[async_trait]
pub trait NearbySearch {
    /// Raw `results` of a single page of a nearby search, empty if the
    /// provider sent none.
    async fn nearby_places(&self, query: &NearbyQuery) -> Result<Vec<Value>>;
}

#[derive(Clone)]
pub struct GooglePlacesClient {
    client: reqwest::Client,
    base_url: Url,
    key: String,
    pub config: PlacesApiConfig,
}

impl fmt::Debug for GooglePlacesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GooglePlacesClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish()
    }
}

impl GooglePlacesClient {
    pub fn new(config: PlacesApiConfig) -> Result<Self> {
        let key = config.key.clone().ok_or(PlacesClientError::MissingApiKey)?;
        let base_url = Url::parse(&config.url)?;
        if base_url.cannot_be_a_base() {
            return Err(PlacesClientError::CannotBeABase(config.url));
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(GooglePlacesClient {
            client,
            base_url,
            key,
            config,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/nearbysearch/json?location={lat},{lng}&radius={radius}[&keyword={kw}]&key={key}`
    pub fn nearby_search_url(&self, query: &NearbyQuery) -> Result<Url> {
        let mut url = self.operation_url("nearbysearch")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("location", &query.center.to_string())
                .append_pair("radius", &query.radius.to_string());
            if let Some(keyword) = &query.keyword {
                pairs.append_pair("keyword", keyword);
            }
            pairs.append_pair("key", &self.key);
        }
        Ok(url)
    }

    pub fn autocomplete_url(&self, input: &str) -> Result<Url> {
        let mut url = self.operation_url("autocomplete")?;
        url.query_pairs_mut()
            .append_pair("input", input)
            .append_pair("key", &self.key);
        Ok(url)
    }

    /// Whole answer of a nearby search. The HTTP status is not looked at, only
    /// the body.
    pub async fn nearby_search(&self, query: &NearbyQuery) -> Result<NearbySearchResponse> {
        let url = self.nearby_search_url(query)?;

        debug!(
            location = %query.center,
            radius = query.radius,
            keyword = query.keyword.as_deref().unwrap_or_default(),
            "nearby search"
        );

        let response: NearbySearchResponse = self.client.get(url).send().await?.json().await?;

        if !is_success_status(response.status.as_deref()) {
            warn!(
                status = response.status.as_deref().unwrap_or_default(),
                message = response.error_message.as_deref().unwrap_or_default(),
                "places API did not answer OK"
            );
        }
        debug!(count = response.results.len(), "nearby search results");

        Ok(response)
    }

    pub async fn autocomplete(&self, input: &str) -> Result<AutocompleteResponse> {
        let url = self.autocomplete_url(input)?;

        debug!(input, "autocomplete");

        let response: AutocompleteResponse = self.client.get(url).send().await?.json().await?;

        if !is_success_status(response.status.as_deref()) {
            warn!(
                status = response.status.as_deref().unwrap_or_default(),
                message = response.error_message.as_deref().unwrap_or_default(),
                "places API did not answer OK"
            );
        }

        Ok(response)
    }

    fn operation_url(&self, operation: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PlacesClientError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(&[operation, "json"]);
        Ok(url)
    }
}

#[async_trait]
impl NearbySearch for GooglePlacesClient {
    async fn nearby_places(&self, query: &NearbyQuery) -> Result<Vec<Value>> {
        Ok(self.nearby_search(query).await?.results)
    }
}
