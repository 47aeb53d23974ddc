use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlacesClientError>;

#[derive(Debug, Error)]
pub enum PlacesClientError {
    #[error("Places API request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid places API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Places API url '{0}' cannot be a base url")]
    CannotBeABase(String),

    #[error("No places API key configured")]
    MissingApiKey,
}
