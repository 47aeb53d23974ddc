use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed place record at index {index}: {source}")]
    MalformedRecord {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Invalid coordinate '{input}', expected '<lat>,<lng>'")]
    InvalidCoordinateFormat { input: String },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] ValidationErrors),
}
