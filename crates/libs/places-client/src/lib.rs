pub mod dto;
pub mod errors;
pub mod remote;
pub mod settings;

pub use errors::PlacesClientError;
pub use remote::{GooglePlacesClient, NearbyQuery, NearbySearch};
pub use settings::PlacesApiConfig;
