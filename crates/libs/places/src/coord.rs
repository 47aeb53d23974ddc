use std::fmt;
use std::str::FromStr;

use geo_types::Point;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::errors::Error;

/// A (latitude, longitude) pair in degrees, as the places API spells it.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Validate, Default)]
pub struct Coord {
    #[validate(range(min = -90.0, max = 90.0))]
    lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    lng: f64,
}

impl Coord {
    /// Creates a new coordinate without checking its range
    pub fn new<T: Into<f64>>(lat: T, lng: T) -> Self {
        Coord {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Tries to create a new coordinate and validate the latitude and longitude attributes
    pub fn try_new<T: Into<f64>>(lat: T, lng: T) -> Result<Self, ValidationErrors> {
        let coord = Coord::new(lat, lng);
        coord.validate()?;
        Ok(coord)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

// The places API expects `location={lat},{lng}`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCoordinateFormat {
            input: s.to_string(),
        };

        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let lng = lng.trim().parse::<f64>().map_err(|_| invalid())?;

        Ok(Coord::try_new(lat, lng)?)
    }
}

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lng: value.x,
        }
    }
}

impl From<Coord> for geo_types::Coord<f64> {
    fn from(value: Coord) -> geo_types::Coord<f64> {
        geo_types::Coord::from((value.lng, value.lat))
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Point {
        Point::new(coord.lng, coord.lat)
    }
}
