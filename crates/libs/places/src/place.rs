use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::coord::Coord;
use crate::errors::{Error, Result};

/// One entry of the `results` array of a nearby search.
///
/// Only `geometry.location` is interpreted. The provider's JSON is kept as
/// received and serialized back unchanged, keys and numbers included.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceRecord {
    location: Coord,
    raw: Value,
}

#[derive(Deserialize)]
struct Located {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Coord,
}

impl PlaceRecord {
    /// Reads a raw result. `index` is the position of the value in the batch,
    /// and is reported if the record has no usable location.
    pub fn from_value(index: usize, value: Value) -> Result<Self> {
        let located = Located::deserialize(&value)
            .map_err(|source| Error::MalformedRecord { index, source })?;
        Ok(PlaceRecord {
            location: located.geometry.location,
            raw: value,
        })
    }

    pub fn coord(&self) -> &Coord {
        &self.location
    }

    pub fn name(&self) -> Option<&str> {
        self.raw.get("name").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }
}

impl Serialize for PlaceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Converts a batch of raw results. The first malformed record fails the
/// whole batch.
pub fn records_from_values(values: Vec<Value>) -> Result<Vec<PlaceRecord>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| PlaceRecord::from_value(index, value))
        .collect()
}
