use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::place::{records_from_values, PlaceRecord};
use crate::rect::BoundingBox;

/// Keeps the records located inside `bbox`, in their original order.
pub fn filter_within<I>(records: I, bbox: &BoundingBox) -> Vec<PlaceRecord>
where
    I: IntoIterator<Item = PlaceRecord>,
{
    records
        .into_iter()
        .filter(|record| {
            let inside = bbox.contains(record.coord());
            if !inside {
                debug!(
                    place = record.name().unwrap_or_default(),
                    location = %record.coord(),
                    "place outside of the bounding box"
                );
            }
            inside
        })
        .collect()
}

/// Reads raw results and filters them. Any record without a location fails
/// the whole batch, even if it would have been filtered out.
pub fn filter_values(values: Vec<Value>, bbox: &BoundingBox) -> Result<Vec<PlaceRecord>> {
    let records = records_from_values(values)?;
    Ok(filter_within(records, bbox))
}
