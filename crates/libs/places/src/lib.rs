pub mod coord;
pub mod errors;
pub mod filter;
pub mod place;
pub mod rect;

pub use coord::Coord;
pub use filter::{filter_values, filter_within};
pub use place::PlaceRecord;
pub use rect::BoundingBox;
