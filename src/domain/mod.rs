mod distance;
mod geo_coordinate;
mod place;

pub use distance::{Distance, DistanceUnit, MILES_PER_KM};
pub use geo_coordinate::{CoordinateParseError, GeoCoordinate};
pub use place::Place;
