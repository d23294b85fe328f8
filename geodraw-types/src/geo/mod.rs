//! Geometries in geographic coordinates (latitude and longitude, see [`GeoPoint`]) and the
//! [`GeoBounds`] region that limits where they can be placed.

mod bounds;
mod point;

pub use bounds::GeoBounds;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
