//! Points in screen (pixel) coordinates.

mod point;

pub use nalgebra::Point2;
pub use point::CartesianPoint2d;

/// Screen point in pixels from the top-left corner of the map surface.
pub type Point2d = Point2<f64>;
