//! Value types shared by the `geodraw` crates.
//!
//! * [`geo`] contains points in geographic coordinates ([`GeoPoint2d`](geo::GeoPoint2d)) and the
//!   [`GeoBounds`](geo::GeoBounds) box that limits where points may be placed.
//! * [`cartesian`] contains screen-space points, as produced by projecting geographic points onto
//!   the map surface.
//! * [`ring`] contains validation helpers for closed polygon rings.

pub mod cartesian;
pub mod error;
pub mod geo;
pub mod ring;

pub use error::GeodrawTypesError;
