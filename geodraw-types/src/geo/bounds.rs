use serde::{Deserialize, Serialize};

use crate::error::GeodrawTypesError;
use crate::geo::{GeoPoint, GeoPoint2d, NewGeoPoint};

/// Rectangular region in geographic coordinates.
///
/// All four limits are inclusive: a point lying exactly on the boundary is inside the region.
/// Bounds never cross the antimeridian, so `west <= east` always holds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundsLimits")]
pub struct GeoBounds {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

#[derive(Deserialize)]
struct BoundsLimits {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

impl TryFrom<BoundsLimits> for GeoBounds {
    type Error = GeodrawTypesError;

    fn try_from(value: BoundsLimits) -> Result<Self, Self::Error> {
        Self::new(value.north, value.south, value.east, value.west)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::WORLD
    }
}

impl GeoBounds {
    /// The whole globe.
    pub const WORLD: GeoBounds = GeoBounds {
        north: 90.0,
        south: -90.0,
        east: 180.0,
        west: -180.0,
    };

    /// Approximate territory of Bolivia.
    pub const BOLIVIA: GeoBounds = GeoBounds {
        north: -9.68,
        south: -22.9,
        east: -57.45,
        west: -69.64,
    };

    /// Creates new bounds from the four limits in degrees.
    ///
    /// Fails if any limit is not finite, if `south > north` or if `west > east`.
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, GeodrawTypesError> {
        if !(north.is_finite() && south.is_finite() && east.is_finite() && west.is_finite()) {
            return Err(GeodrawTypesError::InvalidBounds(
                "limits must be finite numbers".into(),
            ));
        }

        if south > north {
            return Err(GeodrawTypesError::InvalidBounds(format!(
                "south ({south}) is above north ({north})"
            )));
        }

        if west > east {
            return Err(GeodrawTypesError::InvalidBounds(format!(
                "west ({west}) is east of east ({east})"
            )));
        }

        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Creates bounds from the south-west and north-east corners.
    pub fn from_corners(
        south_west: &impl GeoPoint<Num = f64>,
        north_east: &impl GeoPoint<Num = f64>,
    ) -> Result<Self, GeodrawTypesError> {
        Self::new(
            north_east.lat(),
            south_west.lat(),
            north_east.lon(),
            south_west.lon(),
        )
    }

    /// Maximum latitude.
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Minimum latitude.
    pub fn south(&self) -> f64 {
        self.south
    }

    /// Maximum longitude.
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Minimum longitude.
    pub fn west(&self) -> f64 {
        self.west
    }

    /// Center point of the region.
    pub fn center(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Returns true if the point is inside the region or on its boundary.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        self.south <= point.lat()
            && point.lat() <= self.north
            && self.west <= point.lon()
            && point.lon() <= self.east
    }
}
