use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Point on the surface of the Earth given by its latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Returns true if both coordinates are finite numbers.
    fn is_finite(&self) -> bool {
        self.lat().is_finite() && self.lon().is_finite()
    }
}

/// Geo point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude. This is the order used by GeoJSON and most
    /// map surfaces.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the surface of the Earth.
///
/// Points are compared by exact coordinate equality. A ring is closed when its last point is a
/// copy of the first one, so no tolerance is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another one.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }
}

impl From<(f64, f64)> for GeoPoint2d {
    /// Converts a `(longitude, latitude)` pair.
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint2d> for (f64, f64) {
    fn from(value: GeoPoint2d) -> Self {
        (value.lon, value.lat)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use geodraw_types::geo::GeoPoint;
/// use geodraw_types::latlon;
///
/// let point = latlon!(-16.29, -64.968);
/// assert_eq!(point.lat(), -16.29);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <::geodraw_types::geo::GeoPoint2d as ::geodraw_types::geo::NewGeoPoint<f64>>::latlon(
            $lat, $lon,
        )
    };
}
