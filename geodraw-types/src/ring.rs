//! Rings are ordered point sequences describing a polygon boundary.
//!
//! Unlike a contour, which never repeats its first point, a ring follows the OGC `LineString`
//! convention: it is closed when the last point is exactly equal to the first one. A valid
//! polygon ring therefore has at least four points, three distinct vertices plus the repeated
//! closing vertex.

use crate::error::GeodrawTypesError;
use crate::geo::GeoPoint;

/// Minimum number of points in a closed polygon ring, including the closing point.
pub const MIN_CLOSED_RING_LEN: usize = 4;

/// Minimum number of distinct vertices of a polygon.
pub const MIN_DISTINCT_VERTICES: usize = 3;

/// Returns true if the ring has at least two points and its last point equals the first one.
pub fn is_closed<P: PartialEq>(ring: &[P]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => ring.len() > 1 && first == last,
        _ => false,
    }
}

/// Number of pairwise distinct points in the ring.
pub fn distinct_vertices<P: PartialEq>(ring: &[P]) -> usize {
    ring.iter()
        .enumerate()
        .filter(|&(index, point)| !ring[..index].contains(point))
        .count()
}

/// Appends a copy of the first point if the ring is not closed yet.
///
/// Returns true if a point was added. Empty rings and rings already closed are left unchanged.
pub fn close<P: PartialEq + Copy>(ring: &mut Vec<P>) -> bool {
    match ring.first() {
        Some(&first) if !is_closed(ring) => {
            ring.push(first);
            true
        }
        _ => false,
    }
}

/// Checks that the ring can be stored as a polygon boundary.
///
/// The ring must be closed, contain at least [`MIN_CLOSED_RING_LEN`] points with at least
/// [`MIN_DISTINCT_VERTICES`] distinct ones, and consist of finite coordinates only.
pub fn validate<P: GeoPoint + PartialEq>(ring: &[P]) -> Result<(), GeodrawTypesError> {
    if ring.len() < MIN_CLOSED_RING_LEN {
        return Err(GeodrawTypesError::InvalidRing(format!(
            "ring has {} points, at least {MIN_CLOSED_RING_LEN} are required",
            ring.len()
        )));
    }

    if !is_closed(ring) {
        return Err(GeodrawTypesError::InvalidRing(
            "last point of the ring is not equal to the first one".into(),
        ));
    }

    if ring.iter().any(|p| !p.is_finite()) {
        return Err(GeodrawTypesError::InvalidRing(
            "ring contains non-finite coordinates".into(),
        ));
    }

    let distinct = distinct_vertices(ring);
    if distinct < MIN_DISTINCT_VERTICES {
        return Err(GeodrawTypesError::InvalidRing(format!(
            "ring has {distinct} distinct vertices, at least {MIN_DISTINCT_VERTICES} are required"
        )));
    }

    Ok(())
}
