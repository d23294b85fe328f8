//! Error types used by the crate.

use geodraw_types::GeodrawTypesError;
use thiserror::Error;

use crate::draw::PolygonId;
use crate::surface::MarkerId;

/// Geodraw error type.
///
/// None of the errors is fatal for an [`EditSession`](crate::draw::EditSession): after any of
/// them the session stays usable in its current state or returns to idle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodrawError {
    /// A point or a marker drag target lies outside of the drawing bounds.
    #[error("point ({lat}, {lon}) is outside of the allowed region")]
    OutOfBounds {
        /// Latitude of the rejected point.
        lat: f64,
        /// Longitude of the rejected point.
        lon: f64,
    },
    /// Polygon with the given id is not in the store.
    #[error("polygon {0} not found")]
    NotFound(PolygonId),
    /// Ring cannot be stored as a polygon boundary.
    #[error("invalid ring: {0}")]
    InvalidRing(String),
    /// Marker is not bound to any point of the working ring.
    #[error("marker {0:?} is not part of the working ring")]
    UnknownMarker(MarkerId),
    /// Commit was requested while no polygon is being edited.
    #[error("no polygon is being edited")]
    NotEditing,
    /// Closure resolution was requested while no closure is pending.
    #[error("no closure is waiting for confirmation")]
    NoPendingClosure,
    /// The session is waiting for closure confirmation or is editing, and cannot accept the
    /// request.
    #[error("session is busy")]
    SessionBusy,
    /// String is not a valid polygon id.
    #[error("invalid polygon id: {0}")]
    UnparsableId(String),
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl From<GeodrawTypesError> for GeodrawError {
    fn from(value: GeodrawTypesError) -> Self {
        match value {
            GeodrawTypesError::InvalidRing(reason) => Self::InvalidRing(reason),
            GeodrawTypesError::InvalidBounds(reason) => Self::Configuration(reason),
        }
    }
}
