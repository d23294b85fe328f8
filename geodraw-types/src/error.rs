//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodrawTypesError {
    /// Bounds limits are not finite or are inverted (south above north, west east of east).
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
    /// A ring cannot be used as a polygon boundary.
    #[error("invalid ring: {0}")]
    InvalidRing(String),
}
