use geodraw_types::cartesian::{CartesianPoint2d, Point2d};

/// Decides whether two screen points are close enough to be considered the same spot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProximityDetector {
    tolerance: f64,
}

impl ProximityDetector {
    /// Creates a detector with the tolerance radius in pixels.
    ///
    /// Negative or non-finite tolerance is replaced by `0.0`, so that only exactly coinciding
    /// points are near each other.
    pub fn new(tolerance: f64) -> Self {
        let tolerance = if tolerance.is_finite() && tolerance >= 0.0 {
            tolerance
        } else {
            log::warn!("Invalid proximity tolerance {tolerance}, using 0");
            0.0
        };

        Self { tolerance }
    }

    /// Tolerance radius in pixels.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if the euclidean distance between the points does not exceed the tolerance.
    pub fn is_near(&self, a: &Point2d, b: &Point2d) -> bool {
        a.distance_sq(b) <= self.tolerance * self.tolerance
    }
}
