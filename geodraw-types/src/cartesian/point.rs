use nalgebra::{Point2, Scalar, Vector2};
use num_traits::Float;

/// Point in 2d cartesian space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Float + Scalar;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }

    /// Euclidean distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Float + Scalar> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}
