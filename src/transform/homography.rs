use tracing::trace;

use crate::math::{Matrix3, Point2, Real};

/// A 2D projective transform stored as a 3x3 matrix `H`.
///
/// Points map as `H * (x, y, 1)` followed by division by the third
/// component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homography2<T: Real> {
    pub h: Matrix3<T>,
}

impl<T: Real> Homography2<T> {
    #[must_use]
    pub fn new(h: Matrix3<T>) -> Self {
        Self { h }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity())
    }

    /// Maps `p`, or returns `None` when it lands on the line at infinity.
    #[must_use]
    pub fn transform(&self, p: &Point2<T>) -> Option<Point2<T>> {
        self.transform_xy(p.x, p.y)
    }

    #[must_use]
    pub fn transform_xy(&self, x: T, y: T) -> Option<Point2<T>> {
        let v = self.h * nalgebra::Vector3::new(x, y, T::one());
        if v.z.abs() <= T::TOLERANCE {
            trace!(w = ?v.z, "point maps to infinity");
            return None;
        }
        Some(Point2::new(v.x / v.z, v.y / v.z))
    }

    /// Writes the mapped point into `out`; false, with `out` untouched, when
    /// it lands at infinity.
    pub fn transform_into(&self, p: &Point2<T>, out: &mut Point2<T>) -> bool {
        self.transform(p).map(|q| *out = q).is_some()
    }

    /// The transform equivalent to applying `self` and then `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self::new(other.h * self.h)
    }

    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        self.h.try_inverse().map(Self::new)
    }
}

impl<T: Real> Default for Homography2<T> {
    fn default() -> Self {
        Self::identity()
    }
}
