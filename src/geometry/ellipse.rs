use crate::math::{Point2, Real};

/// An ellipse given by its center, semi-axes and orientation.
///
/// `a` is the semi-major axis, `b` the semi-minor axis, and `phi` the angle
/// of the major axis from +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseRotated<T: Real> {
    pub center: Point2<T>,
    pub a: T,
    pub b: T,
    pub phi: T,
}

impl<T: Real> EllipseRotated<T> {
    #[must_use]
    pub fn new(x0: T, y0: T, a: T, b: T, phi: T) -> Self {
        Self {
            center: Point2::new(x0, y0),
            a,
            b,
            phi,
        }
    }
}

/// An ellipse as the zero set of `A*x² + 2B*x*y + C*y² + 2D*x + 2E*y + F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseQuadratic<T: Real> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub e: T,
    pub f: T,
}

impl<T: Real> EllipseQuadratic<T> {
    #[must_use]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T) -> Self {
        Self { a, b, c, d, e, f }
    }
}
