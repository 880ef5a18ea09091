use crate::math::{Point3, Real, Vector3};

/// A plane through point `p` with normal `n`.
///
/// The normal does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneNormal3<T: Real> {
    pub p: Point3<T>,
    pub n: Vector3<T>,
}

impl<T: Real> PlaneNormal3<T> {
    #[must_use]
    pub fn new(p: Point3<T>, n: Vector3<T>) -> Self {
        Self { p, n }
    }
}

/// A plane in general form `A*x + B*y + C*z = D`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneGeneral3<T: Real> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: Real> PlaneGeneral3<T> {
    #[must_use]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// The `(A, B, C)` coefficients as a vector.
    #[must_use]
    pub fn normal(&self) -> Vector3<T> {
        Vector3::new(self.a, self.b, self.c)
    }
}

/// A plane described by its point closest to the origin.
///
/// That point is also the plane's normal direction, so a plane through the
/// origin cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneTangent3<T: Real> {
    pub t: Point3<T>,
}

impl<T: Real> PlaneTangent3<T> {
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self {
            t: Point3::new(x, y, z),
        }
    }
}
