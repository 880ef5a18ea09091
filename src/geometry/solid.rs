use crate::math::{Point3, Real, Vector3};

use super::LineParametric3;

/// An infinite cylinder: every point at distance `radius` from `line`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder3<T: Real> {
    pub line: LineParametric3<T>,
    pub radius: T,
}

impl<T: Real> Cylinder3<T> {
    #[must_use]
    pub fn new(line: LineParametric3<T>, radius: T) -> Self {
        Self { line, radius }
    }

    /// Creates a cylinder from axis point `(x, y, z)`, axis direction
    /// `(dx, dy, dz)` and radius.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn from_values(x: T, y: T, z: T, dx: T, dy: T, dz: T, radius: T) -> Self {
        Self {
            line: LineParametric3::new(Point3::new(x, y, z), Vector3::new(dx, dy, dz)),
            radius,
        }
    }
}

impl<T: Real> Default for Cylinder3<T> {
    fn default() -> Self {
        Self::new(LineParametric3::default(), T::zero())
    }
}

/// A sphere with `center` and `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere3<T: Real> {
    pub center: Point3<T>,
    pub radius: T,
}

impl<T: Real> Sphere3<T> {
    #[must_use]
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius }
    }
}

impl<T: Real> Default for Sphere3<T> {
    fn default() -> Self {
        Self::new(Point3::origin(), T::zero())
    }
}
