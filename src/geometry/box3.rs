use crate::math::{lit, Point3, Real, Vector3};

/// An axis-aligned box in 3D given by its lower corner `p0` and upper corner `p1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3<T: Real> {
    pub p0: Point3<T>,
    pub p1: Point3<T>,
}

impl<T: Real> Box3<T> {
    #[must_use]
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self { p0, p1 }
    }

    /// Side lengths along x, y and z.
    #[must_use]
    pub fn lengths(&self) -> Vector3<T> {
        self.p1 - self.p0
    }

    #[must_use]
    pub fn volume(&self) -> T {
        let l = self.lengths();
        l.x * l.y * l.z
    }

    #[must_use]
    pub fn center(&self) -> Point3<T> {
        nalgebra::center(&self.p0, &self.p1)
    }

    /// Writes the center into `out`.
    pub fn center_into(&self, out: &mut Point3<T>) {
        let half: T = lit(0.5);
        out.coords = (self.p0.coords + self.p1.coords) * half;
    }
}

impl<T: Real> Default for Box3<T> {
    fn default() -> Self {
        Self::new(Point3::origin(), Point3::origin())
    }
}
