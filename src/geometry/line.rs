use crate::math::{Point2, Point3, Real, Vector2, Vector3};

/// A line segment in 2D between endpoints `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment2<T: Real> {
    pub a: Point2<T>,
    pub b: Point2<T>,
}

impl<T: Real> LineSegment2<T> {
    #[must_use]
    pub fn new(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self {
            a: Point2::new(x0, y0),
            b: Point2::new(x1, y1),
        }
    }

    #[must_use]
    pub fn from_points(a: Point2<T>, b: Point2<T>) -> Self {
        Self { a, b }
    }

    /// Direction from `a` to `b`, not normalized.
    #[must_use]
    pub fn slope(&self) -> Vector2<T> {
        self.b - self.a
    }

    #[must_use]
    pub fn length(&self) -> T {
        self.slope().norm()
    }

    /// Squared length.
    #[must_use]
    pub fn length2(&self) -> T {
        self.slope().norm_squared()
    }
}

/// An infinite 2D line `p + t * slope`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParametric2<T: Real> {
    pub p: Point2<T>,
    pub slope: Vector2<T>,
}

impl<T: Real> LineParametric2<T> {
    #[must_use]
    pub fn new(x: T, y: T, slope_x: T, slope_y: T) -> Self {
        Self {
            p: Point2::new(x, y),
            slope: Vector2::new(slope_x, slope_y),
        }
    }

    #[must_use]
    pub fn from_point_slope(p: Point2<T>, slope: Vector2<T>) -> Self {
        Self { p, slope }
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: T) -> Point2<T> {
        self.p + self.slope * t
    }

    /// Angle of the slope measured from the +x axis.
    #[must_use]
    pub fn angle(&self) -> T {
        self.slope.y.atan2(self.slope.x)
    }

    /// Replaces the slope with a unit vector at `angle`.
    pub fn set_angle(&mut self, angle: T) {
        self.slope = Vector2::new(angle.cos(), angle.sin());
    }
}

/// A 2D line in implicit form `A*x + B*y + C = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeneral2<T: Real> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Real> LineGeneral2<T> {
    #[must_use]
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Value of `A*x + B*y + C`; zero on the line.
    #[must_use]
    pub fn evaluate(&self, x: T, y: T) -> T {
        self.a * x + self.b * y + self.c
    }
}

/// A line segment in 3D between endpoints `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment3<T: Real> {
    pub a: Point3<T>,
    pub b: Point3<T>,
}

impl<T: Real> LineSegment3<T> {
    #[must_use]
    pub fn new(a: Point3<T>, b: Point3<T>) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn slope(&self) -> Vector3<T> {
        self.b - self.a
    }

    #[must_use]
    pub fn length(&self) -> T {
        self.slope().norm()
    }

    #[must_use]
    pub fn length2(&self) -> T {
        self.slope().norm_squared()
    }
}

/// An infinite 3D line `p + t * slope`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParametric3<T: Real> {
    pub p: Point3<T>,
    pub slope: Vector3<T>,
}

impl<T: Real> LineParametric3<T> {
    #[must_use]
    pub fn new(p: Point3<T>, slope: Vector3<T>) -> Self {
        Self { p, slope }
    }

    #[must_use]
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.p + self.slope * t
    }
}

impl<T: Real> Default for LineParametric3<T> {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::zeros())
    }
}
