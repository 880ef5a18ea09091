use nalgebra::Rotation3;

use super::Affine2;
use crate::math::{Matrix3, Matrix4, Point2, Point3, Real, Vector2, Vector3};

/// A 2D rigid transform: rotation by a yaw angle followed by a translation.
///
/// The yaw is stored as its cosine and sine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Se2<T: Real> {
    pub t: Vector2<T>,
    pub c: T,
    pub s: T,
}

impl<T: Real> Se2<T> {
    #[must_use]
    pub fn new(x: T, y: T, yaw: T) -> Self {
        let (s, c) = yaw.sin_cos();
        Self {
            t: Vector2::new(x, y),
            c,
            s,
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self {
            t: Vector2::zeros(),
            c: T::one(),
            s: T::zero(),
        }
    }

    #[must_use]
    pub fn yaw(&self) -> T {
        self.s.atan2(self.c)
    }

    pub fn set_yaw(&mut self, yaw: T) {
        (self.s, self.c) = yaw.sin_cos();
    }

    /// Applies `R * p + T`.
    #[must_use]
    pub fn transform(&self, p: &Point2<T>) -> Point2<T> {
        Point2::new(
            self.c * p.x - self.s * p.y + self.t.x,
            self.s * p.x + self.c * p.y + self.t.y,
        )
    }

    pub fn transform_into(&self, p: &Point2<T>, out: &mut Point2<T>) {
        *out = self.transform(p);
    }

    /// Applies the inverse transform `R^T * (p - T)`.
    #[must_use]
    pub fn transform_reverse(&self, p: &Point2<T>) -> Point2<T> {
        let dx = p.x - self.t.x;
        let dy = p.y - self.t.y;
        Point2::new(self.c * dx + self.s * dy, -self.s * dx + self.c * dy)
    }

    pub fn transform_reverse_into(&self, p: &Point2<T>, out: &mut Point2<T>) {
        *out = self.transform_reverse(p);
    }

    /// Transforms every point in place.
    pub fn transform_slice(&self, points: &mut [Point2<T>]) {
        for p in points {
            *p = self.transform(p);
        }
    }

    /// The transform equivalent to applying `self` and then `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            t: Vector2::new(
                other.c * self.t.x - other.s * self.t.y + other.t.x,
                other.s * self.t.x + other.c * self.t.y + other.t.y,
            ),
            c: other.c * self.c - other.s * self.s,
            s: other.s * self.c + other.c * self.s,
        }
    }

    pub fn concat_into(&self, other: &Self, out: &mut Self) {
        *out = self.concat(other);
    }

    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            t: Vector2::new(
                -(self.c * self.t.x + self.s * self.t.y),
                self.s * self.t.x - self.c * self.t.y,
            ),
            c: self.c,
            s: -self.s,
        }
    }

    pub fn invert_into(&self, out: &mut Self) {
        *out = self.invert();
    }

    /// 3x3 homogeneous matrix `[R T; 0 1]`.
    #[must_use]
    #[rustfmt::skip]
    pub fn to_homogeneous(&self) -> Matrix3<T> {
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(
            self.c, -self.s, self.t.x,
            self.s,  self.c, self.t.y,
            o,       o,      l,
        )
    }

    /// Reads rotation and translation back out of a homogeneous matrix.
    ///
    /// The rotation is taken from the first column, so the upper-left block
    /// must be a rotation for the result to be meaningful.
    #[must_use]
    pub fn from_homogeneous(h: &Matrix3<T>) -> Self {
        Self {
            t: Vector2::new(h[(0, 2)], h[(1, 2)]),
            c: h[(0, 0)],
            s: h[(1, 0)],
        }
    }

    #[must_use]
    pub fn to_affine(&self) -> Affine2<T> {
        Affine2::new(self.c, -self.s, self.s, self.c, self.t.x, self.t.y)
    }
}

impl<T: Real> Default for Se2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// A 3D rigid transform `p' = R * p + T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Se3<T: Real> {
    pub r: Matrix3<T>,
    pub t: Vector3<T>,
}

impl<T: Real> Se3<T> {
    #[must_use]
    pub fn new(r: Matrix3<T>, t: Vector3<T>) -> Self {
        Self { r, t }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// Builds a transform from Euler angles and a translation.
    ///
    /// The rotation is `Rz(rot_z) * Ry(rot_y) * Rx(rot_x)`: rotate about x
    /// first, then y, then z.
    #[must_use]
    pub fn from_euler_xyz(rot_x: T, rot_y: T, rot_z: T, t: Vector3<T>) -> Self {
        let r = Rotation3::from_euler_angles(rot_x, rot_y, rot_z);
        Self::new(r.into_inner(), t)
    }

    #[must_use]
    pub fn transform(&self, p: &Point3<T>) -> Point3<T> {
        Point3::from(self.r * p.coords + self.t)
    }

    pub fn transform_into(&self, p: &Point3<T>, out: &mut Point3<T>) {
        *out = self.transform(p);
    }

    /// Applies the inverse transform `R^T * (p - T)`.
    #[must_use]
    pub fn transform_reverse(&self, p: &Point3<T>) -> Point3<T> {
        Point3::from(self.r.tr_mul(&(p.coords - self.t)))
    }

    pub fn transform_reverse_into(&self, p: &Point3<T>, out: &mut Point3<T>) {
        *out = self.transform_reverse(p);
    }

    pub fn transform_slice(&self, points: &mut [Point3<T>]) {
        for p in points {
            *p = self.transform(p);
        }
    }

    /// The transform equivalent to applying `self` and then `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self::new(other.r * self.r, other.r * self.t + other.t)
    }

    pub fn concat_into(&self, other: &Self, out: &mut Self) {
        *out = self.concat(other);
    }

    /// Inverse transform. Assumes `r` is orthonormal.
    #[must_use]
    pub fn invert(&self) -> Self {
        let rt = self.r.transpose();
        let t = -(rt * self.t);
        Self::new(rt, t)
    }

    pub fn invert_into(&self, out: &mut Self) {
        *out = self.invert();
    }

    /// 4x4 homogeneous matrix `[R T; 0 1]`.
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix4<T> {
        let mut h = Matrix4::identity();
        h.fixed_view_mut::<3, 3>(0, 0).copy_from(&self.r);
        h.fixed_view_mut::<3, 1>(0, 3).copy_from(&self.t);
        h
    }

    #[must_use]
    pub fn from_homogeneous(h: &Matrix4<T>) -> Self {
        Self::new(
            h.fixed_view::<3, 3>(0, 0).into_owned(),
            h.fixed_view::<3, 1>(0, 3).into_owned(),
        )
    }
}

impl<T: Real> Default for Se3<T> {
    fn default() -> Self {
        Self::identity()
    }
}
