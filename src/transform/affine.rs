use crate::math::{Matrix3, Point2, Real};

/// A 2D affine transform `p' = A * p + T`, with `A = [a11 a12; a21 a22]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<T: Real> {
    pub a11: T,
    pub a12: T,
    pub a21: T,
    pub a22: T,
    pub tx: T,
    pub ty: T,
}

impl<T: Real> Affine2<T> {
    #[must_use]
    pub fn new(a11: T, a12: T, a21: T, a22: T, tx: T, ty: T) -> Self {
        Self {
            a11,
            a12,
            a21,
            a22,
            tx,
            ty,
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    #[must_use]
    pub fn transform(&self, p: &Point2<T>) -> Point2<T> {
        Point2::new(
            self.a11 * p.x + self.a12 * p.y + self.tx,
            self.a21 * p.x + self.a22 * p.y + self.ty,
        )
    }

    pub fn transform_into(&self, p: &Point2<T>, out: &mut Point2<T>) {
        *out = self.transform(p);
    }

    /// The transform equivalent to applying `self` and then `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self::new(
            other.a11 * self.a11 + other.a12 * self.a21,
            other.a11 * self.a12 + other.a12 * self.a22,
            other.a21 * self.a11 + other.a22 * self.a21,
            other.a21 * self.a12 + other.a22 * self.a22,
            other.a11 * self.tx + other.a12 * self.ty + other.tx,
            other.a21 * self.tx + other.a22 * self.ty + other.ty,
        )
    }

    /// Inverse transform, or `None` if `A` is singular.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let det = self.a11 * self.a22 - self.a12 * self.a21;
        if det.abs() <= T::TOLERANCE {
            return None;
        }
        let (b11, b12) = (self.a22 / det, -self.a12 / det);
        let (b21, b22) = (-self.a21 / det, self.a11 / det);
        Some(Self::new(
            b11,
            b12,
            b21,
            b22,
            -(b11 * self.tx + b12 * self.ty),
            -(b21 * self.tx + b22 * self.ty),
        ))
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn to_homogeneous(&self) -> Matrix3<T> {
        let (o, l) = (T::zero(), T::one());
        Matrix3::new(
            self.a11, self.a12, self.tx,
            self.a21, self.a22, self.ty,
            o,        o,        l,
        )
    }
}

impl<T: Real> Default for Affine2<T> {
    fn default() -> Self {
        Self::identity()
    }
}
