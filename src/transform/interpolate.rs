use nalgebra::Rotation3;
use tracing::debug;

use super::Se3;
use crate::math::{Matrix3, Real, Vector3};

/// Interpolates between two rigid transforms at constant angular and linear
/// velocity.
///
/// The relative rotation is decomposed once into axis-angle form when the
/// endpoints are set; each [`interpolate`](Self::interpolate) call only
/// scales the angle. The relative rotation must be below 180 degrees, beyond
/// that the decomposition picks the shorter way round and the motion turns
/// in the opposite direction.
#[derive(Debug, Clone)]
pub struct InterpolateLinearSe3<T: Real> {
    initial: Se3<T>,
    axis: Vector3<T>,
    angle: T,
    delta_t: Vector3<T>,
}

impl<T: Real> InterpolateLinearSe3<T> {
    #[must_use]
    pub fn new(initial: &Se3<T>, end: &Se3<T>) -> Self {
        let mut out = Self {
            initial: *initial,
            axis: Vector3::z(),
            angle: T::zero(),
            delta_t: Vector3::zeros(),
        };
        out.set_transforms(initial, end);
        out
    }

    /// Replaces both endpoints and recomputes the cached motion.
    pub fn set_transforms(&mut self, initial: &Se3<T>, end: &Se3<T>) {
        self.initial = *initial;
        self.delta_t = end.t - initial.t;

        let relative = initial.r.tr_mul(&end.r);
        match Rotation3::from_matrix_unchecked(relative).axis_angle() {
            Some((axis, angle)) => {
                self.axis = axis.into_inner();
                self.angle = angle;
            }
            None => {
                self.axis = Vector3::z();
                self.angle = T::zero();
            }
        }
        debug!(angle = ?self.angle, "interpolating rigid motion");
    }

    /// Transform at fraction `t` of the way from the initial to the end
    /// transform; `t` is normally in `[0, 1]`.
    #[must_use]
    pub fn interpolate(&self, t: T) -> Se3<T> {
        let step = rodrigues(&self.axis, self.angle * t);
        Se3::new(self.initial.r * step, self.initial.t + self.delta_t * t)
    }

    pub fn interpolate_into(&self, t: T, out: &mut Se3<T>) {
        *out = self.interpolate(t);
    }
}

/// Rotation matrix about a unit axis by an angle.
#[allow(clippy::many_single_char_names)]
#[rustfmt::skip]
fn rodrigues<T: Real>(axis: &Vector3<T>, angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let k = T::one() - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix3::new(
        k * x * x + c,     k * x * y - s * z, k * x * z + s * y,
        k * x * y + s * z, k * y * y + c,     k * y * z - s * x,
        k * x * z - s * y, k * y * z + s * x, k * z * z + c,
    )
}
