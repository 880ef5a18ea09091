use tracing::trace;

use super::{lit, Point2, Real};
use crate::geometry::{EllipseQuadratic, EllipseRotated};

/// Converts a rotated ellipse into its quadratic coefficients.
///
/// The result is scaled so that it evaluates to `-1` at the center.
#[must_use]
pub fn rotated_to_quadratic<T: Real>(input: &EllipseRotated<T>) -> EllipseQuadratic<T> {
    let (st, ct) = input.phi.sin_cos();
    let inv_a2 = T::one() / (input.a * input.a);
    let inv_b2 = T::one() / (input.b * input.b);
    let (x0, y0) = (input.center.x, input.center.y);

    let a = ct * ct * inv_a2 + st * st * inv_b2;
    let b = ct * st * (inv_a2 - inv_b2);
    let c = st * st * inv_a2 + ct * ct * inv_b2;
    let d = -(a * x0 + b * y0);
    let e = -(b * x0 + c * y0);
    let two: T = lit(2.0);
    let f = a * x0 * x0 + two * b * x0 * y0 + c * y0 * y0 - T::one();

    EllipseQuadratic::new(a, b, c, d, e, f)
}

pub fn rotated_to_quadratic_into<T: Real>(input: &EllipseRotated<T>, out: &mut EllipseQuadratic<T>) {
    *out = rotated_to_quadratic(input);
}

/// Recovers center, semi-axes and orientation from quadratic coefficients.
///
/// `a >= b` in the result and `phi` lies in `(-pi/2, pi/2]`; a circle gets
/// `phi = 0`. Returns `None` if the conic is not a real ellipse.
#[must_use]
pub fn quadratic_to_rotated<T: Real>(input: &EllipseQuadratic<T>) -> Option<EllipseRotated<T>> {
    let EllipseQuadratic { a, b, c, d, e, f } = *input;

    let det = a * c - b * b;
    if det <= T::zero() {
        trace!(?det, "conic is not an ellipse");
        return None;
    }
    let x0 = (b * e - c * d) / det;
    let y0 = (b * d - a * e) / det;

    let k = -(f + d * x0 + e * y0);
    if k.abs() <= T::TOLERANCE {
        trace!(?k, "ellipse collapsed to its center");
        return None;
    }

    let half: T = lit(0.5);
    let mean = (a + c) * half;
    let diff = (a - c) * half;
    let radius = (diff * diff + b * b).sqrt();
    let lambda_min = (mean - radius) / k;
    let lambda_max = (mean + radius) / k;
    if lambda_min <= T::zero() {
        return None;
    }

    let two: T = lit(2.0);
    let phi = half * (-two * b).atan2(c - a);

    Some(EllipseRotated::new(
        x0,
        y0,
        T::one() / lambda_min.sqrt(),
        T::one() / lambda_max.sqrt(),
        phi,
    ))
}

/// Writes the rotated form into `out`; false, with `out` untouched, if the
/// conic is not an ellipse.
pub fn quadratic_to_rotated_into<T: Real>(input: &EllipseQuadratic<T>, out: &mut EllipseRotated<T>) -> bool {
    quadratic_to_rotated(input).map(|r| *out = r).is_some()
}

/// Point on the ellipse at parametric angle `t`.
#[must_use]
pub fn compute_point<T: Real>(t: T, ellipse: &EllipseRotated<T>) -> Point2<T> {
    let (st, ct) = t.sin_cos();
    let (sp, cp) = ellipse.phi.sin_cos();
    let (ac, bs) = (ellipse.a * ct, ellipse.b * st);
    Point2::new(
        ellipse.center.x + ac * cp - bs * sp,
        ellipse.center.y + ac * sp + bs * cp,
    )
}

pub fn compute_point_into<T: Real>(t: T, ellipse: &EllipseRotated<T>, out: &mut Point2<T>) {
    *out = compute_point(t, ellipse);
}

/// `(x'/a)^2 + (y'/b)^2` in the ellipse's own frame: 1 on the curve, below 1
/// inside.
#[must_use]
pub fn evaluate_rotated<T: Real>(x: T, y: T, ellipse: &EllipseRotated<T>) -> T {
    let (sp, cp) = ellipse.phi.sin_cos();
    let dx = x - ellipse.center.x;
    let dy = y - ellipse.center.y;
    let u = (dx * cp + dy * sp) / ellipse.a;
    let v = (dy * cp - dx * sp) / ellipse.b;
    u * u + v * v
}

/// Value of the quadratic form at `(x, y)`: zero on the curve.
#[must_use]
pub fn evaluate_quadratic<T: Real>(x: T, y: T, ellipse: &EllipseQuadratic<T>) -> T {
    let EllipseQuadratic { a, b, c, d, e, f } = *ellipse;
    let two: T = lit(2.0);
    a * x * x + two * b * x * y + c * y * y + two * d * x + two * e * y + f
}
