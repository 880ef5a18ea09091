use super::{Point3, Real};
use crate::error::{GeometryError, Result};
use crate::geometry::{PlaneGeneral3, PlaneNormal3, PlaneTangent3};

/// Converts a plane from point-normal form into `A*x + B*y + C*z = D`.
#[must_use]
pub fn normal_to_general<T: Real>(input: &PlaneNormal3<T>) -> PlaneGeneral3<T> {
    let n = &input.n;
    PlaneGeneral3::new(n.x, n.y, n.z, n.dot(&input.p.coords))
}

pub fn normal_to_general_into<T: Real>(input: &PlaneNormal3<T>, out: &mut PlaneGeneral3<T>) {
    *out = normal_to_general(input);
}

/// Converts a plane from general form into point-normal form.
///
/// The point is the plane's closest point to the origin. The normal is
/// `(A, B, C)` unscaled.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `A = B = C = 0`.
pub fn general_to_normal<T: Real>(input: &PlaneGeneral3<T>) -> Result<PlaneNormal3<T>> {
    let n = input.normal();
    let n2 = n.norm_squared();
    if n2 <= T::zero() {
        return Err(GeometryError::ZeroVector.into());
    }
    let p = Point3::from(n * (input.d / n2));
    Ok(PlaneNormal3::new(p, n))
}

/// Writes the point-normal form of `input` into `out`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `A = B = C = 0`; `out` is left
/// unchanged.
pub fn general_to_normal_into<T: Real>(input: &PlaneGeneral3<T>, out: &mut PlaneNormal3<T>) -> Result<()> {
    *out = general_to_normal(input)?;
    Ok(())
}

/// Converts a tangent-form plane into point-normal form. The tangent point
/// serves as both.
#[must_use]
pub fn tangent_to_normal<T: Real>(input: &PlaneTangent3<T>) -> PlaneNormal3<T> {
    PlaneNormal3::new(input.t, input.t.coords)
}

pub fn tangent_to_normal_into<T: Real>(input: &PlaneTangent3<T>, out: &mut PlaneNormal3<T>) {
    *out = tangent_to_normal(input);
}

/// Evaluates `A*x + B*y + C*z - D`; zero on the plane.
#[must_use]
pub fn evaluate_general<T: Real>(plane: &PlaneGeneral3<T>, pt: &Point3<T>) -> T {
    plane.normal().dot(&pt.coords) - plane.d
}

/// Evaluates `n . (pt - p)`; zero on the plane.
#[must_use]
pub fn evaluate_normal<T: Real>(plane: &PlaneNormal3<T>, pt: &Point3<T>) -> T {
    plane.n.dot(&(pt - plane.p))
}

/// Scales the coefficients so that `(A, B, C)` has unit length.
///
/// [`evaluate_general`] then gives the signed distance to the plane.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `A = B = C = 0`.
pub fn hessian_normal_form<T: Real>(plane: &PlaneGeneral3<T>) -> Result<PlaneGeneral3<T>> {
    let norm = plane.normal().norm();
    if norm <= T::zero() {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(PlaneGeneral3::new(
        plane.a / norm,
        plane.b / norm,
        plane.c / norm,
        plane.d / norm,
    ))
}

/// Returns true if both planes describe the same set of points within `tol`.
///
/// Each plane is reduced to Hessian normal form so the comparison ignores
/// normal length, normal sign and which point was chosen on the plane.
/// Planes with a zero normal never compare equal.
#[must_use]
pub fn planes_equal<T: Real>(a: &PlaneNormal3<T>, b: &PlaneNormal3<T>, tol: T) -> bool {
    let (Ok(ga), Ok(gb)) = (
        hessian_normal_form(&normal_to_general(a)),
        hessian_normal_form(&normal_to_general(b)),
    ) else {
        return false;
    };
    let sign = if ga.normal().dot(&gb.normal()) < T::zero() {
        -T::one()
    } else {
        T::one()
    };
    (ga.a - sign * gb.a).abs() <= tol
        && (ga.b - sign * gb.b).abs() <= tol
        && (ga.c - sign * gb.c).abs() <= tol
        && (ga.d - sign * gb.d).abs() <= tol
}
