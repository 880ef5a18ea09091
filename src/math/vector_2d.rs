use super::{Real, Vector2};

/// Acute angle between two vectors, in `[0, pi]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so nearly parallel
/// vectors do not produce NaN. Returns `None` if either vector has zero
/// length.
#[must_use]
pub fn acute<T: Real>(a: &Vector2<T>, b: &Vector2<T>) -> Option<T> {
    let norms = a.norm() * b.norm();
    if norms <= T::zero() {
        return None;
    }
    let cos = (a.dot(b) / norms).clamp(-T::one(), T::one());
    Some(cos.acos())
}

/// Unit vector perpendicular to `v`, rotated +90 degrees.
#[must_use]
pub fn perpendicular<T: Real>(v: &Vector2<T>) -> Option<Vector2<T>> {
    Vector2::new(-v.y, v.x).try_normalize(T::TOLERANCE)
}
