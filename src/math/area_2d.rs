use super::{lit, Point2, Real};
use crate::geometry::{Polygon2, Quadrilateral};

/// Unsigned area of the triangle `a, b, c`.
///
/// `|a.x(b.y - c.y) + b.x(c.y - a.y) + c.x(a.y - b.y)| / 2`, zero for
/// collinear points.
#[must_use]
pub fn triangle<T: Real>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    let inner = a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y);
    let half: T = lit(0.5);
    (inner * half).abs()
}

/// Area of a simple quadrilateral, split along diagonal `b-d`.
///
/// Self-intersecting input is not detected and gives a meaningless value.
#[must_use]
pub fn quadrilateral<T: Real>(quad: &Quadrilateral<T>) -> T {
    triangle(&quad.a, &quad.b, &quad.d) + triangle(&quad.b, &quad.c, &quad.d)
}

/// Area of a convex polygon by fan triangulation from vertex 0.
///
/// Every triangle shares vertex 0, `(v0, v[i-1], v[i])`. Summing consecutive
/// triples `(v[i-2], v[i-1], v[i])` instead agrees only up to four vertices
/// and is not used. Concave or self-intersecting polygons give a wrong result without error.
#[must_use]
pub fn polygon_convex<T: Real>(poly: &Polygon2<T>) -> T {
    let v = poly.vertices();
    let mut total = T::zero();
    for i in 2..v.len() {
        total += triangle(&v[0], &v[i - 1], &v[i]);
    }
    total
}

/// Signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise order in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area<T: Real>(points: &[Point2<T>]) -> T {
    let n = points.len();
    if n < 3 {
        return T::zero();
    }
    let mut sum = T::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * lit::<T>(0.5)
}
