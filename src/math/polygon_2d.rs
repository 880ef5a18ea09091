use super::{cross_2d, lit, Point2, Real, Vector2};
use crate::error::{GeometryError, Result};
use crate::geometry::{Polygon2, Quadrilateral, Rectangle2, RectangleLength2};

/// Z component of `(a - b) x (c - b)`, the turn at the middle vertex `b`.
fn turn<T: Real>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> T {
    cross_2d(&(a - b), &(c - b))
}

/// Returns true if the polygon is convex, in either winding direction.
///
/// Counts the vertex triples with a strictly positive turn; the polygon is
/// convex when none or all of them are positive. Collinear triples count as
/// non-positive.
#[must_use]
pub fn is_convex<T: Real>(poly: &Polygon2<T>) -> bool {
    let v = poly.vertices();
    let n = v.len();
    let num_positive = (0..n)
        .filter(|&i| turn(&v[i], &v[(i + 1) % n], &v[(i + 2) % n]) > T::zero())
        .count();
    num_positive == 0 || num_positive == n
}

/// Returns true if the points are in counter-clockwise order.
///
/// Each triple votes +1 for a positive turn and -1 otherwise. The polygon is
/// CCW when the net vote is negative, so exactly collinear triples count
/// towards CCW; polygons with many collinear vertices can be misreported.
#[must_use]
pub fn is_ccw<T: Real>(points: &[Point2<T>]) -> bool {
    let n = points.len();
    let mut sign = 0i64;
    for i in 0..n {
        if turn(&points[i], &points[(i + 1) % n], &points[(i + 2) % n]) > T::zero() {
            sign += 1;
        } else {
            sign -= 1;
        }
    }
    sign < 0
}

/// Reverses the traversal direction while keeping vertex 0 in place.
///
/// Swaps vertex `i` with vertex `n - i` for `i` in `1..=n/2`.
pub fn reverse_order<T: Real>(poly: &mut Polygon2<T>) {
    let v = poly.vertices_mut();
    let n = v.len();
    for i in 1..=n / 2 {
        v.swap(i, n - i);
    }
}

/// Returns true if both polygons have the same vertices at the same indices,
/// up to `tol`.
#[must_use]
pub fn is_identical<T: Real>(a: &Polygon2<T>, b: &Polygon2<T>, tol: T) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let tol2 = tol * tol;
    a.vertices()
        .iter()
        .zip(b.vertices())
        .all(|(p, q)| nalgebra::distance_squared(p, q) <= tol2)
}

/// Returns true if the polygons have the same vertices up to `tol`, allowing
/// `b` to start at a different vertex of the same cycle.
///
/// The first vertex of `b` within `tol` of `a[0]` fixes the offset; the rest
/// must then line up cyclically from there.
#[must_use]
pub fn is_equivalent<T: Real>(a: &Polygon2<T>, b: &Polygon2<T>, tol: T) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let n = b.len();
    if n == 0 {
        return true;
    }
    let tol2 = tol * tol;

    let Some(offset) = b
        .vertices()
        .iter()
        .position(|q| nalgebra::distance_squared(&a[0], q) <= tol2)
    else {
        return false;
    };

    (1..n).all(|i| nalgebra::distance_squared(&a[i], &b[(offset + i) % n]) <= tol2)
}

/// Converts a rectangle into a quadrilateral with corners
/// `p0, (p1.x, p0.y), p1, (p0.x, p1.y)`.
#[must_use]
pub fn rectangle_to_quad<T: Real>(rect: &Rectangle2<T>) -> Quadrilateral<T> {
    let mut quad = Quadrilateral::default();
    rectangle_to_quad_into(rect, &mut quad);
    quad
}

/// Writes the corners of `rect` into `out`; see [`rectangle_to_quad`].
pub fn rectangle_to_quad_into<T: Real>(rect: &Rectangle2<T>, out: &mut Quadrilateral<T>) {
    out.a = rect.p0;
    out.b = Point2::new(rect.p1.x, rect.p0.y);
    out.c = rect.p1;
    out.d = Point2::new(rect.p0.x, rect.p1.y);
}

/// Converts a rectangle into a 4-vertex polygon with the same corner order
/// as [`rectangle_to_quad`].
#[must_use]
pub fn rectangle_to_polygon<T: Real>(rect: &Rectangle2<T>) -> Polygon2<T> {
    let q = rectangle_to_quad(rect);
    Polygon2::new(q.corners().to_vec())
}

/// Writes the corners of `rect` into an existing 4-vertex polygon.
///
/// # Errors
///
/// Returns `GeometryError::VertexCount` if `out` does not have 4 vertices.
pub fn rectangle_to_polygon_into<T: Real>(rect: &Rectangle2<T>, out: &mut Polygon2<T>) -> Result<()> {
    quad_to_polygon_into(&rectangle_to_quad(rect), out)
}

#[must_use]
pub fn quad_to_polygon<T: Real>(quad: &Quadrilateral<T>) -> Polygon2<T> {
    Polygon2::new(quad.corners().to_vec())
}

/// Copies the corners of `quad` into an existing 4-vertex polygon.
///
/// # Errors
///
/// Returns `GeometryError::VertexCount` if `out` does not have 4 vertices.
pub fn quad_to_polygon_into<T: Real>(quad: &Quadrilateral<T>, out: &mut Polygon2<T>) -> Result<()> {
    expect_four(out.len())?;
    out.vertices_mut().copy_from_slice(&quad.corners());
    Ok(())
}

/// Converts a 4-vertex polygon into a quadrilateral.
///
/// # Errors
///
/// Returns `GeometryError::VertexCount` if `poly` does not have 4 vertices.
pub fn polygon_to_quad<T: Real>(poly: &Polygon2<T>) -> Result<Quadrilateral<T>> {
    let mut quad = Quadrilateral::default();
    polygon_to_quad_into(poly, &mut quad)?;
    Ok(quad)
}

/// Copies a 4-vertex polygon into `out`.
///
/// # Errors
///
/// Returns `GeometryError::VertexCount` if `poly` does not have 4 vertices.
pub fn polygon_to_quad_into<T: Real>(poly: &Polygon2<T>, out: &mut Quadrilateral<T>) -> Result<()> {
    expect_four(poly.len())?;
    out.a = poly[0];
    out.b = poly[1];
    out.c = poly[2];
    out.d = poly[3];
    Ok(())
}

fn expect_four(found: usize) -> Result<()> {
    if found == 4 {
        Ok(())
    } else {
        Err(GeometryError::VertexCount { expected: 4, found }.into())
    }
}

/// Converts a pixel rectangle into a quadrilateral through the centers of its
/// corner pixels, so the far corner is `(x0 + width - 1, y0 + height - 1)`.
#[must_use]
pub fn rectangle_length_to_quad<T: Real>(rect: &RectangleLength2<i32>) -> Quadrilateral<T> {
    let x0: T = lit(f64::from(rect.x0));
    let y0: T = lit(f64::from(rect.y0));
    let x1: T = lit(f64::from(rect.x0) + f64::from(rect.width) - 1.0);
    let y1: T = lit(f64::from(rect.y0) + f64::from(rect.height) - 1.0);
    Quadrilateral::from_xy(x0, y0, x1, y0, x1, y1, x0, y1)
}

/// Smallest axis-aligned rectangle containing the quadrilateral.
#[must_use]
pub fn bounding<T: Real>(quad: &Quadrilateral<T>) -> Rectangle2<T> {
    let mut rect = Rectangle2::default();
    bounding_into(quad, &mut rect);
    rect
}

/// Writes the bounding rectangle of `quad` into `out`.
pub fn bounding_into<T: Real>(quad: &Quadrilateral<T>, out: &mut Rectangle2<T>) {
    *out = bounding_points(&quad.corners());
}

/// Smallest axis-aligned rectangle containing every vertex of `poly`.
///
/// An empty polygon gives a zero rectangle at the origin.
#[must_use]
pub fn bounding_polygon<T: Real>(poly: &Polygon2<T>) -> Rectangle2<T> {
    bounding_points(poly.vertices())
}

fn bounding_points<T: Real>(points: &[Point2<T>]) -> Rectangle2<T> {
    let Some((first, rest)) = points.split_first() else {
        return Rectangle2::default();
    };
    let mut rect = Rectangle2::from_corners(*first, *first);
    for p in rest {
        rect.p0.x = rect.p0.x.min(p.x);
        rect.p0.y = rect.p0.y.min(p.y);
        rect.p1.x = rect.p1.x.max(p.x);
        rect.p1.y = rect.p1.y.max(p.y);
    }
    rect
}

/// Average of the four corners.
#[must_use]
pub fn center<T: Real>(quad: &Quadrilateral<T>) -> Point2<T> {
    let mut out = Point2::origin();
    center_into(quad, &mut out);
    out
}

/// Writes the corner average of `quad` into `out`.
pub fn center_into<T: Real>(quad: &Quadrilateral<T>, out: &mut Point2<T>) {
    let sum = quad.a.coords + quad.b.coords + quad.c.coords + quad.d.coords;
    out.coords = sum / lit::<T>(4.0);
}

/// Average of all vertices of `poly`.
///
/// An empty polygon has no average and yields NaN coordinates.
#[must_use]
pub fn vertex_average<T: Real>(poly: &Polygon2<T>) -> Point2<T> {
    let mut out = Point2::origin();
    vertex_average_into(poly, &mut out);
    out
}

/// Writes the vertex average of `poly` into `out`.
#[allow(clippy::cast_precision_loss)]
pub fn vertex_average_into<T: Real>(poly: &Polygon2<T>, out: &mut Point2<T>) {
    out.coords = Vector2::zeros();
    for v in poly.vertices() {
        out.coords += v.coords;
    }
    out.coords /= lit::<T>(poly.len() as f64);
}
