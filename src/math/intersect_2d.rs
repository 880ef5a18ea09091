use tracing::trace;

use super::{cross_2d, Point2, Point3, Real, Vector2};
use crate::geometry::{
    LineGeneral2, LineParametric2, LineSegment2, Polygon2, Rectangle2, RectangleLength2,
};

/// Solves `p0 + t * d0 = p1 + u * d1` for `(t, u)`.
///
/// Returns `None` when the directions are parallel, including collinear
/// overlapping lines.
fn solve_lines<T: Real>(
    p0: &Point2<T>,
    d0: &Vector2<T>,
    p1: &Point2<T>,
    d1: &Vector2<T>,
) -> Option<(T, T)> {
    let det = cross_2d(d0, d1);
    if det.abs() <= T::TOLERANCE {
        trace!(?det, "parallel lines, no intersection");
        return None;
    }
    let w = p1 - p0;
    let t = cross_2d(&w, d1) / det;
    let u = cross_2d(&w, d0) / det;
    Some((t, u))
}

fn in_unit_interval<T: Real>(v: T) -> bool {
    v >= T::zero() && v <= T::one()
}

/// Bounded segment-segment intersection.
///
/// Endpoints count: segments that only touch at an endpoint intersect there.
/// Parallel segments never intersect, even when they overlap.
#[must_use]
pub fn segment_segment_intersect<T: Real>(
    a: &LineSegment2<T>,
    b: &LineSegment2<T>,
) -> Option<Point2<T>> {
    let da = a.slope();
    let (t, u) = solve_lines(&a.a, &da, &b.a, &b.slope())?;
    if in_unit_interval(t) && in_unit_interval(u) {
        Some(a.a + da * t)
    } else {
        None
    }
}

/// Writes the intersection of two segments into `out`.
///
/// Returns false and leaves `out` untouched when they do not intersect.
pub fn segment_segment_intersect_into<T: Real>(
    a: &LineSegment2<T>,
    b: &LineSegment2<T>,
    out: &mut Point2<T>,
) -> bool {
    segment_segment_intersect(a, b).map(|p| *out = p).is_some()
}

/// Intersection point of two infinite parametric lines.
#[must_use]
pub fn line_line_intersect<T: Real>(
    a: &LineParametric2<T>,
    b: &LineParametric2<T>,
) -> Option<Point2<T>> {
    line_line_intersect_t(a, b).map(|t| a.point_at(t))
}

pub fn line_line_intersect_into<T: Real>(
    a: &LineParametric2<T>,
    b: &LineParametric2<T>,
    out: &mut Point2<T>,
) -> bool {
    line_line_intersect(a, b).map(|p| *out = p).is_some()
}

/// Parameter `t` along `a` where it crosses `b`, so the point is
/// `a.p + t * a.slope`.
#[must_use]
pub fn line_line_intersect_t<T: Real>(a: &LineParametric2<T>, b: &LineParametric2<T>) -> Option<T> {
    solve_lines(&a.p, &a.slope, &b.p, &b.slope).map(|(t, _)| t)
}

/// Signed distance along `line`, in units of its slope, to where it crosses
/// `segment`.
///
/// Negative values lie behind `line.p`. Returns `None` if the line is
/// parallel to the segment or passes outside its endpoints.
#[must_use]
pub fn line_segment_intersect_t<T: Real>(
    line: &LineParametric2<T>,
    segment: &LineSegment2<T>,
) -> Option<T> {
    let (t, u) = solve_lines(&line.p, &line.slope, &segment.a, &segment.slope())?;
    if in_unit_interval(u) {
        Some(t)
    } else {
        trace!(?u, "line misses segment");
        None
    }
}

/// Intersection of two lines in general form as a homogeneous point
/// `(x, y, w)`.
///
/// Parallel lines give `w = 0`, the point at infinity in their direction.
#[must_use]
pub fn general_general_intersect_homogeneous<T: Real>(
    a: &LineGeneral2<T>,
    b: &LineGeneral2<T>,
) -> Point3<T> {
    Point3::new(
        a.b * b.c - a.c * b.b,
        a.c * b.a - a.a * b.c,
        a.a * b.b - a.b * b.a,
    )
}

pub fn general_general_intersect_homogeneous_into<T: Real>(
    a: &LineGeneral2<T>,
    b: &LineGeneral2<T>,
    out: &mut Point3<T>,
) {
    *out = general_general_intersect_homogeneous(a, b);
}

/// Intersection of two lines in general form.
///
/// Returns `None` for parallel lines.
#[must_use]
pub fn general_general_intersect<T: Real>(
    a: &LineGeneral2<T>,
    b: &LineGeneral2<T>,
) -> Option<Point2<T>> {
    let h = general_general_intersect_homogeneous(a, b);
    if h.z.abs() <= T::TOLERANCE {
        trace!(w = ?h.z, "parallel general lines");
        return None;
    }
    Some(Point2::new(h.x / h.z, h.y / h.z))
}

pub fn general_general_intersect_into<T: Real>(
    a: &LineGeneral2<T>,
    b: &LineGeneral2<T>,
    out: &mut Point2<T>,
) -> bool {
    general_general_intersect(a, b).map(|p| *out = p).is_some()
}

/// Returns true if `pt` lies strictly inside the convex polygon.
///
/// The cross product of every edge with the vector to `pt` must have the
/// same strict sign, which works for either winding. Points on an edge or
/// vertex are not contained.
#[must_use]
pub fn contains_convex<T: Real>(poly: &Polygon2<T>, pt: &Point2<T>) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut positive = 0usize;
    let mut negative = 0usize;
    for (a, b) in poly.edges() {
        let z = cross_2d(&(b - a), &(pt - a));
        if z > T::zero() {
            positive += 1;
        } else if z < T::zero() {
            negative += 1;
        } else {
            return false;
        }
    }
    positive == 0 || negative == 0
}

/// Returns true if `pt` lies inside a simple polygon, convex or not.
///
/// Uses the even-odd rule on a ray cast towards +x. Points within tolerance
/// of an edge are treated as outside.
#[must_use]
pub fn contains_concave<T: Real>(poly: &Polygon2<T>, pt: &Point2<T>) -> bool {
    if poly.edges().any(|(a, b)| on_segment(a, b, pt)) {
        return false;
    }
    let mut inside = false;
    for (a, b) in poly.edges() {
        if (a.y > pt.y) != (b.y > pt.y) {
            let x_cross = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if pt.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment<T: Real>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> bool {
    let tol = T::TOLERANCE;
    let e = b - a;
    let w = p - a;
    let len2 = e.norm_squared();
    if len2 <= tol * tol {
        return w.norm_squared() <= tol * tol;
    }
    let along = e.dot(&w);
    cross_2d(&e, &w).abs() <= tol * len2.sqrt() && along >= T::zero() && along <= len2
}

/// Returns true if the two rectangles overlap with positive area.
///
/// Rectangles that only share an edge or corner, or that have zero area, do
/// not intersect.
#[must_use]
pub fn rect_rect_intersects<T: Real>(a: &Rectangle2<T>, b: &Rectangle2<T>) -> bool {
    rect_rect_intersection(a, b).is_some()
}

/// Overlap of two rectangles, or `None` if it has no interior.
#[must_use]
pub fn rect_rect_intersection<T: Real>(a: &Rectangle2<T>, b: &Rectangle2<T>) -> Option<Rectangle2<T>> {
    let p0 = Point2::new(a.p0.x.max(b.p0.x), a.p0.y.max(b.p0.y));
    let p1 = Point2::new(a.p1.x.min(b.p1.x), a.p1.y.min(b.p1.y));
    if p0.x >= p1.x || p0.y >= p1.y {
        return None;
    }
    Some(Rectangle2::from_corners(p0, p1))
}

/// Writes the overlap of `a` and `b` into `out`; false when there is none.
pub fn rect_rect_intersection_into<T: Real>(
    a: &Rectangle2<T>,
    b: &Rectangle2<T>,
    out: &mut Rectangle2<T>,
) -> bool {
    rect_rect_intersection(a, b).map(|r| *out = r).is_some()
}

/// Point-in-rectangle for the half-open box `[p0, p1)`.
#[must_use]
pub fn rect_contains<T: Real>(rect: &Rectangle2<T>, x: T, y: T) -> bool {
    rect.p0.x <= x && x < rect.p1.x && rect.p0.y <= y && y < rect.p1.y
}

/// Point-in-rectangle for the closed box `[p0, p1]`.
#[must_use]
pub fn rect_contains2<T: Real>(rect: &Rectangle2<T>, x: T, y: T) -> bool {
    rect.p0.x <= x && x <= rect.p1.x && rect.p0.y <= y && y <= rect.p1.y
}

/// Point-in-rectangle for the half-open box `[x0, x0 + width)`.
#[must_use]
pub fn rect_length_contains<T: Real>(rect: &RectangleLength2<T>, x: T, y: T) -> bool {
    rect.x0 <= x && x < rect.x0 + rect.width && rect.y0 <= y && y < rect.y0 + rect.height
}

/// Point-in-rectangle for the closed box `[x0, x0 + width]`.
#[must_use]
pub fn rect_length_contains2<T: Real>(rect: &RectangleLength2<T>, x: T, y: T) -> bool {
    rect.x0 <= x && x <= rect.x0 + rect.width && rect.y0 <= y && y <= rect.y0 + rect.height
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::transform::Se2;

    const TOL: f64 = 1e-8;

    fn square() -> Polygon2<f64> {
        Polygon2::from_xy(&[-1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap()
    }

    fn check_segments(a: LineSegment2<f64>, b: LineSegment2<f64>, expected: Option<(f64, f64)>) {
        let found = segment_segment_intersect(&a, &b);
        match (found, expected) {
            (Some(p), Some((x, y))) => {
                assert_relative_eq!(p.x, x, epsilon = TOL);
                assert_relative_eq!(p.y, y, epsilon = TOL);
            }
            (None, None) => {}
            _ => panic!("{a:?} x {b:?}: found {found:?}, expected {expected:?}"),
        }
    }

    #[test]
    fn segments_crossing() {
        check_segments(LineSegment2::new(0.0, 2.0, 2.0, 2.0), LineSegment2::new(2.0, 0.0, 2.0, 3.0), Some((2.0, 2.0)));
        check_segments(LineSegment2::new(0.0, 2.0, 2.0, 0.0), LineSegment2::new(0.0, 0.0, 2.0, 2.0), Some((1.0, 1.0)));
    }

    #[test]
    fn segments_touching_endpoints() {
        check_segments(LineSegment2::new(0.0, 2.0, 2.0, 2.0), LineSegment2::new(0.0, 0.0, 0.0, 2.0), Some((0.0, 2.0)));
        check_segments(LineSegment2::new(0.0, 2.0, 2.0, 2.0), LineSegment2::new(2.0, 0.0, 2.0, 2.0), Some((2.0, 2.0)));
        check_segments(LineSegment2::new(1.0, 0.0, 1.0, 2.0), LineSegment2::new(0.0, 0.0, 2.0, 0.0), Some((1.0, 0.0)));
    }

    #[test]
    fn segments_falling_short() {
        check_segments(LineSegment2::new(0.0, 2.0, 2.0, 2.0), LineSegment2::new(0.0, 0.0, 0.0, 1.9), None);
        check_segments(LineSegment2::new(0.0, 2.0, 2.0, 2.0), LineSegment2::new(2.0, 0.0, 2.0, 1.9), None);
        check_segments(LineSegment2::new(1.0, 0.1, 1.0, 2.0), LineSegment2::new(0.0, 0.0, 2.0, 0.0), None);
    }

    #[test]
    fn overlapping_collinear_segments_do_not_intersect() {
        check_segments(LineSegment2::new(0.0, 2.0, 0.0, 5.0), LineSegment2::new(0.0, 1.0, 0.0, 3.0), None);
    }

    #[test]
    fn segment_intersection_into_buffer() {
        let a = LineSegment2::new(0.0f32, 2.0, 2.0, 0.0);
        let b = LineSegment2::new(0.0f32, 0.0, 2.0, 2.0);
        let mut out = Point2::new(9.0, 9.0);
        assert!(segment_segment_intersect_into(&a, &b, &mut out));
        assert_relative_eq!(out, Point2::new(1.0, 1.0), epsilon = 1e-5);

        let miss = LineSegment2::new(5.0f32, 5.0, 6.0, 7.0);
        assert!(!segment_segment_intersect_into(&a, &miss, &mut out));
        assert_relative_eq!(out, Point2::new(1.0, 1.0), epsilon = 1e-5);
    }

    fn check_line_to_segment(tran: &Se2<f64>) {
        let origin = tran.transform(&Point2::origin());
        let target = LineSegment2::from_points(
            tran.transform(&Point2::new(-1.0, 1.0)),
            tran.transform(&Point2::new(1.0, 1.0)),
        );
        let aim = |sx: f64, sy: f64| {
            let mut line = LineParametric2::from_point_slope(origin, Vector2::new(sx, sy));
            line.set_angle(line.angle() + tran.yaw());
            line
        };

        assert_relative_eq!(line_segment_intersect_t(&aim(0.0, 1.0), &target).unwrap(), 1.0, epsilon = TOL);
        assert_relative_eq!(line_segment_intersect_t(&aim(0.0, -1.0), &target).unwrap(), -1.0, epsilon = TOL);
        assert!(line_segment_intersect_t(&aim(-1.1, 1.0), &target).is_none());
        assert!(line_segment_intersect_t(&aim(1.1, 1.0), &target).is_none());
    }

    #[test]
    fn line_to_segment_in_many_poses() {
        let offsets = [(0.3, -1.2), (-0.7, 0.4), (1.5, 2.2), (-2.0, -0.1)];
        for i in 0..20_i32 {
            let (x, y) = offsets[usize::try_from(i).unwrap() % offsets.len()];
            let tran = Se2::new(x, y, 2.0 * PI * f64::from(i) / 20.0);
            check_line_to_segment(&tran);
        }
    }

    #[test]
    fn line_parallel_to_segment() {
        let line = LineParametric2::new(-1.0, 1.0, 2.0, 0.0);
        let target = LineSegment2::new(-1.0, 1.0, 1.0, 1.0);
        assert!(line_segment_intersect_t(&line, &target).is_none());
    }

    #[test]
    fn parametric_lines_point() {
        let a = LineParametric2::new(2.0, 3.0, 1.0, 0.0);
        let b = LineParametric2::new(-2.0, -4.0, 0.0, 1.0);
        let found = line_line_intersect(&a, &b).unwrap();
        assert_relative_eq!(found.x, -2.0, epsilon = TOL);
        assert_relative_eq!(found.y, 3.0, epsilon = TOL);

        let c = LineParametric2::new(-8.0, 2.0, 0.0, 1.0);
        assert!(line_line_intersect(&b, &c).is_none());
        let mut out = Point2::origin();
        assert!(!line_line_intersect_into(&b, &c, &mut out));
    }

    #[test]
    fn parametric_lines_t() {
        let a = LineParametric2::new(2.0, 3.0, 1.0, 0.0);
        let b = LineParametric2::new(-2.0, -4.0, 0.0, 1.0);
        let t = line_line_intersect_t(&a, &b).unwrap();
        assert_relative_eq!(2.0 + t, -2.0, epsilon = TOL);

        let c = LineParametric2::new(-8.0, 2.0, 0.0, 1.0);
        assert!(line_line_intersect_t(&b, &c).is_none());
    }

    #[test]
    fn general_lines_homogeneous() {
        let a = LineGeneral2::new(1.0, 2.0, 3.0);
        let b = LineGeneral2::new(2.0, -1.0, 0.5);
        let found = general_general_intersect_homogeneous(&a, &b);
        assert_relative_eq!(a.evaluate(found.x / found.z, found.y / found.z), 0.0, epsilon = TOL);
        assert_relative_eq!(b.evaluate(found.x / found.z, found.y / found.z), 0.0, epsilon = TOL);

        let parallel = LineGeneral2::new(1.0, 2.0, 0.5);
        let mut at_infinity = Point3::origin();
        general_general_intersect_homogeneous_into(&a, &parallel, &mut at_infinity);
        assert_relative_eq!(at_infinity.z, 0.0, epsilon = TOL);
        assert_relative_eq!(
            a.a * at_infinity.x + a.b * at_infinity.y + a.c * at_infinity.z,
            0.0,
            epsilon = TOL
        );
    }

    #[test]
    fn general_lines_cartesian() {
        let a = LineGeneral2::new(1.0, 2.0, 3.0);
        let b = LineGeneral2::new(2.0, -1.0, 0.5);
        let found = general_general_intersect(&a, &b).unwrap();
        assert_relative_eq!(a.evaluate(found.x, found.y), 0.0, epsilon = TOL);

        let parallel = LineGeneral2::new(1.0, 2.0, 0.5);
        let mut out = found;
        assert!(!general_general_intersect_into(&a, &parallel, &mut out));
        assert_eq!(out, found);
    }

    #[test]
    fn convex_containment_either_winding() {
        let online = Point2::new(1.0, -1.0);
        let inside = Point2::new(0.5, 0.5);
        let outside = Point2::new(1.5, 0.5);

        let mut poly = square();
        assert!(!contains_convex(&poly, &online));
        assert!(contains_convex(&poly, &inside));
        assert!(!contains_convex(&poly, &outside));

        poly = Polygon2::from_xy(&[-1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0]).unwrap();
        assert!(!contains_convex(&poly, &online));
        assert!(contains_convex(&poly, &inside));
        assert!(!contains_convex(&poly, &outside));
    }

    #[test]
    fn convex_containment_edge_midpoint_excluded() {
        assert!(!contains_convex(&square(), &Point2::new(0.0, 1.0)));
    }

    #[test]
    fn concave_containment_rectangle() {
        let poly = square();
        assert!(contains_concave(&poly, &Point2::new(0.0, 0.0)));
        for p in [(2.0, 0.0), (-2.0, 0.0), (0.0, 2.0), (0.0, -2.0)] {
            assert!(!contains_concave(&poly, &Point2::new(p.0, p.1)));
        }
    }

    #[test]
    fn concave_containment_notched() {
        let poly = Polygon2::from_xy(&[-1.0, -1.0, 0.0, 0.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap();
        assert!(contains_concave(&poly, &Point2::new(0.0, 0.5)));
        assert!(contains_concave(&poly, &Point2::new(-0.75, -0.25)));
        assert!(contains_concave(&poly, &Point2::new(0.75, -0.25)));
        assert!(!contains_concave(&poly, &Point2::new(0.0, -0.5)));
        for p in [(2.0, 0.0), (-2.0, 0.0), (0.0, 2.0), (0.0, -2.0)] {
            assert!(!contains_concave(&poly, &Point2::new(p.0, p.1)));
        }
    }

    #[test]
    fn concave_containment_boundary_is_outside() {
        let poly = square();
        for p in [(1.0, -1.0), (1.0, 0.0), (-1.0, 0.3), (0.0, 1.0), (-1.0, -1.0)] {
            assert!(!contains_concave(&poly, &Point2::new(p.0, p.1)), "{p:?}");
        }
        let notched = Polygon2::from_xy(&[-1.0, -1.0, 0.0, 0.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0]).unwrap();
        assert!(!contains_concave(&notched, &Point2::new(0.0, 0.0)));
        assert!(!contains_concave(&notched, &Point2::new(0.5, -0.5)));
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rectangle2<f64> {
        Rectangle2::new(x0, y0, x1, y1)
    }

    #[test]
    fn rectangles_intersect_strictly() {
        let a = rect(0.0, 0.0, 100.0, 120.0);
        let positive = [
            rect(0.0, 0.0, 100.0, 120.0),
            rect(10.0, 12.0, 99.0, 119.0),
            rect(50.0, 50.0, 200.0, 200.0),
            rect(-10.0, -10.0, 10.0, 10.0),
            rect(90.0, -10.0, 105.0, 1.0),
            rect(90.0, 5.0, 105.0, 105.0),
        ];
        let negative = [
            rect(200.0, 200.0, 300.0, 305.0),
            rect(-200.0, -200.0, -10.0, -10.0),
            rect(0.0, -20.0, 100.0, -5.0),
            rect(0.0, 125.0, 100.0, 130.0),
            rect(0.0, 0.0, 0.0, 0.0),
            rect(100.0, 120.0, 100.0, 120.0),
            rect(-10.0, 0.0, 0.0, 120.0),
            rect(100.0, 0.0, 105.0, 120.0),
            rect(0.0, -10.0, 100.0, 0.0),
            rect(0.0, 120.0, 100.0, 125.0),
        ];
        for b in &positive {
            assert!(rect_rect_intersects(&a, b), "{b:?}");
        }
        for b in &negative {
            assert!(!rect_rect_intersects(&a, b), "{b:?}");
            assert!(rect_rect_intersection(&a, b).is_none(), "{b:?}");
        }
    }

    #[test]
    fn zero_area_rectangle_inside_never_intersects() {
        let a = rect(0.0, 0.0, 100.0, 120.0);
        for b in [rect(50.0, 50.0, 50.0, 60.0), rect(50.0, 50.0, 60.0, 50.0), rect(50.0, 50.0, 50.0, 50.0)] {
            assert!(!rect_rect_intersects(&a, &b), "{b:?}");
            assert!(!rect_rect_intersects(&b, &a), "{b:?}");
            assert!(rect_rect_intersection(&a, &b).is_none(), "{b:?}");
        }
    }

    #[test]
    fn rectangle_intersection_region() {
        let a = rect(0.0, 0.0, 100.0, 120.0);
        let cases = [
            (rect(0.0, 0.0, 100.0, 120.0), rect(0.0, 0.0, 100.0, 120.0)),
            (rect(10.0, 12.0, 99.0, 119.0), rect(10.0, 12.0, 99.0, 119.0)),
            (rect(50.0, 50.0, 200.0, 200.0), rect(50.0, 50.0, 100.0, 120.0)),
            (rect(-10.0, -10.0, 10.0, 10.0), rect(0.0, 0.0, 10.0, 10.0)),
            (rect(90.0, -10.0, 105.0, 1.0), rect(90.0, 0.0, 100.0, 1.0)),
            (rect(90.0, 5.0, 105.0, 105.0), rect(90.0, 5.0, 100.0, 105.0)),
        ];
        for (b, expected) in &cases {
            let mut found = Rectangle2::default();
            assert!(rect_rect_intersection_into(&a, b, &mut found));
            assert_relative_eq!(found.p0, expected.p0, epsilon = TOL);
            assert_relative_eq!(found.p1, expected.p1, epsilon = TOL);
        }
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = rect(-10.0, -5.0, -5.0, 5.0);
        for (x, y) in [(-10.0, -5.0), (-6.0, 4.0), (-9.9, -4.99), (-6.001, 4.99), (-5.99, 4.0), (-10.0, 4.001)] {
            assert!(rect_contains(&r, x, y));
            assert!(rect_contains2(&r, x, y));
        }
        for (x, y) in [(-11.0, -5.0), (-10.0, -6.0)] {
            assert!(!rect_contains(&r, x, y));
            assert!(!rect_contains2(&r, x, y));
        }
        for (x, y) in [(-5.0, 4.0), (-6.0, 5.0)] {
            assert!(!rect_contains(&r, x, y));
            assert!(rect_contains2(&r, x, y));
        }
    }

    #[test]
    fn rect_length_contains_is_half_open() {
        let r = RectangleLength2::new(-10.0, -5.0, 5.0, 10.0);
        for (x, y) in [(-10.0, -5.0), (-6.0, 4.0), (-9.9, -4.99), (-6.001, 4.99), (-5.99, 4.0), (-10.0, 4.001)] {
            assert!(rect_length_contains(&r, x, y));
            assert!(rect_length_contains2(&r, x, y));
        }
        for (x, y) in [(-11.0, -5.0), (-10.0, -6.0)] {
            assert!(!rect_length_contains(&r, x, y));
            assert!(!rect_length_contains2(&r, x, y));
        }
        for (x, y) in [(-5.0, 4.0), (-6.0, 5.0)] {
            assert!(!rect_length_contains(&r, x, y));
            assert!(rect_length_contains2(&r, x, y));
        }
    }
}
