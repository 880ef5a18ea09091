use std::ops::{Index, IndexMut};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Real};

/// A polygon described by an ordered list of vertices.
///
/// Edges join consecutive vertices and the last vertex wraps around to the
/// first, so the closing vertex is never duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2<T: Real> {
    vertices: Vec<Point2<T>>,
}

impl<T: Real> Polygon2<T> {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2<T>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon with `n` vertices, all at the origin.
    #[must_use]
    pub fn with_size(n: usize) -> Self {
        Self {
            vertices: vec![Point2::origin(); n],
        }
    }

    /// Creates a polygon from interleaved `x, y` coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::OddCoordinates` if the slice length is odd.
    pub fn from_xy(coords: &[T]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinates(coords.len()).into());
        }
        let vertices = coords
            .chunks_exact(2)
            .map(|c| Point2::new(c[0], c[1]))
            .collect();
        Ok(Self { vertices })
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point2<T>> {
        self.vertices.get(index)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2<T>] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Point2<T>] {
        &mut self.vertices
    }

    /// Iterates over the edges `(v[i], v[(i + 1) % n])`, including the
    /// closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2<T>, &Point2<T>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Returns a copy whose vertex list starts at `offset` (cyclic shift).
    #[must_use]
    pub fn rotated(&self, offset: usize) -> Self {
        let mut vertices = self.vertices.clone();
        if !vertices.is_empty() {
            vertices.rotate_left(offset % self.vertices.len());
        }
        Self { vertices }
    }
}

impl<T: Real> Index<usize> for Polygon2<T> {
    type Output = Point2<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}

impl<T: Real> IndexMut<usize> for Polygon2<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

/// A four-sided polygon with named corners `a, b, c, d` in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral<T: Real> {
    pub a: Point2<T>,
    pub b: Point2<T>,
    pub c: Point2<T>,
    pub d: Point2<T>,
}

impl<T: Real> Quadrilateral<T> {
    #[must_use]
    pub fn new(a: Point2<T>, b: Point2<T>, c: Point2<T>, d: Point2<T>) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a quadrilateral from the coordinates of its four corners.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::similar_names)]
    pub fn from_xy(x0: T, y0: T, x1: T, y1: T, x2: T, y2: T, x3: T, y3: T) -> Self {
        Self {
            a: Point2::new(x0, y0),
            b: Point2::new(x1, y1),
            c: Point2::new(x2, y2),
            d: Point2::new(x3, y3),
        }
    }

    /// The corners in order `[a, b, c, d]`.
    #[must_use]
    pub fn corners(&self) -> [Point2<T>; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl<T: Real> Default for Quadrilateral<T> {
    fn default() -> Self {
        Self::new(
            Point2::origin(),
            Point2::origin(),
            Point2::origin(),
            Point2::origin(),
        )
    }
}
