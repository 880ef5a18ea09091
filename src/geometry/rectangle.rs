use crate::math::{Point2, Real};

/// An axis-aligned rectangle given by two corners, `p0 <= p1` componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle2<T: Real> {
    /// Lower extent.
    pub p0: Point2<T>,
    /// Upper extent.
    pub p1: Point2<T>,
}

impl<T: Real> Rectangle2<T> {
    #[must_use]
    pub fn new(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self {
            p0: Point2::new(x0, y0),
            p1: Point2::new(x1, y1),
        }
    }

    #[must_use]
    pub fn from_corners(p0: Point2<T>, p1: Point2<T>) -> Self {
        Self { p0, p1 }
    }

    #[must_use]
    pub fn width(&self) -> T {
        self.p1.x - self.p0.x
    }

    #[must_use]
    pub fn height(&self) -> T {
        self.p1.y - self.p0.y
    }

    #[must_use]
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Swaps coordinates so that `p0 <= p1` holds on both axes.
    pub fn enforce_extents(&mut self) {
        if self.p1.x < self.p0.x {
            std::mem::swap(&mut self.p0.x, &mut self.p1.x);
        }
        if self.p1.y < self.p0.y {
            std::mem::swap(&mut self.p0.y, &mut self.p1.y);
        }
    }
}

impl<T: Real> Default for Rectangle2<T> {
    fn default() -> Self {
        Self::from_corners(Point2::origin(), Point2::origin())
    }
}

/// An axis-aligned rectangle given by its origin and size.
///
/// Also used with `i32` for pixel regions, where the last covered pixel is
/// `x0 + width - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectangleLength2<T> {
    pub x0: T,
    pub y0: T,
    pub width: T,
    pub height: T,
}

impl<T> RectangleLength2<T> {
    #[must_use]
    pub fn new(x0: T, y0: T, width: T, height: T) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }
}

impl<T: Real> From<RectangleLength2<T>> for Rectangle2<T> {
    fn from(r: RectangleLength2<T>) -> Self {
        Self::new(r.x0, r.y0, r.x0 + r.width, r.y0 + r.height)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn enforce_extents_keeps_ordered_rectangle() {
        let mut r = Rectangle2::new(-1.0, -2.0, 50.0, 10.0);
        r.enforce_extents();
        assert_eq!(r, Rectangle2::new(-1.0, -2.0, 50.0, 10.0));
    }

    #[test]
    fn enforce_extents_swaps_reversed_corners() {
        let mut r = Rectangle2::new(50.0, 10.0, -1.0, -2.0);
        r.enforce_extents();
        assert_relative_eq!(r.p0.x, -1.0);
        assert_relative_eq!(r.p0.y, -2.0);
        assert_relative_eq!(r.p1.x, 50.0);
        assert_relative_eq!(r.p1.y, 10.0);
    }

    #[test]
    fn area_and_size() {
        let r = Rectangle2::new(1.0f32, 2.0, 5.0, 8.0);
        assert_relative_eq!(r.width(), 4.0);
        assert_relative_eq!(r.height(), 6.0);
        assert_relative_eq!(r.area(), 24.0);
    }

    #[test]
    fn length_form_converts_to_corners() {
        let r: Rectangle2<f64> = RectangleLength2::new(-10.0, -5.0, 5.0, 10.0).into();
        assert_eq!(r, Rectangle2::new(-10.0, -5.0, -5.0, 5.0));
    }
}
