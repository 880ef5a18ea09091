mod box3;
mod ellipse;
mod line;
mod plane;
mod polygon;
mod rectangle;
mod solid;

pub use box3::Box3;
pub use ellipse::{EllipseQuadratic, EllipseRotated};
pub use line::{LineGeneral2, LineParametric2, LineParametric3, LineSegment2, LineSegment3};
pub use plane::{PlaneGeneral3, PlaneNormal3, PlaneTangent3};
pub use polygon::{Polygon2, Quadrilateral};
pub use rectangle::{Rectangle2, RectangleLength2};
pub use solid::{Cylinder3, Sphere3};

use crate::error::GeoError;
use crate::math::{polygon_2d, Real};

impl<T: Real> From<&Rectangle2<T>> for Quadrilateral<T> {
    fn from(rect: &Rectangle2<T>) -> Self {
        polygon_2d::rectangle_to_quad(rect)
    }
}

impl<T: Real> From<&Rectangle2<T>> for Polygon2<T> {
    fn from(rect: &Rectangle2<T>) -> Self {
        polygon_2d::rectangle_to_polygon(rect)
    }
}

impl<T: Real> From<&Quadrilateral<T>> for Polygon2<T> {
    fn from(quad: &Quadrilateral<T>) -> Self {
        polygon_2d::quad_to_polygon(quad)
    }
}

impl<T: Real> TryFrom<&Polygon2<T>> for Quadrilateral<T> {
    type Error = GeoError;

    fn try_from(poly: &Polygon2<T>) -> Result<Self, Self::Error> {
        polygon_2d::polygon_to_quad(poly)
    }
}
