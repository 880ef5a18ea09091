pub mod area_2d;
pub mod ellipse_2d;
pub mod intersect_2d;
pub mod plane_3d;
pub mod polygon_2d;
pub mod vector_2d;

use std::fmt::Debug;

use nalgebra::RealField;

/// 2D point type.
pub type Point2<T> = nalgebra::Point2<T>;

/// 3D point type.
pub type Point3<T> = nalgebra::Point3<T>;

/// 2D vector type.
pub type Vector2<T> = nalgebra::Vector2<T>;

/// 3D vector type.
pub type Vector3<T> = nalgebra::Vector3<T>;

/// 3x3 matrix, used for 3D rotations and 2D homogeneous transforms.
pub type Matrix3<T> = nalgebra::Matrix3<T>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4<T> = nalgebra::Matrix4<T>;

/// Floating-point scalar accepted by every kernel function.
///
/// Implemented for `f32` and `f64`. Each width carries its own tolerance,
/// tighter for `f64`.
pub trait Real: RealField + Copy + Debug {
    /// Geometric tolerance for near-zero determinants and cross products.
    const TOLERANCE: Self;
}

impl Real for f64 {
    const TOLERANCE: f64 = 1e-10;
}

impl Real for f32 {
    const TOLERANCE: f32 = 1e-6;
}

/// Converts an `f64` literal into the working precision.
#[inline]
#[must_use]
pub fn lit<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Z component of the cross product of two 2D vectors.
#[inline]
#[must_use]
pub fn cross_2d<T: Real>(a: &Vector2<T>, b: &Vector2<T>) -> T {
    a.x * b.y - a.y * b.x
}
