//! Rigid, affine and projective point transforms.

mod affine;
mod homography;
mod interpolate;
mod se;

pub use affine::Affine2;
pub use homography::Homography2;
pub use interpolate::InterpolateLinearSe3;
pub use se::{Se2, Se3};
