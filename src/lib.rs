pub mod error;
pub mod fitting;
pub mod geometry;
pub mod math;
pub mod transform;

pub use error::{GeoError, Result};
pub use math::Real;
