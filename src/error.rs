use thiserror::Error;

/// Top-level error type for the geometry primitives.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Fitting(#[from] FittingError),
}

/// Errors related to shape construction and conversion.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon of order {expected} expected, found {found} vertices")]
    VertexCount { expected: usize, found: usize },

    #[error("odd number of coordinates ({0}) cannot form 2D vertices")]
    OddCoordinates(usize),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by model encode/decode adapters.
#[derive(Debug, Error)]
pub enum FittingError {
    #[error("parameter vector of length {expected} expected, found {found}")]
    ParamLength { expected: usize, found: usize },
}

/// Convenience type alias for results using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;
