use thiserror::Error;

/// Top-level error type for polyline edge rendering.
#[derive(Debug, Error)]
pub enum PolyedgeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Dash(#[from] DashError),

    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Errors related to geometric computations on a point sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("at least {required} points are required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },
}

/// Errors related to dash patterns.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashError {
    #[error("dash pattern has zero total length")]
    DegeneratePattern,

    #[error("dash entry {index} = {value} must be finite and positive")]
    InvalidEntry { index: usize, value: f64 },
}

/// Errors related to style and animation parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid style parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`PolyedgeError`].
pub type Result<T> = std::result::Result<T, PolyedgeError>;
