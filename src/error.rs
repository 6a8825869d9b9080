use thiserror::Error;

/// Top-level error type for the limnis outline engine.
#[derive(Debug, Error)]
pub enum LimnisError {
    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error(transparent)]
    Outline(#[from] OutlineError),
}

/// Errors related to raster mask construction.
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("buffer has {actual} cells, expected {expected} for a {width}x{height} mask")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors related to outline specifications.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("outline width must be positive and finite, got {0}")]
    InvalidWidth(f64),
}

/// Convenience type alias for results using [`LimnisError`].
pub type Result<T> = std::result::Result<T, LimnisError>;
