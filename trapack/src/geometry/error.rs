use thiserror::Error;

/// Errors raised while deriving or validating geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension is non-positive, non-finite, or violates the base-difference floor.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// The shape collapses (too few vertices, duplicates, zero area or zero-length edge).
    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),
}
