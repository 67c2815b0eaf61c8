use thiserror::Error;

use crate::math::Vector3;

/// Top-level error type for curve evaluation.
#[derive(Debug, Error)]
pub enum CasteljauError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Point count or dimensionality does not match what an operation requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected exactly {expected} points, found {found}")]
    PointCount { expected: usize, found: usize },

    #[error("expected {expected} components, found {found}")]
    Dimension { expected: usize, found: usize },

    #[error("control point sequence is empty")]
    EmptyControlPoints,

    #[error("track has {found} columns, expected 1 or {expected}")]
    TrackWidth { expected: usize, found: usize },

    #[error("end points disagree on dimension: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// Inputs that are well-shaped but numerically unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("vectors too close to parallel/antiparallel: x = {x:?}, y = {y:?}")]
    NearlyParallel { x: Vector3, y: Vector3 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`CasteljauError`].
pub type Result<T> = std::result::Result<T, CasteljauError>;
