use crate::error::{GeometryError, Result};

use super::vector_3d::{cross, normalize, to_vector3};
use super::{Vector3, PARALLEL_TOLERANCE};

/// Right-handed orthonormal triple `{x̂, n̂, m̂}` built from two vectors.
///
/// `x̂` is the direction of the first vector, `m̂` the unit normal of the
/// plane spanned by both vectors, and `n̂ = m̂ × x̂` completes the triple
/// inside that plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalFrame {
    pub x_hat: Vector3,
    pub n_hat: Vector3,
    pub m_hat: Vector3,
}

/// The two source vectors expressed in the `(x̂, n̂)` plane.
///
/// - `a = x·x̂`, the magnitude of `x`
/// - `b = y·x̂`, `c = y·n̂`, so `y = b x̂ + c n̂`
/// - `theta` is the angle between `x` and `y`, in `[0, π]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateDecomposition {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub theta: f64,
}

impl CoordinateDecomposition {
    /// Magnitude of `y`, recovered from its in-plane coordinates.
    #[must_use]
    pub fn y_norm(&self) -> f64 {
        self.b.hypot(self.c)
    }
}

/// Result of [`process`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDecomposition {
    pub frame: OrthonormalFrame,
    /// Unit direction of `y`.
    pub y_hat: Vector3,
    pub coords: CoordinateDecomposition,
}

impl FrameDecomposition {
    /// Flattens the decomposition to `(x̂, ŷ, m̂, n̂, a, b, c, θ)`.
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn into_tuple(self) -> (Vector3, Vector3, Vector3, Vector3, f64, f64, f64, f64) {
        let Self {
            frame,
            y_hat,
            coords,
        } = self;
        (
            frame.x_hat,
            y_hat,
            frame.m_hat,
            frame.n_hat,
            coords.a,
            coords.b,
            coords.c,
            coords.theta,
        )
    }
}

/// Builds the orthonormal frame and angular decomposition of `x` and `y`
/// using [`PARALLEL_TOLERANCE`].
///
/// # Errors
///
/// See [`process_with_tolerance`].
pub fn process(x: &[f64], y: &[f64]) -> Result<FrameDecomposition> {
    process_with_tolerance(x, y, PARALLEL_TOLERANCE)
}

/// Builds the orthonormal frame and angular decomposition of `x` and `y`.
///
/// `tolerance` bounds the squared magnitude of `x̂ × ŷ`; below it the plane
/// through both vectors is undefined.
///
/// # Errors
///
/// - [`ShapeError::Dimension`](crate::error::ShapeError::Dimension) if either input is not 3D.
/// - [`GeometryError::ZeroVector`] if either input has zero length.
/// - [`GeometryError::NearlyParallel`] if the vectors are parallel or antiparallel.
pub fn process_with_tolerance(x: &[f64], y: &[f64], tolerance: f64) -> Result<FrameDecomposition> {
    let xv = to_vector3(x)?;
    let yv = to_vector3(y)?;

    let x_hat = normalize(&xv)?;
    let y_hat = normalize(&yv)?;

    let m = cross(x_hat.as_slice(), y_hat.as_slice())?;
    if m.norm_squared() < tolerance {
        tracing::debug!(?xv, ?yv, "rejecting near-parallel frame");
        return Err(GeometryError::NearlyParallel { x: xv, y: yv }.into());
    }
    let m_hat = normalize(&m)?;
    let n_hat = cross(m_hat.as_slice(), x_hat.as_slice())?;

    let coords = CoordinateDecomposition {
        a: xv.dot(&x_hat),
        b: yv.dot(&x_hat),
        c: yv.dot(&n_hat),
        theta: x_hat.dot(&y_hat).clamp(-1.0, 1.0).acos(),
    };

    Ok(FrameDecomposition {
        frame: OrthonormalFrame {
            x_hat,
            n_hat,
            m_hat,
        },
        y_hat,
        coords,
    })
}
