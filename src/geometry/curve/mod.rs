mod bezier;
mod geodesic;
mod line;

pub use bezier::BezierCurve;
pub use geodesic::Geodesic;
pub use line::{line, Linear};

pub(crate) use line::lerp;

use crate::error::{Result, ShapeError};
use crate::math::{DMatrix, DVector};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves of arbitrary dimension.
pub trait Curve {
    /// Evaluates the curve at every parameter in `t`, one column per sample.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn sample(&self, t: &[f64]) -> Result<DMatrix>;

    /// Evaluates the curve at a single parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<DVector> {
        let xx = self.sample(&[t])?;
        Ok(xx.column(0).into_owned())
    }

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

/// Pairwise base step of a curve construction.
///
/// `ends` holds exactly two tracks. A track is `d × N` with one column per
/// sample in `t`, or `d × 1` for a point held fixed across all samples.
/// The result is always `d × N`.
///
/// Any `Fn(&[f64], &[DMatrix]) -> Result<DMatrix>` is a rule, so [`line`]
/// itself can be passed wherever a rule is expected.
pub trait InterpolationRule {
    /// Interpolates between `ends[0]` (at `t = 0`) and `ends[1]` (at `t = 1`).
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if `ends` is malformed, or any error specific to the rule.
    fn interpolate(&self, t: &[f64], ends: &[DMatrix]) -> Result<DMatrix>;

    /// Whether this rule is plain linear blending, which allows curve
    /// evaluation to be tabulated without calling the rule.
    fn is_linear(&self) -> bool {
        false
    }
}

impl<F> InterpolationRule for F
where
    F: Fn(&[f64], &[DMatrix]) -> Result<DMatrix>,
{
    fn interpolate(&self, t: &[f64], ends: &[DMatrix]) -> Result<DMatrix> {
        self(t, ends)
    }
}

/// Builds a `d × 1` track from point coordinates.
#[must_use]
pub fn point(coords: &[f64]) -> DMatrix {
    DMatrix::from_column_slice(coords.len(), 1, coords)
}

/// Repeats `p` once per sample, giving a `d × samples` track.
#[must_use]
pub fn broadcast(p: &DVector, samples: usize) -> DMatrix {
    DMatrix::from_fn(p.len(), samples, |i, _| p[i])
}

/// Checks that `ends` is a well-formed pair for `samples` parameters and
/// returns the shared dimension.
///
/// # Errors
///
/// - [`ShapeError::PointCount`] unless there are exactly two ends.
/// - [`ShapeError::DimensionMismatch`] if the ends differ in dimension.
/// - [`ShapeError::TrackWidth`] if an end is neither `d × 1` nor `d × samples`.
pub fn check_pair(ends: &[DMatrix], samples: usize) -> Result<usize> {
    let [x0, x1] = ends else {
        return Err(ShapeError::PointCount {
            expected: 2,
            found: ends.len(),
        }
        .into());
    };
    if x0.nrows() != x1.nrows() {
        return Err(ShapeError::DimensionMismatch {
            left: x0.nrows(),
            right: x1.nrows(),
        }
        .into());
    }
    for end in ends {
        if end.ncols() != 1 && end.ncols() != samples {
            return Err(ShapeError::TrackWidth {
                expected: samples,
                found: end.ncols(),
            }
            .into());
        }
    }
    Ok(x0.nrows())
}

/// Column of `track` that applies to sample `j`.
pub(crate) fn track_column(track: &DMatrix, j: usize) -> usize {
    if track.ncols() == 1 {
        0
    } else {
        j
    }
}
