use crate::error::{Result, ShapeError};
use crate::math::frame_3d::process_with_tolerance;
use crate::math::{DMatrix, Vector3, PARALLEL_TOLERANCE};

use super::line::lerp;
use super::{check_pair, track_column, InterpolationRule};

/// Angle-preserving interpolation between two 3D vectors.
///
/// The direction travels along the great circle from `x̂` to `ŷ` at a
/// constant angular rate while the magnitude blends linearly:
///
/// `P(t) = ((1 - t) |x| + t |y|) * (cos(tθ) x̂ + sin(tθ) n̂)`
///
/// where `x̂`, `n̂` and `θ` come from [`process`](crate::math::frame_3d::process).
/// `P(0) = x` and `P(1) = y`.
#[derive(Debug, Clone, Copy)]
pub struct Geodesic {
    /// Squared cross-product threshold below which a pair is rejected as parallel.
    pub tolerance: f64,
}

impl Geodesic {
    /// Creates a geodesic rule with a custom parallel tolerance.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for Geodesic {
    fn default() -> Self {
        Self {
            tolerance: PARALLEL_TOLERANCE,
        }
    }
}

impl InterpolationRule for Geodesic {
    fn interpolate(&self, t: &[f64], ends: &[DMatrix]) -> Result<DMatrix> {
        let d = check_pair(ends, t.len())?;
        if d != 3 {
            return Err(ShapeError::Dimension {
                expected: 3,
                found: d,
            }
            .into());
        }
        let (x0, x1) = (&ends[0], &ends[1]);

        let mut xx = DMatrix::zeros(3, t.len());
        for (j, &tj) in t.iter().enumerate() {
            let x: Vector3 = x0.fixed_view::<3, 1>(0, track_column(x0, j)).into_owned();
            let y: Vector3 = x1.fixed_view::<3, 1>(0, track_column(x1, j)).into_owned();
            let decomposition =
                process_with_tolerance(x.as_slice(), y.as_slice(), self.tolerance)?;
            let frame = decomposition.frame;
            let coords = decomposition.coords;

            let radius = lerp(coords.a, coords.y_norm(), tj);
            let (sin, cos) = (tj * coords.theta).sin_cos();
            let p = (frame.x_hat * cos + frame.n_hat * sin) * radius;
            xx.set_column(j, &p);
        }
        Ok(xx)
    }
}
