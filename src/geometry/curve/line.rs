use crate::error::Result;
use crate::math::DMatrix;

use super::{check_pair, track_column, InterpolationRule};

/// Blends two scalars: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Linear interpolation between two ends, `x[0]` at `t == 0` and `x[1]` at `t == 1`.
///
/// Column `j` of the `d × N` result is `(1 - t[j]) * x[0] + t[j] * x[1]`.
/// Parameters outside `[0, 1]` extrapolate along the same line.
///
/// # Errors
///
/// Returns a [`ShapeError`](crate::error::ShapeError) reporting the offending
/// shape if `x` is not a well-formed pair (see [`check_pair`]).
pub fn line(t: &[f64], x: &[DMatrix]) -> Result<DMatrix> {
    let d = check_pair(x, t.len())?;
    let (x0, x1) = (&x[0], &x[1]);
    Ok(DMatrix::from_fn(d, t.len(), |i, j| {
        lerp(
            x0[(i, track_column(x0, j))],
            x1[(i, track_column(x1, j))],
            t[j],
        )
    }))
}

/// [`line`] as a rule value that advertises itself as linear blending.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl InterpolationRule for Linear {
    fn interpolate(&self, t: &[f64], ends: &[DMatrix]) -> Result<DMatrix> {
        line(t, ends)
    }

    fn is_linear(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{CasteljauError, ShapeError};
    use crate::geometry::curve::point;

    #[test]
    fn endpoints_and_midpoint() {
        let start = [1.0, 0.0, 0.0];
        let stop = [0.0, 1.0, 0.0];
        let x = [point(&start), point(&stop)];

        let xx = line(&[0.0, 0.5, 1.0], &x).unwrap();
        assert_eq!(xx.shape(), (3, 3));
        for i in 0..3 {
            assert_eq!(xx[(i, 0)], start[i]);
            assert_eq!(xx[(i, 2)], stop[i]);
            assert_relative_eq!(xx[(i, 1)], (start[i] + stop[i]) / 2.0);
        }
    }

    #[test]
    fn dense_sample_hits_both_ends() {
        const N: usize = 100;
        let start = [1.0, 0.0, 0.0];
        let stop = [0.0, 1.0, 0.0];
        #[allow(clippy::cast_precision_loss)]
        let t: Vec<f64> = (0..=N).map(|k| k as f64 / N as f64).collect();

        let xx = line(&t, &[point(&start), point(&stop)]).unwrap();
        assert_eq!(xx.shape(), (3, N + 1));
        for i in 0..3 {
            assert_eq!(xx[(i, 0)], start[i]);
            assert_eq!(xx[(i, N)], stop[i]);
        }
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        let xx = line(&[-1.0, 2.0], &[point(&[0.0, 0.0]), point(&[1.0, 2.0])]).unwrap();
        assert_relative_eq!(xx[(0, 0)], -1.0);
        assert_relative_eq!(xx[(1, 0)], -2.0);
        assert_relative_eq!(xx[(0, 1)], 2.0);
        assert_relative_eq!(xx[(1, 1)], 4.0);
    }

    #[test]
    fn blends_tracks_column_by_column() {
        // Each column of a track is paired with its own sample.
        let a = DMatrix::from_row_slice(1, 2, &[0.0, 10.0]);
        let b = DMatrix::from_row_slice(1, 2, &[2.0, 20.0]);
        let xx = line(&[0.5, 0.25], &[a, b]).unwrap();
        assert_relative_eq!(xx[(0, 0)], 1.0);
        assert_relative_eq!(xx[(0, 1)], 12.5);
    }

    #[test]
    fn empty_sample_gives_empty_result() {
        let xx = line(&[], &[point(&[0.0, 1.0]), point(&[1.0, 0.0])]).unwrap();
        assert_eq!(xx.shape(), (2, 0));
    }

    #[test]
    fn rejects_other_point_counts() {
        let p = point(&[0.0, 1.0]);
        for ends in [vec![p.clone()], vec![p.clone(), p.clone(), p.clone()]] {
            let err = line(&[0.5], &ends).unwrap_err();
            assert!(matches!(
                err,
                CasteljauError::Shape(ShapeError::PointCount { expected: 2, .. })
            ));
        }
    }

    #[test]
    fn linear_rule_matches_line() {
        let t = [0.0, 0.3, 0.9];
        let x = [point(&[1.0, 2.0]), point(&[-3.0, 0.5])];
        assert!(Linear.is_linear());
        assert_eq!(Linear.interpolate(&t, &x).unwrap(), line(&t, &x).unwrap());
    }
}
