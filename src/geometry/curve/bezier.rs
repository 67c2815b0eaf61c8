use crate::error::{Result, ShapeError};
use crate::math::{DMatrix, DVector, TOLERANCE};
use crate::operations::evaluate::{CurveEvaluator, EvaluationStrategy};

use super::{Curve, CurveDomain, InterpolationRule, Linear};

/// A curve defined by control points and a pairwise interpolation rule.
///
/// With [`Linear`] this is the classical Bézier curve; with
/// [`Geodesic`](super::Geodesic) the same construction runs along great circles.
#[derive(Debug, Clone)]
pub struct BezierCurve<R = Linear> {
    control_points: Vec<DVector>,
    rule: R,
    evaluator: CurveEvaluator,
}

impl<R: InterpolationRule> BezierCurve<R> {
    /// Creates a new curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `control_points` is empty or the points differ in dimension.
    pub fn new(control_points: Vec<DVector>, rule: R) -> Result<Self> {
        let Some(first) = control_points.first() else {
            return Err(ShapeError::EmptyControlPoints.into());
        };
        let d = first.len();
        if let Some(p) = control_points.iter().find(|p| p.len() != d) {
            return Err(ShapeError::DimensionMismatch {
                left: d,
                right: p.len(),
            }
            .into());
        }
        Ok(Self {
            control_points,
            rule,
            evaluator: CurveEvaluator::default(),
        })
    }

    /// Sets the strategy used to evaluate the curve.
    #[must_use]
    pub fn with_strategy(mut self, strategy: EvaluationStrategy) -> Self {
        self.evaluator = CurveEvaluator::with_strategy(strategy);
        self
    }

    /// Returns the control points.
    #[must_use]
    pub fn control_points(&self) -> &[DVector] {
        &self.control_points
    }

    /// Returns the interpolation rule.
    #[must_use]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns the polynomial degree, one less than the number of control points.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Returns the dimension of the control points.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.control_points[0].len()
    }
}

impl<R: InterpolationRule> Curve for BezierCurve<R> {
    fn sample(&self, t: &[f64]) -> Result<DMatrix> {
        self.evaluator.execute(t, &self.control_points, &self.rule)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        let first = &self.control_points[0];
        let last = &self.control_points[self.control_points.len() - 1];
        (first - last).norm() < TOLERANCE
    }
}
