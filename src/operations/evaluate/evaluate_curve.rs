use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{Result, ShapeError};
use crate::geometry::curve::{broadcast, lerp, point, InterpolationRule};
use crate::math::{DMatrix, DVector};

/// How [`CurveEvaluator`] schedules the recursive construction.
///
/// Every strategy produces bit-identical results for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationStrategy {
    /// [`Tabulated`](Self::Tabulated) for linear rules, [`Memoized`](Self::Memoized) otherwise.
    #[default]
    Auto,
    /// Plain recursion. Shared sub-ranges are recomputed, so the number of
    /// rule calls grows as `2^n`.
    Naive,
    /// Recursion where each `(start, end)` sub-range is evaluated once per call.
    Memoized,
    /// Bottom-up pairwise blending over a working buffer, without calling the
    /// rule. Falls back to [`Memoized`](Self::Memoized) for non-linear rules.
    Tabulated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    Naive,
    Memoized,
    Tabulated,
}

/// Evaluates the curve built from a control point sequence by repeated
/// pairwise interpolation (the de Casteljau construction).
///
/// For `n` control points:
/// - `n = 1`: the point, repeated for every sample.
/// - `n = 2`: `f(t, [x0, x1])`.
/// - `n > 2`: `f(t, [C(x[..n-1]), C(x[1..])])`, where `C` is this construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveEvaluator {
    strategy: EvaluationStrategy,
}

impl CurveEvaluator {
    /// Creates a new evaluator using [`EvaluationStrategy::Auto`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new evaluator using the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: EvaluationStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> EvaluationStrategy {
        self.strategy
    }

    /// Evaluates the curve at every parameter in `t`.
    ///
    /// Returns a `d × N` matrix with one column per sample.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::EmptyControlPoints`] if `x` is empty.
    /// - [`ShapeError::DimensionMismatch`] if the control points differ in dimension.
    /// - Any error returned by `f`, unchanged.
    pub fn execute<R>(&self, t: &[f64], x: &[DVector], f: &R) -> Result<DMatrix>
    where
        R: InterpolationRule + ?Sized,
    {
        let Some(first) = x.first() else {
            return Err(ShapeError::EmptyControlPoints.into());
        };
        let d = first.len();
        if let Some(p) = x.iter().find(|p| p.len() != d) {
            return Err(ShapeError::DimensionMismatch {
                left: d,
                right: p.len(),
            }
            .into());
        }

        let schedule = self.schedule(f);
        debug!(
            points = x.len(),
            dim = d,
            samples = t.len(),
            ?schedule,
            "evaluating curve"
        );

        match schedule {
            Schedule::Naive => naive(t, x, f),
            Schedule::Memoized => {
                let mut memo = Memo::new(t, x, f);
                let xx = memo.evaluate(0, x.len())?;
                debug!(
                    entries = memo.cache.len(),
                    rule_calls = memo.rule_calls,
                    "memoized evaluation finished"
                );
                Ok(xx)
            }
            Schedule::Tabulated => Ok(tabulate(t, x)),
        }
    }

    fn schedule<R>(&self, f: &R) -> Schedule
    where
        R: InterpolationRule + ?Sized,
    {
        match self.strategy {
            EvaluationStrategy::Naive => Schedule::Naive,
            EvaluationStrategy::Memoized => Schedule::Memoized,
            EvaluationStrategy::Auto | EvaluationStrategy::Tabulated if f.is_linear() => {
                Schedule::Tabulated
            }
            EvaluationStrategy::Auto | EvaluationStrategy::Tabulated => Schedule::Memoized,
        }
    }
}

/// Evaluates the curve through `x` with the default strategy.
///
/// # Errors
///
/// See [`CurveEvaluator::execute`].
pub fn evaluate<R>(t: &[f64], x: &[DVector], f: &R) -> Result<DMatrix>
where
    R: InterpolationRule + ?Sized,
{
    CurveEvaluator::new().execute(t, x, f)
}

fn naive<R>(t: &[f64], x: &[DVector], f: &R) -> Result<DMatrix>
where
    R: InterpolationRule + ?Sized,
{
    match x {
        [] => Err(ShapeError::EmptyControlPoints.into()),
        [p] => Ok(broadcast(p, t.len())),
        [p0, p1] => f.interpolate(t, &[point(p0.as_slice()), point(p1.as_slice())]),
        _ => {
            let x0 = naive(t, &x[..x.len() - 1], f)?;
            let x1 = naive(t, &x[1..], f)?;
            f.interpolate(t, &[x0, x1])
        }
    }
}

/// Sub-range results for a single top-level evaluation.
struct Memo<'a, R: ?Sized> {
    t: &'a [f64],
    x: &'a [DVector],
    f: &'a R,
    cache: HashMap<(usize, usize), DMatrix>,
    rule_calls: usize,
}

impl<'a, R> Memo<'a, R>
where
    R: InterpolationRule + ?Sized,
{
    fn new(t: &'a [f64], x: &'a [DVector], f: &'a R) -> Self {
        Self {
            t,
            x,
            f,
            cache: HashMap::new(),
            rule_calls: 0,
        }
    }

    /// Curve through `x[start..end]`.
    fn evaluate(&mut self, start: usize, end: usize) -> Result<DMatrix> {
        if let Some(hit) = self.cache.get(&(start, end)) {
            trace!(start, end, "memo hit");
            return Ok(hit.clone());
        }

        let xx = match end - start {
            0 => return Err(ShapeError::EmptyControlPoints.into()),
            1 => broadcast(&self.x[start], self.t.len()),
            2 => {
                let ends = [
                    point(self.x[start].as_slice()),
                    point(self.x[start + 1].as_slice()),
                ];
                self.rule_calls += 1;
                self.f.interpolate(self.t, &ends)?
            }
            _ => {
                let x0 = self.evaluate(start, end - 1)?;
                let x1 = self.evaluate(start + 1, end)?;
                self.rule_calls += 1;
                self.f.interpolate(self.t, &[x0, x1])?
            }
        };

        self.cache.insert((start, end), xx.clone());
        Ok(xx)
    }
}

/// `n - 1` passes of pairwise linear blending; slot `i` of pass `k` holds the
/// curve through `x[i..=i + k]`.
fn tabulate(t: &[f64], x: &[DVector]) -> DMatrix {
    let mut buffer: Vec<DMatrix> = x.iter().map(|p| broadcast(p, t.len())).collect();
    let n = buffer.len();

    for pass in 1..n {
        for i in 0..n - pass {
            let (head, tail) = buffer.split_at_mut(i + 1);
            let (lo, hi) = (&mut head[i], &tail[0]);
            for (j, &tj) in t.iter().enumerate() {
                for r in 0..lo.nrows() {
                    lo[(r, j)] = lerp(lo[(r, j)], hi[(r, j)], tj);
                }
            }
        }
    }

    buffer
        .into_iter()
        .next()
        .unwrap_or_else(|| DMatrix::zeros(0, t.len()))
}
