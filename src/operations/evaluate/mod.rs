mod evaluate_curve;

pub use evaluate_curve::{evaluate, CurveEvaluator, EvaluationStrategy};
