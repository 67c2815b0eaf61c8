pub mod evaluate;

pub use evaluate::{evaluate, CurveEvaluator, EvaluationStrategy};
