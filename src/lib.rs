pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CasteljauError, Result};
pub use geometry::curve::{line, Geodesic, InterpolationRule, Linear};
pub use math::frame_3d::process;
pub use math::vector_3d::cross;
pub use operations::{evaluate, CurveEvaluator, EvaluationStrategy};
