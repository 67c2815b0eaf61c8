pub mod frame_3d;
pub mod vector_3d;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Dynamically sized point of arbitrary dimension.
pub type DVector = nalgebra::DVector<f64>;

/// Dynamically sized matrix: control points as rows, evaluated curves as columns.
pub type DMatrix = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Threshold on the squared cross-product magnitude below which two
/// directions are treated as parallel or antiparallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-7;
