use crate::error::{GeometryError, Result, ShapeError};

use super::{Vector3, TOLERANCE};

/// Reads a slice as a [`Vector3`].
///
/// # Errors
///
/// Returns [`ShapeError::Dimension`] if the slice does not hold exactly three components.
pub fn to_vector3(v: &[f64]) -> Result<Vector3> {
    if v.len() != 3 {
        return Err(ShapeError::Dimension {
            expected: 3,
            found: v.len(),
        }
        .into());
    }
    Ok(Vector3::from_column_slice(v))
}

/// Computes the cross product `x × y`.
///
/// `cross(x, x)` is always the zero vector.
///
/// # Errors
///
/// Returns [`ShapeError::Dimension`] if either input does not have exactly three components.
pub fn cross(x: &[f64], y: &[f64]) -> Result<Vector3> {
    let x = to_vector3(x)?;
    let y = to_vector3(y)?;
    Ok(Vector3::new(
        x[1] * y[2] - x[2] * y[1],
        x[2] * y[0] - x[0] * y[2],
        x[0] * y[1] - x[1] * y[0],
    ))
}

/// Divides `v` by its Euclidean norm.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the norm is below [`TOLERANCE`].
pub fn normalize(v: &Vector3) -> Result<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::CasteljauError;

    #[test]
    fn cross_of_axes() {
        let z = cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_eq!(z, Vector3::new(0.0, 0.0, 1.0));

        let x = cross(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(x, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn cross_is_anticommutative() {
        let a = [1.5, -2.0, 0.25];
        let b = [0.3, 4.0, -1.0];
        let ab = cross(&a, &b).unwrap();
        let ba = cross(&b, &a).unwrap();
        assert_relative_eq!(ab, -ba);
    }

    #[test]
    fn cross_with_self_is_zero() {
        for v in [[1.0, 2.0, 3.0], [-0.5, 7.25, 1e3], [0.0, 0.0, 0.0]] {
            assert_eq!(cross(&v, &v).unwrap(), Vector3::zeros());
        }
    }

    #[test]
    fn cross_matches_nalgebra() {
        let a = [0.2, -1.3, 2.7];
        let b = [4.1, 0.6, -0.9];
        let expected = Vector3::from(a).cross(&Vector3::from(b));
        assert_relative_eq!(cross(&a, &b).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn cross_rejects_wrong_arity() {
        let err = cross(&[1.0, 0.0], &[0.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            CasteljauError::Shape(ShapeError::Dimension {
                expected: 3,
                found: 2
            })
        ));

        let err = cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            CasteljauError::Shape(ShapeError::Dimension { found: 4, .. })
        ));
    }

    #[test]
    fn normalize_unit_length() {
        let v = normalize(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(v.norm(), 1.0);
        assert_relative_eq!(v, Vector3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn normalize_zero_vector_fails() {
        let err = normalize(&Vector3::zeros()).unwrap_err();
        assert!(matches!(
            err,
            CasteljauError::Geometry(GeometryError::ZeroVector)
        ));
    }
}
