//! Normalization with deterministic fallbacks.

use atorus_core::Tolerance;

use crate::Vector3;

/// Direction used when a normal cannot be normalized.
pub const DEFAULT_NORMAL: Vector3 = Vector3::Z;

/// Normalize `v`, or return `fallback` if its length is zero, not finite, or below `epsilon`.
pub fn normalize_or(v: Vector3, epsilon: f64, fallback: Vector3) -> Vector3 {
    let len = v.length();
    if !len.is_finite() || len == 0.0 || len < epsilon {
        fallback
    } else {
        v / len
    }
}

/// Normalize a normal candidate, falling back to [`DEFAULT_NORMAL`].
pub fn normalize_normal(v: Vector3, tol: Tolerance) -> Vector3 {
    normalize_or(v, tol.normal_epsilon, DEFAULT_NORMAL)
}

/// Remove the component of `t` along the unit vector `n` (one Gram-Schmidt step).
pub fn orthogonalize(t: Vector3, n: Vector3) -> Vector3 {
    t - n * n.dot(t)
}

/// A unit tangent orthogonal to `n` built from a fixed up axis.
///
/// Uses `+Y` as the up axis unless `n` is within the pole threshold of it,
/// in which case `+X` is used.
pub fn fallback_tangent(n: Vector3, tol: Tolerance) -> Vector3 {
    let up = if tol.is_near_pole(n.y) {
        Vector3::X
    } else {
        Vector3::Y
    };
    let t = up.cross(n);
    let len = t.length();
    if len > 0.0 && len.is_finite() {
        t / len
    } else {
        // n is zero or non-finite; any axis is orthogonal enough
        Vector3::X
    }
}

/// Orthogonalize `t` against the unit normal `n` and normalize it.
///
/// Returns `None` when the result is degenerate, so the caller can count fallbacks.
pub fn tangent_frame(t: Vector3, n: Vector3, tol: Tolerance) -> Option<Vector3> {
    // Second pass removes the rounding left over from a nearly parallel `t`.
    let t = orthogonalize(orthogonalize(t, n), n);
    let len = t.length();
    if tol.is_degenerate_tangent(len) {
        None
    } else {
        Some(t / len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::dvec3;

    #[test]
    fn test_normalize_or() {
        let n = normalize_or(dvec3(3.0, 0.0, 4.0), 1e-12, DEFAULT_NORMAL);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-15);
        assert_abs_diff_eq!(n.z, 0.8, epsilon = 1e-15);

        assert_eq!(normalize_or(Vector3::ZERO, 1e-12, DEFAULT_NORMAL), Vector3::Z);
        assert_eq!(
            normalize_or(dvec3(f64::NAN, 0.0, 0.0), 1e-12, DEFAULT_NORMAL),
            Vector3::Z
        );
    }

    #[test]
    fn test_zero_epsilon_never_divides_by_zero() {
        assert_eq!(normalize_or(Vector3::ZERO, 0.0, DEFAULT_NORMAL), DEFAULT_NORMAL);

        let tol = Tolerance {
            normal_epsilon: 0.0,
            tangent_epsilon: 0.0,
            ..Tolerance::default()
        };
        assert_eq!(normalize_normal(Vector3::ZERO, tol), DEFAULT_NORMAL);
        assert!(tangent_frame(Vector3::ZERO, Vector3::Z, tol).is_none());
        assert!(tangent_frame(dvec3(0.0, 0.0, 2.0), Vector3::Z, tol).is_none());
    }

    #[test]
    fn test_fallback_tangent_regular() {
        let tol = Tolerance::default();
        let n = dvec3(1.0, 0.0, 0.0);
        let t = fallback_tangent(n, tol);
        // Y x X = -Z
        assert_abs_diff_eq!(t.z, -1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(t.dot(n), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_fallback_tangent_near_pole() {
        let tol = Tolerance::default();
        for n in [Vector3::Y, Vector3::NEG_Y, dvec3(0.01, 0.99995, 0.0).normalize()] {
            let t = fallback_tangent(n, tol);
            assert_abs_diff_eq!(t.length(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(t.dot(n), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tangent_frame() {
        let tol = Tolerance::default();
        let n = Vector3::Z;
        let t = tangent_frame(dvec3(2.0, 0.0, 5.0), n, tol).unwrap();
        assert_abs_diff_eq!(t.x, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(t.z, 0.0, epsilon = 1e-15);

        assert!(tangent_frame(dvec3(0.0, 0.0, 3.0), n, tol).is_none());
        assert!(tangent_frame(Vector3::ZERO, n, tol).is_none());
    }
}
