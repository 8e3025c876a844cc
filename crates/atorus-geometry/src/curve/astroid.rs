//! Astroidal profile curve.

use std::f64::consts::PI;

use atorus_math::{DVec2, Point3, Vector3};

use super::Curve;

/// The astroid `a * (cos³t, sin³t)` rotated by `theta`, parameterized over `[-PI, PI]`.
///
/// The curve lives in the XZ plane: X is the radial offset from the tube center
/// and Z the height. It has four cusps, at `t = 0`, `±PI/2` and `±PI`, where the
/// tangent vanishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroidProfile {
    pub scale: f64,
    pub theta: f64,
    /// `(cos theta, sin theta)`, applied with complex multiplication.
    rotation: DVec2,
}

impl AstroidProfile {
    pub fn new(scale: f64, theta: f64) -> Self {
        Self {
            scale,
            theta,
            rotation: DVec2::new(theta.cos(), theta.sin()),
        }
    }

    /// Profile offset `(radial, z)` in the tube's local plane.
    fn offset_at(&self, t: f64) -> DVec2 {
        let (st, ct) = t.sin_cos();
        let local = DVec2::new(self.scale * ct * ct * ct, self.scale * st * st * st);
        self.rotate(local)
    }

    fn derivative_at(&self, t: f64) -> DVec2 {
        let (st, ct) = t.sin_cos();
        let local = DVec2::new(
            -3.0 * self.scale * ct * ct * st,
            3.0 * self.scale * st * st * ct,
        );
        self.rotate(local)
    }

    fn rotate(&self, p: DVec2) -> DVec2 {
        let (c, s) = (self.rotation.x, self.rotation.y);
        DVec2::new(p.x * c - p.y * s, p.x * s + p.y * c)
    }
}

impl Curve for AstroidProfile {
    fn point_at(&self, t: f64) -> Point3 {
        let p = self.offset_at(t);
        Point3::new(p.x, 0.0, p.y)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let d = self.derivative_at(t);
        Vector3::new(d.x, 0.0, d.y)
    }

    fn domain(&self) -> (f64, f64) {
        (-PI, PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_astroid_cusps() {
        let profile = AstroidProfile::new(2.0, 0.0);
        let cusps = [
            (0.0, Point3::new(2.0, 0.0, 0.0)),
            (PI / 2.0, Point3::new(0.0, 0.0, 2.0)),
            (PI, Point3::new(-2.0, 0.0, 0.0)),
            (-PI / 2.0, Point3::new(0.0, 0.0, -2.0)),
        ];
        for (t, expected) in cusps {
            let p = profile.point_at(t);
            assert!(
                (p - expected).length() < 1e-12,
                "Cusp at t={}: expected {:?}, got {:?}",
                t,
                expected,
                p
            );
            assert!(profile.tangent_at(t).length() < 1e-12);
        }
    }

    #[test]
    fn test_astroid_implicit_equation() {
        // |x|^(2/3) + |z|^(2/3) = a^(2/3)
        let profile = AstroidProfile::new(1.5, 0.0);
        for i in 0..16 {
            let t = -PI + i as f64 * PI / 8.0 + 0.1;
            let p = profile.point_at(t);
            let lhs = p.x.abs().powf(2.0 / 3.0) + p.z.abs().powf(2.0 / 3.0);
            assert_abs_diff_eq!(lhs, 1.5_f64.powf(2.0 / 3.0), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_rotation_by_theta() {
        let profile = AstroidProfile::new(1.0, PI / 2.0);
        // Rotating the outer cusp (1, 0) by 90 degrees lands it on top.
        let p = profile.point_at(0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let profile = AstroidProfile::new(1.0, 0.3);
        let h = 1e-6;
        for i in 0..12 {
            let t = -3.0 + i as f64 * 0.5;
            let fd = (profile.point_at(t + h) - profile.point_at(t - h)) / (2.0 * h);
            let analytic = profile.tangent_at(t);
            assert!(
                (fd - analytic).length() < 1e-6,
                "Tangent mismatch at t={}: fd={:?}, analytic={:?}",
                t,
                fd,
                analytic
            );
        }
    }

    #[test]
    fn test_profile_is_closed() {
        let profile = AstroidProfile::new(1.0, 0.7);
        let (t0, t1) = profile.domain();
        assert!((profile.point_at(t0) - profile.point_at(t1)).length() < 1e-12);
    }
}
