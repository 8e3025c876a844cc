//! Astroidal torus surface.

use std::f64::consts::TAU;

use atorus_math::{Point3, Vector3};

use super::Surface;
use crate::curve::{AstroidProfile, Curve};
use crate::params::SurfaceParameters;

/// An astroidal profile swept around the Z axis.
///
/// `u` in `[-PI, PI]` runs around the profile and `v` in `[0, 2*PI]` around the
/// Z axis:
///
/// ```text
/// (x, z) = rotate(theta) * a * (cos³u, sin³u)
/// P(u, v) = ((r + x) cos v, (r + x) sin v, z)
/// ```
///
/// Both directions are periodic, so `P(-PI, v) == P(PI, v)` and `P(u, 0) == P(u, 2*PI)`.
/// `∂P/∂v × ∂P/∂u` points out of the tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroidalTorus {
    pub major_radius: f64,
    pub profile: AstroidProfile,
}

impl AstroidalTorus {
    pub fn new(a: f64, r: f64, theta: f64) -> Self {
        Self {
            major_radius: r,
            profile: AstroidProfile::new(a, theta),
        }
    }

    pub fn from_params(params: &SurfaceParameters) -> Self {
        Self::new(params.a, params.r, params.theta)
    }

    /// Partial derivatives `(∂P/∂u, ∂P/∂v)` at `(u, v)`. `∂P/∂u` vanishes at the profile cusps.
    pub fn derivatives_at(&self, u: f64, v: f64) -> (Vector3, Vector3) {
        let rad = self.major_radius + self.profile.point_at(u).x;
        let d = self.profile.tangent_at(u);
        let (sv, cv) = v.sin_cos();
        let du = Vector3::new(d.x * cv, d.x * sv, d.z);
        let dv = Vector3::new(-rad * sv, rad * cv, 0.0);
        (du, dv)
    }
}

impl Surface for AstroidalTorus {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let offset = self.profile.point_at(u);
        let rad = self.major_radius + offset.x;
        let (sv, cv) = v.sin_cos();
        Point3::new(rad * cv, rad * sv, offset.z)
    }

    fn domain_u(&self) -> (f64, f64) {
        self.profile.domain()
    }

    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
