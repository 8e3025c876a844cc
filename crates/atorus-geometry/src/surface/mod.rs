//! Surface traits and implementations.

mod astroidal_torus;

use atorus_math::Point3;

pub use astroidal_torus::AstroidalTorus;

/// A parametric surface over a rectangular `(u, v)` domain.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64);

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64);

    /// Evaluate the surface at parameters normalized to `[0, 1]` over each domain.
    fn point_at_normalized(&self, u01: f64, v01: f64) -> Point3 {
        let (u_min, u_max) = self.domain_u();
        let (v_min, v_max) = self.domain_v();
        self.point_at(
            u_min + (u_max - u_min) * u01,
            v_min + (v_max - v_min) * v01,
        )
    }
}
