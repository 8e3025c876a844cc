//! Profile curves.

mod astroid;

use atorus_math::{Point3, Vector3};

pub use astroid::AstroidProfile;

/// A closed or open parametric curve.
///
/// Profiles swept by a surface live in the XZ plane: `x` is the radial offset
/// from the sweep center and `z` the height.
pub trait Curve: Send + Sync {
    fn point_at(&self, t: f64) -> Point3;

    /// Derivative with respect to `t`; zero at cusps.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Parameter range `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
