//! Per-vertex tangents aligned with the UV parameterization, for normal mapping.

use atorus_core::Tolerance;
use atorus_math::periodic::wrap_delta;
use atorus_math::vector::{fallback_tangent, tangent_frame};
use atorus_math::{Point2, Point3, Vector3};

/// Tangent of one triangle: the object-space direction of increasing `u`.
///
/// Solves the UV-to-object linear system for the triangle's edges. Returns
/// `None` when the UV mapping is singular. With `periodic_uv`, UV differences
/// are taken modulo 1 so triangles spanning a wrapped seam stay well-formed.
pub fn triangle_tangent(
    p: [Point3; 3],
    w: [Point2; 3],
    periodic_uv: bool,
    tol: Tolerance,
) -> Option<Vector3> {
    let e1 = p[1] - p[0];
    let e2 = p[2] - p[0];

    let mut d1 = w[1] - w[0];
    let mut d2 = w[2] - w[0];
    if periodic_uv {
        d1 = Point2::new(wrap_delta(d1.x), wrap_delta(d1.y));
        d2 = Point2::new(wrap_delta(d2.x), wrap_delta(d2.y));
    }

    let denom = d1.x * d2.y - d1.y * d2.x;
    if tol.is_singular_uv(denom) {
        return None;
    }
    Some((e1 * d2.y - e2 * d1.y) / denom)
}

/// Sum of the triangle tangents incident to each vertex, in index order.
///
/// Triangles with a singular UV mapping contribute nothing. Each sum still
/// needs [`finish_tangent`] against its vertex normal.
pub fn accumulate_tangents(
    positions: &[Point3],
    uvs: &[Point2],
    indices: &[u32],
    periodic_uv: bool,
    tol: Tolerance,
) -> Vec<Vector3> {
    let mut acc = vec![Vector3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let ids = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let p = ids.map(|i| positions[i]);
        let w = ids.map(|i| uvs[i]);
        if let Some(t) = triangle_tangent(p, w, periodic_uv, tol) {
            for i in ids {
                acc[i] += t;
            }
        }
    }
    acc
}

/// Orthogonalize an accumulated tangent against the unit `normal` and normalize it.
///
/// Where the result is degenerate (unreferenced vertex, every incident triangle
/// skipped, or tangent parallel to the normal) the fallback `up × n` is used and
/// the flag is `true`. The returned tangent is always finite, unit length, and
/// orthogonal to `normal`.
pub fn finish_tangent(acc: Vector3, normal: Vector3, tol: Tolerance) -> (Vector3, bool) {
    match tangent_frame(acc, normal, tol) {
        Some(t) => (t, false),
        None => (fallback_tangent(normal, tol), true),
    }
}
