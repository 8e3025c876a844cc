//! Per-vertex normal generation.
//!
//! Two strategies are provided. The finite-difference normal uses the surface
//! itself and is accurate enough for normal mapping; the face-accumulation normal
//! only needs the triangle list and is cheaper.

use atorus_core::Tolerance;
use atorus_geometry::Surface;
use atorus_math::periodic::wrap01;
use atorus_math::vector::normalize_normal;
use atorus_math::{Point3, Vector3};

/// Normal at normalized parameters `(u01, v01)` from central differences.
///
/// The surface is evaluated `eps_u`/`eps_v` either side of the vertex, wrapping
/// modulo 1. With `du` and `dv` the two difference vectors, the normal is
/// `normalize(dv × du)`, which points out of the tube for the astroidal torus
/// parameterization. Returns `None` if the cross product is degenerate.
pub fn finite_difference_normal(
    surface: &dyn Surface,
    u01: f64,
    v01: f64,
    eps_u: f64,
    eps_v: f64,
    tol: Tolerance,
) -> Option<Vector3> {
    let du = surface.point_at_normalized(wrap01(u01 + eps_u), v01)
        - surface.point_at_normalized(wrap01(u01 - eps_u), v01);
    let dv = surface.point_at_normalized(u01, wrap01(v01 + eps_v))
        - surface.point_at_normalized(u01, wrap01(v01 - eps_v));
    let n = dv.cross(du);
    let len = n.length();
    if tol.is_degenerate_normal(len) {
        None
    } else {
        Some(n / len)
    }
}

/// Unnormalized face normal of a triangle; its length is twice the triangle's area.
pub fn face_normal(p0: Point3, p1: Point3, p2: Point3) -> Vector3 {
    (p1 - p0).cross(p2 - p0)
}

/// Area-weighted vertex normals accumulated from every incident triangle.
///
/// Returns the normals and the number of vertices whose accumulated normal was
/// degenerate and replaced by the default normal.
pub fn accumulate_face_normals(
    positions: &[Point3],
    indices: &[u32],
    tol: Tolerance,
) -> (Vec<Vector3>, usize) {
    let mut acc = vec![Vector3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let n = face_normal(positions[i0], positions[i1], positions[i2]);
        acc[i0] += n;
        acc[i1] += n;
        acc[i2] += n;
    }

    let mut fallbacks = 0;
    for n in &mut acc {
        if tol.is_degenerate_normal(n.length()) {
            fallbacks += 1;
        }
        *n = normalize_normal(*n, tol);
    }
    (acc, fallbacks)
}
