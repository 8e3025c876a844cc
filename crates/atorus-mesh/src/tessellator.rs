//! Uniform UV-grid tessellation of the astroidal torus.
//!
//! Tessellation runs in two phases separated by a barrier:
//!
//! 1. Per vertex: evaluate the surface position, UV and (for finite differences)
//!    the normal. Vertices are independent and evaluated in parallel.
//! 2. Per triangle: accumulate face normals and tangents into their vertices in
//!    index order, then normalize and orthogonalize each vertex in parallel.
//!
//! Accumulation is sequential, so the output does not depend on thread count.

use atorus_geometry::surface::AstroidalTorus;
use atorus_geometry::{Surface, SurfaceParameters};
use atorus_math::vector::DEFAULT_NORMAL;
use atorus_math::{Point2, Point3, Vector3};
use rayon::prelude::*;

use crate::config::{NormalMethod, TessellationConfig};
use crate::grid::Grid;
use crate::mesh::SurfaceMesh;
use crate::normals::{accumulate_face_normals, finite_difference_normal};
use crate::tangents::{accumulate_tangents, finish_tangent};

/// Tessellate with the default configuration: clamped grid, finite-difference normals.
pub fn tessellate(params: &SurfaceParameters) -> SurfaceMesh {
    tessellate_with(params, &TessellationConfig::default())
}

/// Tessellate the surface described by `params`.
///
/// The resolution is clamped to [`atorus_geometry::MIN_SEGMENTS`] first. The
/// result always has finite, unit-length normals and tangents with every
/// tangent orthogonal to its normal.
pub fn tessellate_with(params: &SurfaceParameters, config: &TessellationConfig) -> SurfaceMesh {
    let params = params.clamped();
    let surface = AstroidalTorus::from_params(&params);
    let grid = Grid::new(config.layout, params.nu, params.nv);
    let tol = config.tolerance;
    let eps_u = 1.0 / params.nu as f64;
    let eps_v = 1.0 / params.nv as f64;

    let samples = map_vertices(grid.vertex_count(), config.parallel, |k| {
        let (i, j) = grid.grid_coords(k);
        let uv = grid.uv(i, j);
        let normal = match config.normals {
            NormalMethod::FiniteDifference => Some(finite_difference_normal(
                &surface, uv.x, uv.y, eps_u, eps_v, tol,
            )),
            NormalMethod::FaceAccumulation => None,
        };
        VertexSample {
            position: surface.point_at_normalized(uv.x, uv.y),
            uv,
            normal,
        }
    });

    let positions: Vec<Point3> = samples.iter().map(|s| s.position).collect();
    let uvs: Vec<Point2> = samples.iter().map(|s| s.uv).collect();
    let indices = grid.indices();

    let (normals, normal_fallbacks) = match config.normals {
        NormalMethod::FiniteDifference => {
            let mut fallbacks = 0;
            let normals: Vec<Vector3> = samples
                .iter()
                .map(|s| match s.normal {
                    Some(Some(n)) => n,
                    _ => {
                        fallbacks += 1;
                        DEFAULT_NORMAL
                    }
                })
                .collect();
            (normals, fallbacks)
        }
        NormalMethod::FaceAccumulation => accumulate_face_normals(&positions, &indices, tol),
    };

    let acc = accumulate_tangents(&positions, &uvs, &indices, grid.is_periodic_uv(), tol);
    let finished = map_vertices(acc.len(), config.parallel, |k| {
        finish_tangent(acc[k], normals[k], tol)
    });
    let tangent_fallbacks = finished.iter().filter(|(_, fallback)| *fallback).count();
    let tangents: Vec<Vector3> = finished.into_iter().map(|(t, _)| t).collect();

    if normal_fallbacks > 0 || tangent_fallbacks > 0 {
        log::trace!(
            "Degenerate frames: {} default normals, {} fallback tangents",
            normal_fallbacks,
            tangent_fallbacks
        );
    }
    log::debug!(
        "Tessellated {}x{} {:?} grid: {} vertices, {} triangles",
        params.nu,
        params.nv,
        config.layout,
        positions.len(),
        indices.len() / 3
    );

    SurfaceMesh {
        positions,
        normals,
        uvs,
        tangents,
        indices,
        params,
    }
}

struct VertexSample {
    position: Point3,
    uv: Point2,
    /// `None` when normals come from faces; `Some(None)` for a degenerate difference.
    normal: Option<Option<Vector3>>,
}

fn map_vertices<T, F>(count: usize, parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if parallel {
        (0..count).into_par_iter().map(f).collect()
    } else {
        (0..count).map(f).collect()
    }
}
