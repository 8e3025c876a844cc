//! Iso-parameter curve sampling for wireframe rendering.
//!
//! Instead of a triangle mesh, the surface is sampled along curves of constant
//! `u` and constant `v`. Each curve is an independent polyline whose first and
//! last points are the two ends of the closed parameter range.

use atorus_core::traits::BoundingBox;
use atorus_math::{Aabb3, Point3};

use crate::params::SurfaceParameters;
use crate::surface::{AstroidalTorus, Surface};

/// Polylines along the iso-parameter lines of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    /// `Nu` curves of constant `u`, each with `Nv` points across `v ∈ [0, 2π]`.
    pub u_curves: Vec<Vec<Point3>>,
    /// `Nv` curves of constant `v`, each with `Nu` points across `u ∈ [-π, π]`.
    pub v_curves: Vec<Vec<Point3>>,
    /// Effective (clamped) parameters the curves were sampled with.
    pub params: SurfaceParameters,
}

/// `f32` polylines ready for line-strip upload, three floats per point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveBuffers {
    pub u_curves: Vec<Vec<f32>>,
    pub v_curves: Vec<Vec<f32>>,
}

impl CurveSet {
    /// Total number of points over all curves.
    pub fn point_count(&self) -> usize {
        self.u_curves
            .iter()
            .chain(&self.v_curves)
            .map(Vec::len)
            .sum()
    }

    pub fn to_buffers(&self) -> CurveBuffers {
        CurveBuffers {
            u_curves: self.u_curves.iter().map(|c| flatten(c)).collect(),
            v_curves: self.v_curves.iter().map(|c| flatten(c)).collect(),
        }
    }

    pub fn aabb(&self) -> Aabb3 {
        let mut points = self.u_curves.iter().chain(&self.v_curves).flatten();
        let Some(&first) = points.next() else {
            return Aabb3::new(Point3::ZERO, Point3::ZERO);
        };
        let mut aabb = Aabb3::new(first, first);
        for &p in points {
            aabb.include(p);
        }
        aabb
    }
}

impl BoundingBox for CurveSet {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let aabb = self.aabb();
        (aabb.min, aabb.max)
    }
}

fn flatten(points: &[Point3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

/// Sample `Nu` iso-`u` curves and `Nv` iso-`v` curves of the surface.
///
/// Both parameter ranges are sampled inclusively, so the first and last point
/// of every curve coincide on the closed surface.
pub fn sample_curves(params: &SurfaceParameters) -> CurveSet {
    let params = params.clamped();
    let surface = AstroidalTorus::from_params(&params);
    let (nu, nv) = (params.nu, params.nv);

    let u_at = |i: usize| i as f64 / (nu - 1) as f64;
    let v_at = |j: usize| j as f64 / (nv - 1) as f64;

    let u_curves = (0..nu)
        .map(|i| {
            let u01 = u_at(i);
            (0..nv)
                .map(|j| surface.point_at_normalized(u01, v_at(j)))
                .collect()
        })
        .collect();

    let v_curves = (0..nv)
        .map(|j| {
            let v01 = v_at(j);
            (0..nu)
                .map(|i| surface.point_at_normalized(u_at(i), v01))
                .collect()
        })
        .collect();

    log::debug!("Sampled {} u-curves and {} v-curves", nu, nv);

    CurveSet {
        u_curves,
        v_curves,
        params,
    }
}
