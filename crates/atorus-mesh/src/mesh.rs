use atorus_core::traits::{BoundingBox, Validate};
use atorus_core::{AtorusError, Result};
use atorus_geometry::SurfaceParameters;
use atorus_math::aabb::Aabb3;
use atorus_math::{Point2, Point3, Vector3};

/// Tessellated surface with per-vertex normals, UVs and tangents.
///
/// Immutable once built; a change of parameters builds a new mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub uvs: Vec<Point2>,
    pub tangents: Vec<Vector3>,
    pub indices: Vec<u32>,
    /// Effective (clamped) parameters the mesh was built with.
    pub params: SurfaceParameters,
}

impl SurfaceMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex indices of triangle `t`.
    pub fn triangle(&self, t: usize) -> [usize; 3] {
        let tri = &self.indices[t * 3..t * 3 + 3];
        [tri[0] as usize, tri[1] as usize, tri[2] as usize]
    }

    /// Unnormalized geometric normal of triangle `t` from its winding.
    pub fn face_normal(&self, t: usize) -> Vector3 {
        let [i0, i1, i2] = self.triangle(t);
        let p0 = self.positions[i0];
        (self.positions[i1] - p0).cross(self.positions[i2] - p0)
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn aabb(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl BoundingBox for SurfaceMesh {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let aabb = self.aabb();
        (aabb.min, aabb.max)
    }
}

impl Validate for SurfaceMesh {
    fn validate(&self) -> Result<()> {
        let n = self.positions.len();
        for (name, len) in [
            ("normals", self.normals.len()),
            ("uvs", self.uvs.len()),
            ("tangents", self.tangents.len()),
        ] {
            if len != n {
                return Err(AtorusError::InvalidMesh(format!(
                    "{name} has {len} entries for {n} positions"
                )));
            }
        }

        if self.indices.len() % 3 != 0 {
            return Err(AtorusError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(&idx) = self.indices.iter().find(|&&idx| idx as usize >= n) {
            return Err(AtorusError::InvalidMesh(format!(
                "index {idx} out of bounds (n={n})"
            )));
        }

        let mut vectors = self
            .positions
            .iter()
            .chain(&self.normals)
            .chain(&self.tangents);
        if vectors.any(|v| !v.is_finite()) || self.uvs.iter().any(|w| !w.is_finite()) {
            return Err(AtorusError::InvalidMesh(
                "non-finite vertex attribute".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atorus_math::DVec3;

    fn single_triangle() -> SurfaceMesh {
        SurfaceMesh {
            positions: vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![DVec3::Z; 3],
            uvs: vec![Point2::ZERO, Point2::X, Point2::Y],
            tangents: vec![DVec3::X; 3],
            indices: vec![0, 1, 2],
            params: SurfaceParameters::default(),
        }
    }

    #[test]
    fn test_vertex_and_triangle_count() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_face_normal() {
        let mesh = single_triangle();
        assert_eq!(mesh.face_normal(0), DVec3::Z);
    }

    #[test]
    fn test_bounding_box() {
        let mesh = single_triangle();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_validate_ok() {
        single_triangle().validate().unwrap();
    }

    #[test]
    fn test_validate_out_of_range_index() {
        let mut mesh = single_triangle();
        mesh.indices[2] = 3;
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("out of bounds"), "{err}");
    }

    #[test]
    fn test_validate_mismatched_lengths() {
        let mut mesh = single_triangle();
        mesh.tangents.pop();
        assert!(matches!(mesh.validate(), Err(AtorusError::InvalidMesh(_))));
    }

    #[test]
    fn test_validate_nan() {
        let mut mesh = single_triangle();
        mesh.normals[1] = DVec3::new(f64::NAN, 0.0, 1.0);
        assert!(matches!(mesh.validate(), Err(AtorusError::InvalidMesh(_))));
    }

    #[test]
    fn test_validate_partial_triangle() {
        let mut mesh = single_triangle();
        mesh.indices.push(0);
        assert!(matches!(mesh.validate(), Err(AtorusError::InvalidMesh(_))));
    }
}
