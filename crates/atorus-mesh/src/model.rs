//! The current torus mesh and the parameters it was built from.

use atorus_geometry::{SurfaceParameters, SurfaceParametersPatch};

use crate::config::TessellationConfig;
use crate::mesh::SurfaceMesh;
use crate::tessellator::tessellate_with;

/// Owns a mesh and rebuilds it wholesale when its parameters change.
///
/// A rendering layer keeps one of these and feeds it UI updates; after an
/// update that returns `true` it re-uploads [`TorusModel::mesh`].
#[derive(Debug, Clone)]
pub struct TorusModel {
    params: SurfaceParameters,
    config: TessellationConfig,
    mesh: SurfaceMesh,
}

impl TorusModel {
    pub fn new(params: SurfaceParameters, config: TessellationConfig) -> Self {
        let mesh = tessellate_with(&params, &config);
        Self {
            params,
            config,
            mesh,
        }
    }

    /// The parameters as requested, before clamping.
    pub fn params(&self) -> &SurfaceParameters {
        &self.params
    }

    pub fn config(&self) -> &TessellationConfig {
        &self.config
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Give up the current mesh.
    pub fn into_mesh(self) -> SurfaceMesh {
        self.mesh
    }

    /// Merge `patch` into the parameters and rebuild if the effective
    /// (clamped) parameters changed. Returns whether the mesh was rebuilt.
    pub fn update(&mut self, patch: &SurfaceParametersPatch) -> bool {
        let params = self.params.apply(patch);
        self.set_params(params)
    }

    /// Replace the parameters, rebuilding if the effective parameters changed.
    pub fn set_params(&mut self, params: SurfaceParameters) -> bool {
        self.params = params;
        if params.clamped() == self.mesh.params {
            return false;
        }
        self.rebuild();
        true
    }

    /// Replace the tessellation config and rebuild if it changed.
    pub fn set_config(&mut self, config: TessellationConfig) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        log::debug!(
            "Rebuilding torus mesh: a={}, r={}, theta={}, {}x{}",
            self.params.a,
            self.params.r,
            self.params.theta,
            self.params.nu,
            self.params.nv
        );
        self.mesh = tessellate_with(&self.params, &self.config);
    }
}

impl Default for TorusModel {
    fn default() -> Self {
        Self::new(SurfaceParameters::default(), TessellationConfig::default())
    }
}
