//! Tessellation options.

use std::path::Path;

use atorus_core::traits::Validate;
use atorus_core::{AtorusError, Result, Tolerance};
use serde::{Deserialize, Serialize};

/// How the periodic UV grid is laid out in the vertex buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLayout {
    /// `(Nu+1) x (Nv+1)` vertices. The seam row and column are duplicated so UVs
    /// run continuously from 0 to 1.
    #[default]
    Clamped,
    /// `Nu x Nv` vertices with modular indices. No duplicated seam; UVs jump from
    /// `(N-1)/N` back to 0 across it.
    Wrapped,
}

/// How per-vertex normals are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalMethod {
    /// Central differences of the surface one grid step either side of each vertex.
    #[default]
    FiniteDifference,
    /// Sum of the unnormalized face normals of the incident triangles.
    FaceAccumulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    pub layout: GridLayout,
    pub normals: NormalMethod,
    pub tolerance: Tolerance,
    /// Evaluate per-vertex work on the rayon thread pool.
    pub parallel: bool,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            normals: NormalMethod::default(),
            tolerance: Tolerance::default(),
            parallel: true,
        }
    }
}

impl TessellationConfig {
    pub fn new(layout: GridLayout, normals: NormalMethod) -> Self {
        Self {
            layout,
            normals,
            ..Self::default()
        }
    }

    pub fn sequential(self) -> Self {
        Self {
            parallel: false,
            ..self
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Validate for TessellationConfig {
    fn validate(&self) -> Result<()> {
        let tol = &self.tolerance;
        for (name, value) in [
            ("normal_epsilon", tol.normal_epsilon),
            ("uv_denominator", tol.uv_denominator),
            ("tangent_epsilon", tol.tangent_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(AtorusError::Config(format!(
                    "tolerance.{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(tol.pole_threshold > 0.0 && tol.pole_threshold <= 1.0) {
            return Err(AtorusError::Config(format!(
                "tolerance.pole_threshold must be in (0, 1], got {}",
                tol.pole_threshold
            )));
        }
        Ok(())
    }
}
