//! Shape and resolution parameters of the astroidal torus.

use std::path::Path;

use atorus_core::traits::Validate;
use atorus_core::{AtorusError, Result};
use serde::{Deserialize, Serialize};

/// Smallest tessellation resolution along either parametric direction.
pub const MIN_SEGMENTS: usize = 24;

/// Shape and resolution of an astroidal torus.
///
/// `a` scales the astroidal tube cross-section, `r` is the major radius, and
/// `theta` rotates the cross-section in its own plane before it is swept around
/// the Z axis. `nu`/`nv` are the number of segments along `u` (around the tube)
/// and `v` (around the Z axis).
///
/// Nothing here stops `r <= |a|`; such a surface self-intersects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParameters {
    pub a: f64,
    pub r: f64,
    pub theta: f64,
    #[serde(rename = "Nu")]
    pub nu: usize,
    #[serde(rename = "Nv")]
    pub nv: usize,
}

impl SurfaceParameters {
    pub const DEFAULT_NU: usize = 64;
    pub const DEFAULT_NV: usize = 128;

    pub fn new(a: f64, r: f64, theta: f64, nu: usize, nv: usize) -> Self {
        Self { a, r, theta, nu, nv }
    }

    /// Default shape at the given resolution.
    pub fn with_resolution(nu: usize, nv: usize) -> Self {
        Self {
            nu,
            nv,
            ..Self::default()
        }
    }

    /// Copy with `nu` and `nv` raised to at least [`MIN_SEGMENTS`].
    pub fn clamped(&self) -> Self {
        let nu = self.nu.max(MIN_SEGMENTS);
        let nv = self.nv.max(MIN_SEGMENTS);
        if nu != self.nu || nv != self.nv {
            log::warn!(
                "Resolution {}x{} raised to {}x{} (minimum {})",
                self.nu,
                self.nv,
                nu,
                nv,
                MIN_SEGMENTS
            );
        }
        if self.allows_self_intersection() {
            log::warn!(
                "Major radius {} does not exceed profile scale {}; surface self-intersects",
                self.r,
                self.a.abs()
            );
        }
        Self { nu, nv, ..*self }
    }

    /// Whether the swept profile can cross the Z axis.
    pub fn allows_self_intersection(&self) -> bool {
        self.r <= self.a.abs()
    }

    /// Copy with every field present in `patch` replaced.
    pub fn apply(&self, patch: &SurfaceParametersPatch) -> Self {
        Self {
            a: patch.a.unwrap_or(self.a),
            r: patch.r.unwrap_or(self.r),
            theta: patch.theta.unwrap_or(self.theta),
            nu: patch.nu.unwrap_or(self.nu),
            nv: patch.nv.unwrap_or(self.nv),
        }
    }

    /// Parse parameters from JSON. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

impl Default for SurfaceParameters {
    fn default() -> Self {
        Self {
            a: 1.0,
            r: 2.0,
            theta: 0.0,
            nu: Self::DEFAULT_NU,
            nv: Self::DEFAULT_NV,
        }
    }
}

impl Validate for SurfaceParameters {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("a", self.a), ("r", self.r), ("theta", self.theta)] {
            if !value.is_finite() {
                return Err(AtorusError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.a <= 0.0 {
            return Err(AtorusError::InvalidParameter(format!(
                "a must be positive, got {}",
                self.a
            )));
        }
        if self.r <= 0.0 {
            return Err(AtorusError::InvalidParameter(format!(
                "r must be positive, got {}",
                self.r
            )));
        }
        Ok(())
    }
}

/// A partial update to [`SurfaceParameters`], as produced by a single UI control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParametersPatch {
    pub a: Option<f64>,
    pub r: Option<f64>,
    pub theta: Option<f64>,
    #[serde(rename = "Nu")]
    pub nu: Option<usize>,
    #[serde(rename = "Nv")]
    pub nv: Option<usize>,
}

impl SurfaceParametersPatch {
    pub fn resolution(nu: usize, nv: usize) -> Self {
        Self {
            nu: Some(nu),
            nv: Some(nv),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
