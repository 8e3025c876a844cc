/// Numeric thresholds for the degenerate cases of surface tessellation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Minimum length of a normal before the default normal is substituted
    pub normal_epsilon: f64,
    /// Minimum `|denom|` of the UV-to-object linear system for tangents
    pub uv_denominator: f64,
    /// Minimum length of an orthogonalized tangent before the fallback is used
    pub tangent_epsilon: f64,
    /// `|n.y|` at or above which the fallback tangent is built from the X axis
    pub pole_threshold: f64,
}

impl Tolerance {
    pub const DEFAULT_NORMAL_EPSILON: f64 = 1e-12;
    pub const DEFAULT_UV_DENOMINATOR: f64 = 1e-10;
    pub const DEFAULT_TANGENT_EPSILON: f64 = 1e-8;
    pub const DEFAULT_POLE_THRESHOLD: f64 = 0.999;

    pub fn default_precision() -> Self {
        Self {
            normal_epsilon: Self::DEFAULT_NORMAL_EPSILON,
            uv_denominator: Self::DEFAULT_UV_DENOMINATOR,
            tangent_epsilon: Self::DEFAULT_TANGENT_EPSILON,
            pole_threshold: Self::DEFAULT_POLE_THRESHOLD,
        }
    }

    /// Check if a vector length is too small to normalize as a normal
    pub fn is_degenerate_normal(self, length: f64) -> bool {
        !length.is_finite() || length == 0.0 || length < self.normal_epsilon
    }

    /// Check if a UV determinant is too small to invert
    pub fn is_singular_uv(self, denom: f64) -> bool {
        !denom.is_finite() || denom == 0.0 || denom.abs() < self.uv_denominator
    }

    /// Check if a tangent length is too small to normalize
    pub fn is_degenerate_tangent(self, length: f64) -> bool {
        !length.is_finite() || length == 0.0 || length < self.tangent_epsilon
    }

    /// Check if a normal's Y component is close enough to the pole to need the X axis
    pub fn is_near_pole(self, normal_y: f64) -> bool {
        normal_y.abs() >= self.pole_threshold
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
