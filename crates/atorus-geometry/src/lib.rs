//! Astroidal torus geometry: the profile curve, the swept surface, and iso-curve sampling.

pub mod curve;
pub mod params;
pub mod sampler;
pub mod surface;

pub use curve::Curve;
pub use params::{SurfaceParameters, SurfaceParametersPatch, MIN_SEGMENTS};
pub use sampler::{sample_curves, CurveSet};
pub use surface::Surface;
