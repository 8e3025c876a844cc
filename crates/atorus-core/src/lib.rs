pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{AtorusError, Result};
pub use tolerance::Tolerance;
