//! Façade sound transmission after ISO 12354-4: interior reverberant field,
//! per-element radiated power and exterior levels at receiver points.

pub mod constants;
pub mod error;
pub mod math_utils;
pub mod spectrum;
pub mod geometry_math;
pub mod material;
pub mod transmission_loss;
pub mod interior_field;
pub mod element_radiation;
pub mod exterior_field;
pub mod facade_analysis;

pub use error::AcousticsError;
pub use spectrum::{BandHz, Spectrum};
