// ./src/lib.rs
//! Deterministic procedural noise: value, gradient, simplex, cubic, cellular,
//! white and the foam/honey/mutant hybrids in 2D to 6D, with fractal layering,
//! gradient perturbation and seamless tiling.

pub mod math;

pub use math::error::{NoiseError, NoiseResult};
pub use math::probability::noise::{
    CellularDistanceFunction, CellularReturnType, FractalType, Interpolation, NoiseConfig,
    NoiseType,
};
pub use math::probability::seed::NoiseSeed;
