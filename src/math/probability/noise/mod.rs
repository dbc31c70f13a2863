// src/math/probability/noise/mod.rs

pub mod constants;
pub mod noise;
pub mod types;

mod cellular;
mod cubic;
mod dispatch;
mod fractal;
mod hash;
mod hybrid;
mod interpolation;
mod perlin;
mod perturb;
mod seamless;
mod simplex;
mod value;
mod white;

#[cfg(test)]
mod tests;

pub use constants::{DEFAULT_FREQUENCY, DEFAULT_SEED, MIN_FREQUENCY};
pub use noise::NoiseConfig;
pub use types::*;
