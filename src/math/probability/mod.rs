pub mod noise;
pub mod seed;

pub use noise::types::*;
pub use noise::NoiseConfig;
pub use seed::NoiseSeed;
