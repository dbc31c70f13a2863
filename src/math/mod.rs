pub mod error;
pub mod probability;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{NoiseError, NoiseResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{NoiseError, NoiseResult},
        probability::{noise::*, seed::NoiseSeed},
    };
}
