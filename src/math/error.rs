// src/math/error.rs
use crate::math::probability::noise::NoiseType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("{noise_type:?} noise is not available in {dimension}D")]
    UnsupportedDimension {
        noise_type: NoiseType,
        dimension: usize,
    },

    #[error("Coordinates must have between 2 and 6 components, got {actual}")]
    InvalidDimension { actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type NoiseResult<T> = Result<T, NoiseError>;
