// src/math/probability/noise/seamless.rs
//
// Tileable noise: each tiled axis is wrapped onto a circle with circumference
// `size`, so the field is sampled one dimension higher per axis.

use super::noise::NoiseConfig;
use crate::math::error::{NoiseError, NoiseResult};
use crate::math::utils::angles::{cos_turns, sin_turns};
use crate::math::utils::constants::TAU;

/// Position on the circle of circumference `size` belonging to `position`.
#[inline]
fn wrap(position: f32, size: f32) -> [f32; 2] {
    let turns = position.rem_euclid(size) / size;
    let radius = size / TAU;
    [cos_turns(turns) * radius, sin_turns(turns) * radius]
}

fn check_sizes(sizes: &[f32]) -> NoiseResult<()> {
    match sizes.iter().find(|s| !(s.is_finite() && **s > 0.)) {
        Some(size) => Err(NoiseError::InvalidConfiguration {
            message: format!("seamless tile size must be positive and finite, got {size}"),
        }),
        None => Ok(()),
    }
}

impl NoiseConfig {
    /// Noise repeating every `size` units along `x`, taken from the 2D field.
    pub fn seamless_1d(&self, x: f32, size: f32, seed: i32) -> NoiseResult<f32> {
        check_sizes(&[size])?;
        let [a, b] = wrap(x, size);
        self.sample_with_seed_2d(a, b, seed)
    }

    /// Noise tiling with period `size_x` × `size_y`, taken from the 4D field.
    pub fn seamless_2d(
        &self,
        x: f32,
        y: f32,
        size_x: f32,
        size_y: f32,
        seed: i32,
    ) -> NoiseResult<f32> {
        check_sizes(&[size_x, size_y])?;
        let [a, b] = wrap(x, size_x);
        let [c, d] = wrap(y, size_y);
        self.sample_with_seed_4d(a, b, c, d, seed)
    }

    /// Noise tiling in three axes, taken from the 6D field.
    #[allow(clippy::too_many_arguments)]
    pub fn seamless_3d(
        &self,
        x: f32,
        y: f32,
        z: f32,
        size_x: f32,
        size_y: f32,
        size_z: f32,
        seed: i32,
    ) -> NoiseResult<f32> {
        check_sizes(&[size_x, size_y, size_z])?;
        let [a, b] = wrap(x, size_x);
        let [c, d] = wrap(y, size_y);
        let [e, f] = wrap(z, size_z);
        self.sample_with_seed_6d(a, b, c, d, e, f, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::probability::noise::types::NoiseType;

    #[test]
    fn test_wrap_stays_on_circle() {
        for i in 0..64 {
            let [a, b] = wrap(i as f32 * 0.75, 16.0);
            let radius = (a * a + b * b).sqrt();
            // Die Polynomnäherung weicht um bis zu 0.1 % ab
            assert!((radius - 16.0 / TAU).abs() < 0.01 * 16.0 / TAU);
        }
    }

    #[test]
    fn test_seamless_2d_wraps_exactly() {
        for noise_type in [NoiseType::Simplex, NoiseType::Value, NoiseType::PerlinFractal] {
            let config = NoiseConfig::new().with_noise_type(noise_type).with_frequency(1.0);
            let size = 16.0;
            for (x, y) in [(3.25, 7.5), (0.0, 0.5), (15.5, 1.125), (-4.75, 9.0)] {
                let base = config.seamless_2d(x, y, size, size, 42).unwrap();
                assert_eq!(base, config.seamless_2d(x + size, y, size, size, 42).unwrap());
                assert_eq!(base, config.seamless_2d(x, y - size, size, size, 42).unwrap());
            }
        }
    }

    #[test]
    fn test_seamless_1d_and_3d_wrap() {
        let config = NoiseConfig::new().with_frequency(0.5);
        assert_eq!(
            config.seamless_1d(2.5, 8.0, 1).unwrap(),
            config.seamless_1d(10.5, 8.0, 1).unwrap()
        );
        assert_eq!(
            config.seamless_3d(1.0, 2.0, 3.0, 4.0, 8.0, 16.0, 1).unwrap(),
            config.seamless_3d(5.0, -6.0, 19.0, 4.0, 8.0, 16.0, 1).unwrap()
        );
    }

    #[test]
    fn test_seamless_uses_given_seed() {
        let config = NoiseConfig::new().with_seed(5).with_frequency(1.0);
        let with_own_seed = config.seamless_2d(1.5, 2.5, 10.0, 10.0, 5).unwrap();
        let with_other_seed = config.seamless_2d(1.5, 2.5, 10.0, 10.0, 6).unwrap();
        assert_ne!(with_own_seed, with_other_seed);
        assert_eq!(config.seed(), 5);
    }

    #[test]
    fn test_invalid_sizes_and_dimensions() {
        let config = NoiseConfig::new();
        assert!(matches!(
            config.seamless_1d(1.0, 0.0, 1),
            Err(NoiseError::InvalidConfiguration { .. })
        ));
        assert!(config.seamless_2d(1.0, 1.0, 4.0, f32::NAN, 1).is_err());

        let cellular = NoiseConfig::new().with_noise_type(NoiseType::Cellular);
        assert!(cellular.seamless_1d(1.0, 4.0, 1).is_ok());
        assert_eq!(
            cellular.seamless_2d(1.0, 1.0, 4.0, 4.0, 1),
            Err(NoiseError::UnsupportedDimension {
                noise_type: NoiseType::Cellular,
                dimension: 4,
            })
        );
    }
}
