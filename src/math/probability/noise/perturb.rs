// src/math/probability/noise/perturb.rs
//
// Gradient perturbation (domain warp): the coordinate is pushed along the
// interpolated cellular jitter field. Works in place on 2D and 3D points.

use super::cellular::cell_vector;
use super::constants::*;
use super::interpolation::lattice;
use super::noise::NoiseConfig;
use super::types::Interpolation;
use super::value::fold_lerp;

/// One warp pass with an explicit amplitude and frequency.
fn perturb_pass<const N: usize>(
    seed: i32,
    amp: f32,
    frequency: f32,
    interpolation: Interpolation,
    coords: &mut [f32; N],
) {
    let scaled: [f32; N] = std::array::from_fn(|d| coords[d] * frequency);
    let cells: [(i32, f32); N] = std::array::from_fn(|d| lattice(scaled[d]));
    let fade: [f32; N] = std::array::from_fn(|d| interpolation.apply(cells[d].1));

    // Eine Eckenliste je Komponente des Verschiebungsvektors
    let count = 1 << N;
    let mut components = [[0f32; 8]; N];
    for i in 0..count {
        let cell: [i32; N] =
            std::array::from_fn(|d| cells[d].0.wrapping_add(((i >> d) & 1) as i32));
        let jitter = cell_vector(cell, seed);
        for (component, &j) in components.iter_mut().zip(jitter) {
            component[i] = j;
        }
    }

    for (c, component) in coords.iter_mut().zip(components.iter_mut()) {
        *c += fold_lerp(&mut component[..count], &fade) * amp;
    }
}

/// Single warp pass at the configured frequency.
pub(crate) fn gradient_perturb<const N: usize>(
    config: &NoiseConfig,
    seed: i32,
    coords: &mut [f32; N],
) {
    let amp = config.gradient_perturb_amp() / CELL_JITTER;
    perturb_pass(seed, amp, config.frequency(), config.interpolation(), coords);
}

/// One warp pass per octave, each applied to the already warped coordinate.
pub(crate) fn gradient_perturb_fractal<const N: usize>(
    config: &NoiseConfig,
    seed: i32,
    coords: &mut [f32; N],
) {
    let mut seed = seed;
    let mut amp = config.gradient_perturb_amp() / CELL_JITTER * config.fractal_bounding();
    let mut frequency = config.frequency();

    perturb_pass(seed, amp, frequency, config.interpolation(), coords);

    for _ in 1..config.fractal_octaves() {
        frequency *= config.fractal_lacunarity();
        amp *= config.fractal_gain();
        seed = seed.wrapping_add(1);
        perturb_pass(seed, amp, frequency, config.interpolation(), coords);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::random::random_coords;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_zero_amplitude_keeps_point() {
        let mut config = NoiseConfig::new();
        config.set_gradient_perturb_amp(Some(0.0));
        let mut p = [12.5, -3.25, 7.0];
        gradient_perturb(&config, 1, &mut p);
        assert_eq!(p, [12.5, -3.25, 7.0]);
    }

    #[test]
    fn test_displacement_bounded_by_amplitude() {
        let mut config = NoiseConfig::new();
        config.set_gradient_perturb_amp(Some(5.0));
        let mut rng = StdRng::seed_from_u64(71);
        for _ in 0..2000 {
            let start = random_coords::<2>(&mut rng, 1000.0);
            let mut p = start;
            gradient_perturb(&config, 3, &mut p);
            let dx = p[0] - start[0];
            let dy = p[1] - start[1];
            assert!((dx * dx + dy * dy).sqrt() <= 5.0 + 1e-3);
        }
    }

    #[test]
    fn test_lattice_point_moves_by_cell_vector() {
        let mut config = NoiseConfig::new();
        config.set_frequency(1.0);
        config.set_gradient_perturb_amp(Some(CELL_JITTER));
        let mut p = [4.0, 9.0];
        gradient_perturb(&config, 2, &mut p);
        let jitter = cell_vector([4, 9], 2);
        assert!((p[0] - 4.0 - jitter[0]).abs() < 1e-5);
        assert!((p[1] - 9.0 - jitter[1]).abs() < 1e-5);
    }

    #[test]
    fn test_single_octave_fractal_matches_single_pass() {
        let config = NoiseConfig::new();
        let mut rng = StdRng::seed_from_u64(72);
        for _ in 0..200 {
            let start = random_coords::<3>(&mut rng, 500.0);
            let mut a = start;
            let mut b = start;
            gradient_perturb(&config, 9, &mut a);
            gradient_perturb_fractal(&config, 9, &mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fractal_passes_accumulate() {
        let mut config = NoiseConfig::new();
        config.set_fractal_octaves(Some(3));
        let start = [101.3, -57.9];
        let mut single = start;
        let mut layered = start;
        gradient_perturb(&config, 4, &mut single);
        gradient_perturb_fractal(&config, 4, &mut layered);
        assert_ne!(single, layered);
    }
}
