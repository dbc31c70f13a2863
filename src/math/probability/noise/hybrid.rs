// src/math/probability/noise/hybrid.rs
//
// Foam, Honey and Mutant: chains of N + 1 lower-level samples taken along the
// axes of a regular simplex, each link offset by the result of the previous one.

use super::constants::*;
use super::noise::NoiseConfig;
use super::perlin::dot;
use super::simplex::simplex;
use super::value::value_unit;

const MAX_AXES: usize = 7;

#[inline(always)]
fn foam_axes(dimension: usize) -> &'static [f32] {
    match dimension {
        2 => FOAM_AXES_2D.as_flattened(),
        3 => FOAM_AXES_3D.as_flattened(),
        4 => FOAM_AXES_4D.as_flattened(),
        5 => FOAM_AXES_5D.as_flattened(),
        _ => FOAM_AXES_6D.as_flattened(),
    }
}

/// Seed of the link following `seed`.
#[inline(always)]
pub(crate) fn next_link_seed(seed: i32) -> i32 {
    let s = seed.wrapping_add(HYBRID_SEED_STEP);
    s ^ ((s as u32) >> 14) as i32
}

/// Averages the N + 1 links of a chain; every link returns a value in `[0, 1]`.
#[inline]
fn chain<const N: usize>(
    seed: i32,
    coords: [f32; N],
    mut link: impl FnMut(i32, [f32; N]) -> f32,
) -> f32 {
    let mut projection = [0f32; MAX_AXES];
    for (p, axis) in projection.iter_mut().zip(foam_axes(N).chunks_exact(N)) {
        *p = dot(axis, &coords);
    }

    let axes = N + 1;
    let mut seed = seed;
    let mut previous = 0.;
    let mut sum = 0.;
    for k in 0..axes {
        let mut local: [f32; N] = std::array::from_fn(|j| projection[(k + 1 + j) % axes]);
        local[0] += previous;
        previous = link(seed, local);
        sum += previous;
        seed = next_link_seed(seed);
    }
    sum / axes as f32
}

/// Pushes a chain average in `[0, 1]` towards the extremes and maps it to `[-1, 1]`.
#[inline]
pub(crate) fn sharpen(r: f32, foam_sharpness: f32) -> f32 {
    let sharp = FOAM_SHARPNESS_SCALE * foam_sharpness;
    let diff = 0.5 - r;
    let sign: f32 = if diff < 0. { -1. } else { 0. };
    let one = if diff < 0. { -1. } else { 1. };
    (r + sign) / (f32::MIN_POSITIVE - sign + (r + sharp * diff) * one) - 2. * sign - 1.
}

pub(crate) fn foam<const N: usize>(config: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    let r = chain(seed, coords, value_unit::<N>);
    sharpen(r, config.foam_sharpness())
}

pub(crate) fn honey<const N: usize>(config: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    let r = chain(seed, coords, |seed, local| {
        let simplex01 = (simplex(seed, local) + 1.) * 0.5;
        (simplex01 + value_unit(seed, local)) * 0.5
    });
    sharpen(r.clamp(0., 1.), config.foam_sharpness())
}

/// Foam with one extra lattice axis; `M` is always `N + 1` and carries `mutation`.
pub(crate) fn mutant<const N: usize, const M: usize>(
    config: &NoiseConfig,
    seed: i32,
    coords: [f32; N],
) -> f32 {
    let mutation = config.mutation();
    let r = chain(seed, coords, |seed, local| {
        let extended: [f32; M] = std::array::from_fn(|d| if d < N { local[d] } else { mutation });
        value_unit(seed, extended)
    });
    sharpen(r, config.foam_sharpness())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::random::random_coords;
    use approx::assert_abs_diff_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_sharpen_endpoints_and_midpoint() {
        for sharpness in [0.5, 1.0, 3.0] {
            assert_abs_diff_eq!(sharpen(0.0, sharpness), -1.0, epsilon = 1e-6);
            assert_abs_diff_eq!(sharpen(0.5, sharpness), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(sharpen(1.0, sharpness), 1.0, epsilon = 1e-6);
        }
        // Symmetrisch um 0.5
        assert_abs_diff_eq!(sharpen(0.3, 1.0), -sharpen(0.7, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_sharpen_is_monotonic() {
        let mut previous = sharpen(0.0, 1.0);
        for i in 1..=200 {
            let next = sharpen(i as f32 / 200.0, 1.0);
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn test_link_seeds_differ() {
        let mut seed = 1337;
        let mut seen = vec![seed];
        for _ in 0..7 {
            seed = next_link_seed(seed);
            assert!(!seen.contains(&seed));
            seen.push(seed);
        }
    }

    #[test]
    fn test_axes_tables_are_unit_length() {
        for dim in 2..=6 {
            let axes = foam_axes(dim);
            assert_eq!(axes.len(), dim * (dim + 1));
            for axis in axes.chunks_exact(dim) {
                assert_abs_diff_eq!(dot(axis, axis), 1.0, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_hybrid_range() {
        let config = NoiseConfig::new();
        let mut rng = StdRng::seed_from_u64(61);
        for _ in 0..2000 {
            let p2 = random_coords::<2>(&mut rng, 100.0);
            let p4 = random_coords::<4>(&mut rng, 100.0);
            let p6 = random_coords::<6>(&mut rng, 100.0);
            let values = [
                foam(&config, 1, p2),
                honey(&config, 1, p2),
                mutant::<2, 3>(&config, 1, p2),
                foam(&config, 1, p4),
                honey(&config, 1, p4),
                mutant::<6, 7>(&config, 1, p6),
            ];
            for v in values {
                assert!((-1.0..=1.0).contains(&v), "{v}");
            }
        }
    }

    #[test]
    fn test_mutation_moves_the_field() {
        let still = NoiseConfig::new();
        let mut mutated = NoiseConfig::new();
        mutated.set_mutation(Some(0.5));
        let mut rng = StdRng::seed_from_u64(62);
        let changed = (0..100)
            .map(|_| random_coords::<3>(&mut rng, 50.0))
            .filter(|&p| mutant::<3, 4>(&still, 4, p) != mutant::<3, 4>(&mutated, 4, p))
            .count();
        assert!(changed > 90);
    }
}
