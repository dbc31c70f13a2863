// src/math/probability/noise/cellular.rs
//
// Cellular (Voronoi) noise in 2D and 3D. Every lattice cell owns one feature
// point, jittered away from the cell centre by a `CELL_*` vector.

use super::constants::*;
use super::hash::{hash_256, value_coord};
use super::interpolation::fast_round;
use super::noise::NoiseConfig;
use super::simplex::simplex;
use super::types::{CellularDistanceFunction, CellularReturnType};

/// 3^3 neighbours are the most any supported dimension searches.
const MAX_NEIGHBOURS: usize = 27;

/// Jitter vector of a lattice cell.
#[inline(always)]
pub(crate) fn cell_vector<const N: usize>(cell: [i32; N], seed: i32) -> &'static [f32] {
    match N {
        2 => &CELL_2D[hash_256(cell, seed)][..],
        3 => &CELL_3D[hash_256(cell, seed)][..],
        _ => &[],
    }
}

impl CellularDistanceFunction {
    /// Distance of an offset vector under this metric. Euclidean stays squared.
    #[inline(always)]
    pub(crate) fn measure(self, v: &[f32]) -> f32 {
        match self {
            CellularDistanceFunction::Euclidean => v.iter().map(|c| c * c).sum(),
            CellularDistanceFunction::Manhattan => v.iter().map(|c| c.abs()).sum(),
            CellularDistanceFunction::Natural => {
                v.iter().map(|c| c.abs()).sum::<f32>() + v.iter().map(|c| c * c).sum::<f32>()
            }
        }
    }
}

/// Cell `index` of the 3^N block around `center`, with its step (-1..=1 per axis).
#[inline(always)]
fn neighbour<const N: usize>(center: [i32; N], index: usize) -> ([i32; N], [f32; N]) {
    let mut rest = index;
    let step: [i32; N] = std::array::from_fn(|_| {
        let digit = (rest % 3) as i32 - 1;
        rest /= 3;
        digit
    });
    (
        std::array::from_fn(|d| center[d].wrapping_add(step[d])),
        step.map(|s| s as f32),
    )
}

/// Feature point of the neighbour at `step`, relative to `coords`.
#[inline(always)]
fn feature_offset<const N: usize>(
    center: &[f32; N],
    step: &[f32; N],
    jitter: &[f32],
    coords: &[f32; N],
) -> [f32; N] {
    std::array::from_fn(|d| (center[d] + step[d]) - coords[d] + jitter[d])
}

/// Nearest feature point only: `CellValue`, `NoiseLookup` and `Distance`.
pub(crate) fn cellular_single_edge<const N: usize>(
    config: &NoiseConfig,
    seed: i32,
    coords: [f32; N],
) -> f32 {
    let metric = config.cellular_distance_function();
    let rounded: [(i32, f32); N] = std::array::from_fn(|d| fast_round(coords[d]));
    let center = rounded.map(|(index, _)| index);
    let center_f = rounded.map(|(_, cell)| cell);

    let mut distance = CELLULAR_DISTANCE_SENTINEL;
    let mut closest = (center, [0.; N]);

    let count = 3usize.pow(N as u32).min(MAX_NEIGHBOURS);
    for index in 0..count {
        let (cell, step) = neighbour(center, index);
        let offset = feature_offset(&center_f, &step, cell_vector(cell, seed), &coords);

        let candidate = metric.measure(&offset);
        if candidate < distance {
            distance = candidate;
            closest = (cell, step);
        }
    }

    let (closest, step) = closest;
    match config.cellular_return_type() {
        CellularReturnType::NoiseLookup => {
            let jitter = cell_vector(closest, seed);
            let point: [f32; N] = std::array::from_fn(|d| (center_f[d] + step[d]) + jitter[d]);
            noise_lookup(config, seed, point)
        }
        CellularReturnType::Distance => distance - 1.,
        _ => value_coord(closest, seed),
    }
}

/// Nearest and second-nearest feature point: the `Distance2*` return types.
pub(crate) fn cellular_two_edge<const N: usize>(
    config: &NoiseConfig,
    seed: i32,
    coords: [f32; N],
) -> f32 {
    let metric = config.cellular_distance_function();
    let rounded: [(i32, f32); N] = std::array::from_fn(|d| fast_round(coords[d]));
    let center = rounded.map(|(index, _)| index);
    let center_f = rounded.map(|(_, cell)| cell);

    let mut distance = CELLULAR_DISTANCE_SENTINEL;
    let mut distance2 = CELLULAR_DISTANCE_SENTINEL;

    let count = 3usize.pow(N as u32).min(MAX_NEIGHBOURS);
    for index in 0..count {
        let (cell, step) = neighbour(center, index);
        let offset = feature_offset(&center_f, &step, cell_vector(cell, seed), &coords);

        let candidate = metric.measure(&offset);
        // distance2 >= distance bleibt nach jedem Schritt erhalten
        distance2 = distance2.min(candidate).max(distance);
        distance = distance.min(candidate);
    }

    match config.cellular_return_type() {
        CellularReturnType::Distance2Add => distance2 + distance - 1.,
        CellularReturnType::Distance2Sub => distance2 - distance - 1.,
        CellularReturnType::Distance2Mul => distance2 * distance - 1.,
        CellularReturnType::Distance2Div => distance / distance2.max(f32::MIN_POSITIVE) - 1.,
        _ => distance2 - 1.,
    }
}

/// Samples the configured lookup noise at a feature point. Without a lookup
/// config the cellular seed drives a plain Simplex sample.
fn noise_lookup<const N: usize>(config: &NoiseConfig, seed: i32, point: [f32; N]) -> f32 {
    match config.cellular_noise_lookup() {
        // Lookup-Konfigurationen werden beim Setzen auf 2D/3D geprüft
        Some(lookup) => {
            debug_assert!(lookup.supports(N), "lookup config cannot sample {N}D");
            lookup
                .sample_with_seed(&point, lookup.seed())
                .unwrap_or_default()
        }
        None => simplex(seed, point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::probability::noise::types::NoiseType;
    use crate::math::utils::random::random_coords;
    use rand::{SeedableRng, rngs::StdRng};

    fn cellular_config(return_type: CellularReturnType) -> NoiseConfig {
        let mut config = NoiseConfig::new().with_noise_type(NoiseType::Cellular);
        config.set_cellular_return_type(Some(return_type));
        config
    }

    #[test]
    fn test_metrics() {
        let v = [3.0, -4.0];
        assert_eq!(CellularDistanceFunction::Euclidean.measure(&v), 25.0);
        assert_eq!(CellularDistanceFunction::Manhattan.measure(&v), 7.0);
        assert_eq!(CellularDistanceFunction::Natural.measure(&v), 32.0);
    }

    #[test]
    fn test_neighbourhood_covers_all_offsets() {
        let mut seen: Vec<[i32; 3]> = (0..27).map(|i| neighbour([10, 20, 30], i).0).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 27);
        assert!(seen.contains(&[9, 19, 29]));
        assert!(seen.contains(&[11, 21, 31]));
    }

    #[test]
    fn test_second_edge_never_closer() {
        let mut rng = StdRng::seed_from_u64(51);
        let distance = cellular_config(CellularReturnType::Distance);
        let distance2 = cellular_config(CellularReturnType::Distance2);
        let sub = cellular_config(CellularReturnType::Distance2Sub);
        for _ in 0..5000 {
            let p = random_coords::<2>(&mut rng, 100.0);
            let d = cellular_single_edge(&distance, 3, p);
            let d2 = cellular_two_edge(&distance2, 3, p);
            assert!(d2 >= d, "{d2} < {d}");
            assert!(cellular_two_edge(&sub, 3, p) >= -1.0);

            let q = random_coords::<3>(&mut rng, 100.0);
            assert!(cellular_two_edge(&distance2, 3, q) >= cellular_single_edge(&distance, 3, q));
        }
    }

    #[test]
    fn test_distance_is_zero_on_feature_point() {
        let config = cellular_config(CellularReturnType::Distance);
        let jitter = cell_vector([4, -2], 8);
        let point = [4.0 + jitter[0], -2.0 + jitter[1]];
        assert!((cellular_single_edge(&config, 8, point) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cell_value_constant_near_feature_point() {
        let config = cellular_config(CellularReturnType::CellValue);
        let jitter = cell_vector([7, 7, 7], 2);
        let p = [7.0 + jitter[0], 7.0 + jitter[1], 7.0 + jitter[2]];
        let q = [p[0] + 0.01, p[1] - 0.01, p[2]];
        assert_eq!(cellular_single_edge(&config, 2, p), value_coord([7, 7, 7], 2));
        assert_eq!(cellular_single_edge(&config, 2, q), value_coord([7, 7, 7], 2));
    }

    #[test]
    fn test_cell_vectors_have_jitter_length() {
        let length = |row: &[f32]| CellularDistanceFunction::Euclidean.measure(row).sqrt();
        for row in CELL_2D.iter() {
            assert!((length(row) - CELL_JITTER).abs() < 1e-5);
        }
        for row in CELL_3D.iter() {
            assert!((length(row) - CELL_JITTER).abs() < 1e-5);
        }
    }

    #[test]
    fn test_noise_lookup_samples_configured_noise() {
        let mut config = cellular_config(CellularReturnType::NoiseLookup);
        let lookup = NoiseConfig::new().with_noise_type(NoiseType::Value).with_seed(21);
        assert!(lookup.supports(2) && lookup.supports(3));
        assert!(config.set_cellular_noise_lookup(Some(lookup.clone())).is_ok());

        let jitter = cell_vector([3, -6], 9);
        let point = [3.0 + jitter[0], -6.0 + jitter[1]];
        let expected = lookup.sample_with_seed(&point, 21).unwrap();
        assert_eq!(cellular_single_edge(&config, 9, point), expected);
    }

    #[test]
    fn test_noise_lookup_defaults_to_simplex() {
        let config = cellular_config(CellularReturnType::NoiseLookup);
        let jitter = cell_vector([1, 1], 5);
        let point = [1.0 + jitter[0], 1.0 + jitter[1]];
        assert_eq!(cellular_single_edge(&config, 5, point), simplex(5, point));
    }
}
