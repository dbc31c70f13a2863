// src/math/probability/noise/tests.rs
//
// Properties of the public sampling API across all noise types.

use super::*;
use crate::math::error::NoiseError;
use crate::math::utils::comparison::within;
use crate::math::utils::random::random_coords;
use rand::{Rng, SeedableRng, rngs::StdRng};

const TOLERANCE: f32 = 1e-3;

fn config_for(noise_type: NoiseType) -> NoiseConfig {
    NoiseConfig::new()
        .with_noise_type(noise_type)
        .with_fractal_octaves(if noise_type.is_fractal() { 3 } else { 1 })
}

fn sample_random(config: &NoiseConfig, dimension: usize, rng: &mut StdRng) -> f32 {
    let coords: Vec<f32> = (0..dimension)
        .map(|_| rng.random_range(-2000.0..2000.0))
        .collect();
    match config.sample(&coords) {
        Ok(v) => v,
        Err(e) => panic!("{:?} failed in {dimension}D: {e}", config.noise_type()),
    }
}

#[test]
fn test_golden_value_noise() {
    let config = NoiseConfig::new()
        .with_seed(1337)
        .with_frequency(0.03125)
        .with_interpolation(Interpolation::Hermite)
        .with_noise_type(NoiseType::Value);
    let v = config.sample_2d(10.0, 20.0).unwrap();
    assert_eq!(v.to_bits(), 0xBCE9_5170, "got {v}");
}

#[test]
fn test_determinism_all_types_and_dimensions() {
    let mut rng = StdRng::seed_from_u64(100);
    for noise_type in NoiseType::ALL {
        let config = config_for(noise_type);
        for dimension in 2..=noise_type.max_dimension() {
            for _ in 0..50 {
                let coords: Vec<f32> = (0..dimension)
                    .map(|_| rng.random_range(-500.0..500.0))
                    .collect();
                let a = config.sample(&coords).unwrap();
                let b = config.sample(&coords).unwrap();
                let c = config.clone().sample(&coords).unwrap();
                assert_eq!(a.to_bits(), b.to_bits());
                assert_eq!(a.to_bits(), c.to_bits());
            }
        }
    }
}

#[test]
fn test_sample_with_seed_leaves_configured_seed() {
    let config = NoiseConfig::new()
        .with_seed(77)
        .with_noise_type(NoiseType::PerlinFractal)
        .with_fractal_octaves(4);
    let before = config.sample_3d(12.0, -40.0, 3.5).unwrap();
    let reseeded = config.sample_with_seed_3d(12.0, -40.0, 3.5, 78).unwrap();
    let after = config.sample_3d(12.0, -40.0, 3.5).unwrap();

    assert_eq!(config.seed(), 77);
    assert_eq!(before.to_bits(), after.to_bits());
    assert_ne!(before, reseeded);
    assert_eq!(
        config.sample_with_seed_3d(12.0, -40.0, 3.5, 77).unwrap().to_bits(),
        before.to_bits()
    );
}

#[test]
fn test_range_2d_all_types() {
    let mut rng = StdRng::seed_from_u64(101);
    for noise_type in NoiseType::ALL {
        let config = config_for(noise_type);
        for _ in 0..100_000 {
            let v = sample_random(&config, 2, &mut rng);
            assert!(within(v, -1.0, 1.0, TOLERANCE), "{noise_type:?}: {v}");
        }
    }
}

#[test]
fn test_range_higher_dimensions() {
    let mut rng = StdRng::seed_from_u64(102);
    for noise_type in NoiseType::ALL {
        let config = config_for(noise_type);
        for dimension in 3..=noise_type.max_dimension() {
            for _ in 0..3000 {
                let v = sample_random(&config, dimension, &mut rng);
                assert!(
                    within(v, -1.0, 1.0, TOLERANCE),
                    "{noise_type:?} {dimension}D: {v}"
                );
            }
        }
    }
}

#[test]
fn test_far_coordinates_sample_finite() {
    // Jenseits des i32-Bereichs laufen die Gitterindizes über
    let far = [2.2e9, -7.0e10, 1.0e11, -1.0e11, 1.5e9, 3.0e30, -3.0e30];
    for noise_type in NoiseType::ALL {
        for frequency in [DEFAULT_FREQUENCY, 1.0] {
            let config = config_for(noise_type).with_frequency(frequency);
            for dimension in 2..=noise_type.max_dimension() {
                for i in 0..far.len() {
                    let coords: Vec<f32> =
                        (0..dimension).map(|d| far[(i + d) % far.len()]).collect();
                    let v = config.sample(&coords).unwrap();
                    assert!(v.is_finite(), "{noise_type:?} {dimension}D at {coords:?}: {v}");
                    assert_eq!(v.to_bits(), config.sample(&coords).unwrap().to_bits());
                }
            }
        }
    }

    let mut config = NoiseConfig::new();
    config.set_gradient_perturb_amp(Some(30.0));
    let mut p = [-7.0e10, 1.0e11, 2.2e9];
    config.gradient_perturb_fractal_3d(&mut p);
    assert!(p.iter().all(|c| c.is_finite()));
}

#[test]
fn test_cellular_distance_bounded_below() {
    let mut rng = StdRng::seed_from_u64(103);
    for distance_function in [
        CellularDistanceFunction::Euclidean,
        CellularDistanceFunction::Manhattan,
        CellularDistanceFunction::Natural,
    ] {
        let mut distance = NoiseConfig::new().with_noise_type(NoiseType::Cellular);
        distance.set_cellular_distance_function(Some(distance_function));
        distance.set_cellular_return_type(Some(CellularReturnType::Distance));
        let mut distance2 = distance.clone();
        distance2.set_cellular_return_type(Some(CellularReturnType::Distance2));
        let mut sub = distance.clone();
        sub.set_cellular_return_type(Some(CellularReturnType::Distance2Sub));

        for _ in 0..10_000 {
            let [x, y, z] = random_coords::<3>(&mut rng, 3000.0);
            let d = distance.sample_3d(x, y, z).unwrap();
            let d2 = distance2.sample_3d(x, y, z).unwrap();
            assert!(d >= -1.0);
            assert!(d2 >= d, "{distance_function:?}: {d2} < {d}");
            assert!(sub.sample_2d(x, y).unwrap() >= -1.0);
        }
    }
}

#[test]
fn test_fbm_normalization() {
    let mut rng = StdRng::seed_from_u64(104);
    for gain in [0.3, 0.5, 0.9] {
        let mut peaks = Vec::new();
        for octaves in 1..=8 {
            let mut config = NoiseConfig::new()
                .with_noise_type(NoiseType::SimplexFractal)
                .with_fractal_octaves(octaves);
            config.set_fractal_gain(Some(gain));

            let peak = (0..5000)
                .map(|_| sample_random(&config, 2, &mut rng).abs())
                .fold(0f32, f32::max);
            assert!(peak <= 1.0 + TOLERANCE, "gain {gain}, {octaves} octaves: {peak}");
            peaks.push(peak);
        }
        // Kein Zusammenbrechen oder Aufschaukeln mit steigender Oktavenzahl
        assert!(peaks.iter().all(|&p| p > 0.1), "{peaks:?}");
    }
}

#[test]
fn test_continuity_along_line() {
    for noise_type in [NoiseType::Value, NoiseType::Perlin, NoiseType::Simplex] {
        for interpolation in [
            Interpolation::Linear,
            Interpolation::Hermite,
            Interpolation::Quintic,
        ] {
            let config = NoiseConfig::new()
                .with_noise_type(noise_type)
                .with_interpolation(interpolation);
            let mut previous = config.sample_2d(0.0, 3.0).unwrap();
            for i in 1..20_000 {
                let t = i as f32 * 0.01;
                let v = config.sample_2d(t, 3.0 + 0.5 * t).unwrap();
                assert!(
                    (v - previous).abs() < 0.02,
                    "{noise_type:?}/{interpolation:?} jumps at {t}"
                );
                previous = v;
            }
        }
    }
}

#[test]
fn test_unsupported_dimensions_fail_fast() {
    let cellular = NoiseConfig::new().with_noise_type(NoiseType::Cellular);
    assert_eq!(
        cellular.sample_4d(1.0, 2.0, 3.0, 4.0),
        Err(NoiseError::UnsupportedDimension {
            noise_type: NoiseType::Cellular,
            dimension: 4,
        })
    );
    assert!(cellular.validate(3).is_ok());
    assert!(cellular.validate(6).is_err());

    let cubic = NoiseConfig::new().with_noise_type(NoiseType::CubicFractal);
    assert!(cubic.sample_4d(1.0, 2.0, 3.0, 4.0).is_ok());
    assert!(matches!(
        cubic.sample_5d(1.0, 2.0, 3.0, 4.0, 5.0),
        Err(NoiseError::UnsupportedDimension { dimension: 5, .. })
    ));

    let simplex = NoiseConfig::new();
    assert_eq!(
        simplex.sample(&[1.0]),
        Err(NoiseError::InvalidDimension { actual: 1 })
    );
    assert_eq!(
        simplex.sample(&[0.0; 7]),
        Err(NoiseError::InvalidDimension { actual: 7 })
    );
    assert_eq!(
        simplex.validate(0),
        Err(NoiseError::InvalidDimension { actual: 0 })
    );
}

#[test]
fn test_supports_matches_noise_type() {
    for noise_type in NoiseType::ALL {
        let config = config_for(noise_type);
        for dimension in 0..=8 {
            assert_eq!(config.supports(dimension), noise_type.supports(dimension));
        }
    }
}

#[test]
fn test_slice_and_fixed_sampling_agree() {
    let config = NoiseConfig::new().with_noise_type(NoiseType::HoneyFractal);
    assert_eq!(
        config.sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
        config.sample_5d(1.0, 2.0, 3.0, 4.0, 5.0).unwrap()
    );
    assert_eq!(
        config.sample_with_seed(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 9).unwrap(),
        config
            .sample_with_seed_6d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 9)
            .unwrap()
    );
}

#[test]
fn test_setters_clamp_and_reset() {
    let mut config = NoiseConfig::new();

    config.set_frequency(0.0);
    assert_eq!(config.frequency(), MIN_FREQUENCY);
    config.set_frequency(f32::NAN);
    assert_eq!(config.frequency(), DEFAULT_FREQUENCY);
    config.set_frequency(0.2);
    assert_eq!(config.frequency(), 0.2);

    config.set_fractal_octaves(Some(0));
    assert_eq!(config.fractal_octaves(), 1);
    assert_eq!(config.fractal_bounding(), 1.0);

    config.set_fractal_octaves(Some(3));
    config.set_fractal_gain(Some(0.5));
    assert!((config.fractal_bounding() - 1.0 / 1.75).abs() < 1e-6);
    config.set_fractal_gain(None);
    config.set_fractal_octaves(None);
    assert_eq!(config.fractal_gain(), 0.5);
    assert_eq!(config.fractal_octaves(), 1);

    config.set_noise_type(Some(NoiseType::Cellular));
    config.set_noise_type(None);
    assert_eq!(config.noise_type(), NoiseType::Simplex);
    assert!(config.supports(6));

    config.set_foam_sharpness(Some(-2.0));
    assert_eq!(config.foam_sharpness(), 0.0);
}

#[test]
fn test_settings_change_output() {
    let base = NoiseConfig::new().with_noise_type(NoiseType::ValueFractal).with_fractal_octaves(3);
    let v = base.sample_2d(123.4, 567.8).unwrap();

    let mut other = base.clone();
    other.set_fractal_type(Some(FractalType::Billow));
    assert_ne!(v, other.sample_2d(123.4, 567.8).unwrap());

    let mut other = base.clone();
    other.set_fractal_lacunarity(Some(3.0));
    assert_ne!(v, other.sample_2d(123.4, 567.8).unwrap());

    let mut other = base.clone();
    other.set_interpolation(Some(Interpolation::Quintic));
    assert_ne!(v, other.sample_2d(123.4, 567.8).unwrap());
}

#[test]
fn test_ridged_multi_ignores_gain() {
    let mut a = NoiseConfig::new()
        .with_noise_type(NoiseType::SimplexFractal)
        .with_fractal_type(FractalType::RidgedMulti)
        .with_fractal_octaves(4);
    let b = a.clone();
    a.set_fractal_gain(Some(0.9));
    assert_eq!(
        a.sample_2d(50.0, 60.0).unwrap(),
        b.sample_2d(50.0, 60.0).unwrap()
    );
}

#[test]
fn test_cellular_noise_lookup() {
    let mut config = NoiseConfig::new().with_noise_type(NoiseType::Cellular);
    config.set_cellular_return_type(Some(CellularReturnType::NoiseLookup));
    let fallback = config.sample_2d(100.0, 200.0).unwrap();

    let lookup = NoiseConfig::new()
        .with_noise_type(NoiseType::ValueFractal)
        .with_frequency(0.2)
        .with_seed(3);
    assert!(config.set_cellular_noise_lookup(Some(lookup)).is_ok());
    let looked_up = config.sample_2d(100.0, 200.0).unwrap();
    assert!(within(looked_up, -1.0, 1.0, TOLERANCE));
    assert_ne!(fallback, looked_up);

    // Innerhalb einer Zelle konstant
    let nearby = config.sample_2d(100.01, 200.01).unwrap();
    assert_eq!(looked_up, nearby);

    assert!(config.set_cellular_noise_lookup(None).is_ok());
    assert_eq!(config.sample_2d(100.0, 200.0).unwrap(), fallback);
}

#[test]
fn test_gradient_perturb_changes_sample_position() {
    let mut config = NoiseConfig::new();
    config.set_gradient_perturb_amp(Some(30.0));
    let mut p = [250.0, -75.0];
    config.gradient_perturb_2d(&mut p);
    assert_ne!(p, [250.0, -75.0]);

    let mut q = [250.0, -75.0, 10.0];
    config.gradient_perturb_fractal_3d(&mut q);
    assert!(q.iter().zip([250.0, -75.0, 10.0]).all(|(a, b)| (a - b).abs() <= 30.0 + 1e-3));
}

#[test]
fn test_shared_config_across_threads() {
    let config = NoiseConfig::shared();
    let points: Vec<[f32; 3]> = (0..256)
        .map(|i| [i as f32 * 1.7, i as f32 * -0.3, 5.0])
        .collect();
    let serial: Vec<f32> = points
        .iter()
        .map(|p| config.sample_3d(p[0], p[1], p[2]).unwrap())
        .collect();

    let parallel: Vec<Vec<f32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    points
                        .iter()
                        .map(|p| config.sample_3d(p[0], p[1], p[2]).unwrap())
                        .collect::<Vec<f32>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    for result in parallel {
        assert_eq!(result, serial);
    }
    assert_eq!(config.seed(), DEFAULT_SEED);
}
