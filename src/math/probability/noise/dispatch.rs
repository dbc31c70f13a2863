// src/math/probability/noise/dispatch.rs
//
// Resolves (noise type, fractal type, cellular return type) to one kernel per
// dimension. The table is rebuilt by the setters, sampling only reads it.

use std::fmt;

use super::cellular::{cellular_single_edge, cellular_two_edge};
use super::cubic::cubic;
use super::fractal::{billow, fbm, ridged_multi};
use super::hybrid::{foam, honey, mutant};
use super::noise::NoiseConfig;
use super::perlin::{perlin_2d, perlin_3d, perlin_nd};
use super::simplex::simplex;
use super::types::{Algorithm, CellularReturnType, FractalType, NoiseType};
use super::value::value;
use super::white::white;

/// Single-octave kernel: config, effective seed, frequency-scaled coordinate.
pub(crate) type Single<const N: usize> = fn(&NoiseConfig, i32, [f32; N]) -> f32;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Mode {
    Single,
    Fractal { fractal_type: FractalType, seed_step: i32 },
}

#[derive(Copy, Clone)]
pub(crate) struct Kernel<const N: usize> {
    single: Single<N>,
    mode: Mode,
}

impl<const N: usize> Kernel<N> {
    #[inline]
    pub(crate) fn run(&self, config: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
        match self.mode {
            Mode::Single => (self.single)(config, seed, coords),
            Mode::Fractal { fractal_type, seed_step } => match fractal_type {
                FractalType::Fbm => fbm(config, self.single, seed, coords, seed_step),
                FractalType::Billow => billow(config, self.single, seed, coords, seed_step),
                FractalType::RidgedMulti => {
                    ridged_multi(config, self.single, seed, coords, seed_step)
                }
            },
        }
    }
}

#[derive(Copy, Clone)]
pub(crate) struct DispatchTable {
    pub(crate) d2: Option<Kernel<2>>,
    pub(crate) d3: Option<Kernel<3>>,
    pub(crate) d4: Option<Kernel<4>>,
    pub(crate) d5: Option<Kernel<5>>,
    pub(crate) d6: Option<Kernel<6>>,
}

impl DispatchTable {
    pub(crate) fn resolve(
        noise_type: NoiseType,
        fractal_type: FractalType,
        cellular_return_type: CellularReturnType,
    ) -> Self {
        let algorithm = noise_type.algorithm();
        let mode = if noise_type.is_fractal() {
            Mode::Fractal {
                fractal_type,
                seed_step: algorithm.octave_seed_step(),
            }
        } else {
            Mode::Single
        };

        Self {
            d2: kernel::<2, 3>(algorithm, cellular_return_type, mode),
            d3: kernel::<3, 4>(algorithm, cellular_return_type, mode),
            d4: kernel::<4, 5>(algorithm, cellular_return_type, mode),
            d5: kernel::<5, 6>(algorithm, cellular_return_type, mode),
            d6: kernel::<6, 7>(algorithm, cellular_return_type, mode),
        }
    }

    pub(crate) fn supports(&self, dimension: usize) -> bool {
        match dimension {
            2 => self.d2.is_some(),
            3 => self.d3.is_some(),
            4 => self.d4.is_some(),
            5 => self.d5.is_some(),
            6 => self.d6.is_some(),
            _ => false,
        }
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimensions: Vec<usize> = (2..=6).filter(|&d| self.supports(d)).collect();
        f.debug_struct("DispatchTable")
            .field("dimensions", &dimensions)
            .finish()
    }
}

/// Kernel of one dimension; `M` is `N + 1`, the lattice width Mutant needs.
fn kernel<const N: usize, const M: usize>(
    algorithm: Algorithm,
    cellular_return_type: CellularReturnType,
    mode: Mode,
) -> Option<Kernel<N>> {
    if N > algorithm.max_dimension() {
        return None;
    }

    let single: Single<N> = match algorithm {
        Algorithm::Value => value_kernel::<N>,
        Algorithm::Perlin => perlin_kernel::<N>,
        Algorithm::Simplex => simplex_kernel::<N>,
        Algorithm::Cubic => cubic_kernel::<N>,
        Algorithm::Cellular if cellular_return_type.needs_second_edge() => cellular_two_edge::<N>,
        Algorithm::Cellular => cellular_single_edge::<N>,
        Algorithm::White => white_kernel::<N>,
        Algorithm::Foam => foam::<N>,
        Algorithm::Honey => honey::<N>,
        Algorithm::Mutant => mutant::<N, M>,
    };

    Some(Kernel { single, mode })
}

// Adapter auf die gemeinsame Kernel-Signatur

fn value_kernel<const N: usize>(config: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    value(seed, coords, config.interpolation())
}

fn perlin_kernel<const N: usize>(config: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    let interpolation = config.interpolation();
    match N {
        2 => perlin_2d(seed, coords[0], coords[1], interpolation),
        3 => perlin_3d(seed, coords[0], coords[1], coords[2], interpolation),
        _ => perlin_nd(seed, coords, interpolation),
    }
}

fn simplex_kernel<const N: usize>(_: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    simplex(seed, coords)
}

fn cubic_kernel<const N: usize>(_: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    cubic(seed, coords)
}

fn white_kernel<const N: usize>(_: &NoiseConfig, seed: i32, coords: [f32; N]) -> f32 {
    white(seed, coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_caps() {
        let table = DispatchTable::resolve(
            NoiseType::Cellular,
            FractalType::Fbm,
            CellularReturnType::Distance,
        );
        assert!(table.supports(2) && table.supports(3));
        assert!(!table.supports(4) && !table.supports(6));

        let table = DispatchTable::resolve(
            NoiseType::CubicFractal,
            FractalType::Fbm,
            CellularReturnType::CellValue,
        );
        assert!(table.supports(4));
        assert!(!table.supports(5));

        for noise_type in [NoiseType::Value, NoiseType::MutantFractal, NoiseType::WhiteNoise] {
            let table = DispatchTable::resolve(
                noise_type,
                FractalType::Billow,
                CellularReturnType::CellValue,
            );
            assert!((2..=6).all(|d| table.supports(d)));
            assert!(!table.supports(1) && !table.supports(7));
        }
    }

    #[test]
    fn test_fractal_mode_and_seed_step() {
        let table = DispatchTable::resolve(
            NoiseType::FoamFractal,
            FractalType::RidgedMulti,
            CellularReturnType::CellValue,
        );
        let Some(kernel) = table.d3 else {
            panic!("FoamFractal must support 3D");
        };
        assert_eq!(
            kernel.mode,
            Mode::Fractal {
                fractal_type: FractalType::RidgedMulti,
                seed_step: super::super::constants::HYBRID_SEED_STEP,
            }
        );

        let table = DispatchTable::resolve(
            NoiseType::Perlin,
            FractalType::Billow,
            CellularReturnType::CellValue,
        );
        assert_eq!(table.d2.map(|k| k.mode), Some(Mode::Single));
    }
}
