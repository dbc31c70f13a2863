// src/math/probability/noise/fractal.rs
//
// Layers octaves of a single-octave kernel. Every octave scales the
// coordinate by the lacunarity and steps the seed; FBM and Billow also scale
// the amplitude by the gain.

use super::dispatch::Single;
use super::noise::NoiseConfig;

/// `1 / Σ |gain|^i` over all octaves, keeps FBM and Billow within `[-1, 1]`.
pub(crate) fn fractal_bounding(octaves: u32, gain: f32) -> f32 {
    let gain = gain.abs();
    let mut amp = gain;
    let mut amp_fractal = 1.;
    for _ in 1..octaves {
        amp_fractal += amp;
        amp *= gain;
    }
    1. / amp_fractal
}

#[inline(always)]
fn scale<const N: usize>(coords: &mut [f32; N], lacunarity: f32) {
    for c in coords.iter_mut() {
        *c *= lacunarity;
    }
}

pub(crate) fn fbm<const N: usize>(
    config: &NoiseConfig,
    single: Single<N>,
    seed: i32,
    coords: [f32; N],
    seed_step: i32,
) -> f32 {
    let mut coords = coords;
    let mut seed = seed;
    let mut sum = 0.;
    let mut amp = config.fractal_bounding();

    for _ in 0..config.fractal_octaves() {
        sum += single(config, seed, coords) * amp;
        seed = seed.wrapping_add(seed_step);

        scale(&mut coords, config.fractal_lacunarity());
        amp *= config.fractal_gain();
    }

    sum
}

pub(crate) fn billow<const N: usize>(
    config: &NoiseConfig,
    single: Single<N>,
    seed: i32,
    coords: [f32; N],
    seed_step: i32,
) -> f32 {
    let mut coords = coords;
    let mut seed = seed;
    let mut sum = 0.;
    let mut amp = config.fractal_bounding();

    for _ in 0..config.fractal_octaves() {
        let noise = single(config, seed, coords).abs() * 2. - 1.;
        sum += noise * amp;
        seed = seed.wrapping_add(seed_step);

        scale(&mut coords, config.fractal_lacunarity());
        amp *= config.fractal_gain();
    }

    sum
}

/// Inverted ridges. The gain is ignored; octave weights halve instead.
pub(crate) fn ridged_multi<const N: usize>(
    config: &NoiseConfig,
    single: Single<N>,
    seed: i32,
    coords: [f32; N],
    seed_step: i32,
) -> f32 {
    let mut coords = coords;
    let mut seed = seed;
    let mut sum = 0.;
    let mut exp = 1.;
    let mut correction = 0.;

    for _ in 0..config.fractal_octaves() {
        sum += (1. - single(config, seed, coords).abs()) * exp;
        correction += exp;
        exp *= 0.5;
        seed = seed.wrapping_add(seed_step);

        scale(&mut coords, config.fractal_lacunarity());
    }

    sum * 2. / correction - 1.
}
