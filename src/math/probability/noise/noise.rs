// src/math/probability/noise/noise.rs

use std::sync::LazyLock;

use tracing::{debug, warn};

use super::constants::*;
use super::dispatch::{DispatchTable, Kernel};
use super::fractal::fractal_bounding;
use super::perturb::{gradient_perturb, gradient_perturb_fractal};
use super::types::*;
use crate::math::error::{NoiseError, NoiseResult};

static SHARED: LazyLock<NoiseConfig> = LazyLock::new(NoiseConfig::default);

/// Settings of one noise field plus the kernels resolved from them.
///
/// Sampling takes `&self` and never mutates the config, so one instance can be
/// shared between threads; a different seed is passed explicitly instead.
#[derive(Clone, Debug)]
pub struct NoiseConfig {
    seed: i32,
    frequency: f32,
    interpolation: Interpolation,
    noise_type: NoiseType,

    fractal_type: FractalType,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
    fractal_bounding: f32, // abgeleitet aus octaves und gain

    cellular_distance_function: CellularDistanceFunction,
    cellular_return_type: CellularReturnType,
    cellular_noise_lookup: Option<Box<NoiseConfig>>,

    gradient_perturb_amp: f32,
    foam_sharpness: f32,
    mutation: f32,

    dispatch: DispatchTable,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        let noise_type = NoiseType::default();
        let fractal_type = FractalType::default();
        let cellular_return_type = CellularReturnType::default();

        Self {
            seed: DEFAULT_SEED,
            frequency: DEFAULT_FREQUENCY,
            interpolation: Interpolation::default(),
            noise_type,

            fractal_type,
            octaves: 1,
            lacunarity: 2.,
            gain: 0.5,
            fractal_bounding: 1.,

            cellular_distance_function: CellularDistanceFunction::default(),
            cellular_return_type,
            cellular_noise_lookup: None,

            gradient_perturb_amp: 1.,
            foam_sharpness: 1.,
            mutation: 0.,

            dispatch: DispatchTable::resolve(noise_type, fractal_type, cellular_return_type),
        }
    }
}

impl NoiseConfig {
    // ============
    // Constructors
    // ============

    /// Creates a config with the default seed of `1337` and Simplex noise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide read-only instance with default settings.
    pub fn shared() -> &'static NoiseConfig {
        &SHARED
    }

    pub fn with_seed(mut self, seed: i32) -> Self {
        self.set_seed(seed);
        self
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.set_frequency(frequency);
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.set_interpolation(Some(interpolation));
        self
    }

    pub fn with_noise_type(mut self, noise_type: NoiseType) -> Self {
        self.set_noise_type(Some(noise_type));
        self
    }

    pub fn with_fractal_type(mut self, fractal_type: FractalType) -> Self {
        self.set_fractal_type(Some(fractal_type));
        self
    }

    pub fn with_fractal_octaves(mut self, octaves: u32) -> Self {
        self.set_fractal_octaves(Some(octaves));
        self
    }

    // =======
    // Setters
    // =======

    /// Sets the seed used by [`sample_2d`](Self::sample_2d) and friends.
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }

    /// Sets the frequency every input coordinate is multiplied with.
    ///
    /// Values below [`MIN_FREQUENCY`] are clamped; non-finite values fall back
    /// to the default `0.03125`.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = if !frequency.is_finite() {
            warn!("NoiseConfig: frequency {frequency} is not finite, using the default.");
            DEFAULT_FREQUENCY
        } else if frequency < MIN_FREQUENCY {
            warn!("NoiseConfig: frequency {frequency} clamped to {MIN_FREQUENCY}.");
            MIN_FREQUENCY
        } else {
            frequency
        };
    }

    /// Sets the kernel for Value, Perlin and gradient perturbation.
    ///
    /// If set to [`None`], it is reset to its default: [`Interpolation::Hermite`].
    pub fn set_interpolation(&mut self, interpolation: Option<Interpolation>) {
        self.interpolation = interpolation.unwrap_or_default();
    }

    /// Sets the noise algorithm.
    ///
    /// If set to [`None`], it is reset to its default: [`NoiseType::Simplex`].
    pub fn set_noise_type(&mut self, noise_type: Option<NoiseType>) {
        self.noise_type = noise_type.unwrap_or_default();
        self.update_dispatch();
    }

    /// Sets how the octaves of the fractal noise types are combined.
    ///
    /// If set to [`None`], it is reset to its default: [`FractalType::Fbm`].
    pub fn set_fractal_type(&mut self, fractal_type: Option<FractalType>) {
        self.fractal_type = fractal_type.unwrap_or_default();
        self.update_dispatch();
    }

    /// Sets the octave count of the fractal noise types and of
    /// [`gradient_perturb_fractal_2d`](Self::gradient_perturb_fractal_2d).
    ///
    /// If set to [`None`], it is reset to its default: `1`. Zero is raised to one.
    pub fn set_fractal_octaves(&mut self, octaves: Option<u32>) {
        let octaves = octaves.unwrap_or(1);
        if octaves == 0 {
            warn!("NoiseConfig: octaves should be at least 1, using 1.");
        }
        self.octaves = octaves.max(1);
        self.calculate_fractal_bounding();
    }

    /// Sets the frequency multiplier between octaves.
    ///
    /// If set to [`None`], it is reset to its default: `2.0`.
    pub fn set_fractal_lacunarity(&mut self, lacunarity: Option<f32>) {
        self.lacunarity = lacunarity.unwrap_or(2.);
    }

    /// Sets the amplitude multiplier between octaves.
    ///
    /// If set to [`None`], it is reset to its default: `0.5`.
    pub fn set_fractal_gain(&mut self, gain: Option<f32>) {
        self.gain = gain.unwrap_or(0.5);
        self.calculate_fractal_bounding();
    }

    /// Sets the distance metric of cellular noise.
    ///
    /// If set to [`None`], it is reset to its default: [`CellularDistanceFunction::Euclidean`].
    pub fn set_cellular_distance_function(
        &mut self,
        cellular_distance_function: Option<CellularDistanceFunction>,
    ) {
        self.cellular_distance_function = cellular_distance_function.unwrap_or_default();
    }

    /// Sets what cellular noise returns.
    ///
    /// If set to [`None`], it is reset to its default: [`CellularReturnType::CellValue`].
    pub fn set_cellular_return_type(&mut self, cellular_return_type: Option<CellularReturnType>) {
        self.cellular_return_type = cellular_return_type.unwrap_or_default();
        self.update_dispatch();
    }

    /// Sets the noise sampled at the closest feature point for
    /// [`CellularReturnType::NoiseLookup`].
    ///
    /// The lookup must be able to sample 2D and 3D. If set to [`None`], a
    /// single Simplex octave with the cellular seed is used.
    pub fn set_cellular_noise_lookup(&mut self, lookup: Option<NoiseConfig>) -> NoiseResult<()> {
        if let Some(lookup) = &lookup {
            for dimension in [2, 3] {
                lookup.validate(dimension).map_err(|e| NoiseError::InvalidConfiguration {
                    message: format!("cellular noise lookup: {e}"),
                })?;
            }
        }
        self.cellular_noise_lookup = lookup.map(Box::new);
        Ok(())
    }

    /// Sets the maximum displacement of the gradient perturbation.
    ///
    /// If set to [`None`], it is reset to its default: `1.0`.
    pub fn set_gradient_perturb_amp(&mut self, gradient_perturb_amp: Option<f32>) {
        self.gradient_perturb_amp = gradient_perturb_amp.unwrap_or(1.);
    }

    /// Sets how strongly Foam, Honey and Mutant are pushed towards -1 and 1.
    ///
    /// If set to [`None`], it is reset to its default: `1.0`. Negative values
    /// are clamped to `0.0`.
    pub fn set_foam_sharpness(&mut self, foam_sharpness: Option<f32>) {
        let foam_sharpness = foam_sharpness.unwrap_or(1.);
        if foam_sharpness < 0. {
            warn!("NoiseConfig: foam_sharpness {foam_sharpness} should not be negative, using 0.");
        }
        self.foam_sharpness = foam_sharpness.max(0.);
    }

    /// Sets the extra lattice coordinate of Mutant noise.
    ///
    /// If set to [`None`], it is reset to its default: `0.0`.
    pub fn set_mutation(&mut self, mutation: Option<f32>) {
        self.mutation = mutation.unwrap_or(0.);
    }

    // =======
    // Getters
    // =======

    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn noise_type(&self) -> NoiseType {
        self.noise_type
    }

    pub fn fractal_type(&self) -> FractalType {
        self.fractal_type
    }

    pub fn fractal_octaves(&self) -> u32 {
        self.octaves
    }

    pub fn fractal_lacunarity(&self) -> f32 {
        self.lacunarity
    }

    pub fn fractal_gain(&self) -> f32 {
        self.gain
    }

    /// `1 / Σ |gain|^i`, recomputed whenever octaves or gain change.
    pub fn fractal_bounding(&self) -> f32 {
        self.fractal_bounding
    }

    pub fn cellular_distance_function(&self) -> CellularDistanceFunction {
        self.cellular_distance_function
    }

    pub fn cellular_return_type(&self) -> CellularReturnType {
        self.cellular_return_type
    }

    pub fn cellular_noise_lookup(&self) -> Option<&NoiseConfig> {
        self.cellular_noise_lookup.as_deref()
    }

    pub fn gradient_perturb_amp(&self) -> f32 {
        self.gradient_perturb_amp
    }

    pub fn foam_sharpness(&self) -> f32 {
        self.foam_sharpness
    }

    pub fn mutation(&self) -> f32 {
        self.mutation
    }

    // ==========
    // Validation
    // ==========

    /// Whether the current noise type can be sampled in `dimension` D.
    pub fn supports(&self, dimension: usize) -> bool {
        self.dispatch.supports(dimension)
    }

    /// Checks that sampling in `dimension` D will succeed.
    pub fn validate(&self, dimension: usize) -> NoiseResult<()> {
        if !(2..=6).contains(&dimension) {
            return Err(NoiseError::InvalidDimension { actual: dimension });
        }
        if !self.supports(dimension) {
            return Err(self.unsupported(dimension));
        }
        Ok(())
    }

    // ========
    // Sampling
    // ========

    /// 2D noise at the given position using the configured seed.
    ///
    /// Output is bounded to roughly -1..1.
    pub fn sample_2d(&self, x: f32, y: f32) -> NoiseResult<f32> {
        self.sample_with_seed_2d(x, y, self.seed)
    }

    pub fn sample_3d(&self, x: f32, y: f32, z: f32) -> NoiseResult<f32> {
        self.sample_with_seed_3d(x, y, z, self.seed)
    }

    pub fn sample_4d(&self, x: f32, y: f32, z: f32, w: f32) -> NoiseResult<f32> {
        self.sample_with_seed_4d(x, y, z, w, self.seed)
    }

    pub fn sample_5d(&self, x: f32, y: f32, z: f32, w: f32, v: f32) -> NoiseResult<f32> {
        self.sample_with_seed_5d(x, y, z, w, v, self.seed)
    }

    pub fn sample_6d(&self, x: f32, y: f32, z: f32, w: f32, v: f32, u: f32) -> NoiseResult<f32> {
        self.sample_with_seed_6d(x, y, z, w, v, u, self.seed)
    }

    /// 2D noise with an explicit seed; the configured seed is left untouched.
    pub fn sample_with_seed_2d(&self, x: f32, y: f32, seed: i32) -> NoiseResult<f32> {
        self.run(self.dispatch.d2.as_ref(), seed, [x, y])
    }

    pub fn sample_with_seed_3d(&self, x: f32, y: f32, z: f32, seed: i32) -> NoiseResult<f32> {
        self.run(self.dispatch.d3.as_ref(), seed, [x, y, z])
    }

    pub fn sample_with_seed_4d(
        &self,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
        seed: i32,
    ) -> NoiseResult<f32> {
        self.run(self.dispatch.d4.as_ref(), seed, [x, y, z, w])
    }

    pub fn sample_with_seed_5d(
        &self,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
        v: f32,
        seed: i32,
    ) -> NoiseResult<f32> {
        self.run(self.dispatch.d5.as_ref(), seed, [x, y, z, w, v])
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sample_with_seed_6d(
        &self,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
        v: f32,
        u: f32,
        seed: i32,
    ) -> NoiseResult<f32> {
        self.run(self.dispatch.d6.as_ref(), seed, [x, y, z, w, v, u])
    }

    /// Noise at a coordinate of 2 to 6 components using the configured seed.
    pub fn sample(&self, coords: &[f32]) -> NoiseResult<f32> {
        self.sample_with_seed(coords, self.seed)
    }

    /// Noise at a coordinate of 2 to 6 components with an explicit seed.
    pub fn sample_with_seed(&self, coords: &[f32], seed: i32) -> NoiseResult<f32> {
        match *coords {
            [x, y] => self.sample_with_seed_2d(x, y, seed),
            [x, y, z] => self.sample_with_seed_3d(x, y, z, seed),
            [x, y, z, w] => self.sample_with_seed_4d(x, y, z, w, seed),
            [x, y, z, w, v] => self.sample_with_seed_5d(x, y, z, w, v, seed),
            [x, y, z, w, v, u] => self.sample_with_seed_6d(x, y, z, w, v, u, seed),
            _ => Err(NoiseError::InvalidDimension {
                actual: coords.len(),
            }),
        }
    }

    // ======================
    // Gradient perturbation
    // ======================

    /// Warps a 2D position in place along the cellular gradient field.
    ///
    /// Example usage:
    /// ```
    /// use noise_forge::NoiseConfig;
    ///
    /// let config = NoiseConfig::new();
    /// let mut p = [12.0, 40.0];
    /// config.gradient_perturb_2d(&mut p);
    /// let height = config.sample_2d(p[0], p[1]).unwrap();
    /// assert!((-1.0..=1.0).contains(&height));
    /// ```
    pub fn gradient_perturb_2d(&self, coords: &mut [f32; 2]) {
        gradient_perturb(self, self.seed, coords);
    }

    pub fn gradient_perturb_3d(&self, coords: &mut [f32; 3]) {
        gradient_perturb(self, self.seed, coords);
    }

    /// Warps a 2D position once per octave; each octave starts from the
    /// position the previous one produced.
    pub fn gradient_perturb_fractal_2d(&self, coords: &mut [f32; 2]) {
        gradient_perturb_fractal(self, self.seed, coords);
    }

    pub fn gradient_perturb_fractal_3d(&self, coords: &mut [f32; 3]) {
        gradient_perturb_fractal(self, self.seed, coords);
    }

    // ================
    // Internal helpers
    // ================

    #[inline]
    fn run<const N: usize>(
        &self,
        kernel: Option<&Kernel<N>>,
        seed: i32,
        coords: [f32; N],
    ) -> NoiseResult<f32> {
        let kernel = kernel.ok_or_else(|| self.unsupported(N))?;
        let scaled = coords.map(|c| c * self.frequency);
        Ok(kernel.run(self, seed, scaled))
    }

    fn unsupported(&self, dimension: usize) -> NoiseError {
        NoiseError::UnsupportedDimension {
            noise_type: self.noise_type,
            dimension,
        }
    }

    fn calculate_fractal_bounding(&mut self) {
        self.fractal_bounding = fractal_bounding(self.octaves, self.gain);
    }

    fn update_dispatch(&mut self) {
        self.dispatch = DispatchTable::resolve(
            self.noise_type,
            self.fractal_type,
            self.cellular_return_type,
        );
        debug!(
            "NoiseConfig: resolved {:?} ({:?}, {:?}) for {:?}",
            self.noise_type, self.fractal_type, self.cellular_return_type, self.dispatch
        );
    }
}
