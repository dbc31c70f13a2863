// src/math/probability/noise/interpolation.rs

use super::types::Interpolation;

impl Interpolation {
    /// Maps a lattice fraction `t` in `[0, 1]` through the kernel.
    #[inline(always)]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Interpolation::Linear => t,
            Interpolation::Hermite => interp_hermite(t),
            Interpolation::Quintic => interp_quintic(t),
        }
    }
}

// ==============
// Math functions
// ==============

/// Lattice index of an integral float. Indices wrap around at the `i32` range,
/// far beyond the point where `f32` still resolves cells.
#[inline(always)]
pub(crate) fn wrap_index(cell: f32) -> i32 {
    cell as i64 as i32
}

/// Cell containing `f`, as index and as float.
///
/// Negative integers land one cell lower.
#[inline(always)]
pub(crate) fn floor_cell(f: f32) -> (i32, f32) {
    let cell = if f >= 0. { f.trunc() } else { f.trunc() - 1. };
    (wrap_index(cell), cell)
}

/// Cell containing `f` and the offset of `f` inside it, in `[0, 1]`.
#[inline(always)]
pub(crate) fn lattice(f: f32) -> (i32, f32) {
    let (index, cell) = floor_cell(f);
    (index, f - cell)
}

/// Nearest lattice point as index and as float.
#[inline(always)]
pub(crate) fn fast_round(f: f32) -> (i32, f32) {
    let cell = if f >= 0. { (f + 0.5).trunc() } else { (f - 0.5).trunc() };
    (wrap_index(cell), cell)
}

#[inline(always)]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline(always)]
pub(crate) fn interp_hermite(t: f32) -> f32 {
    t * t * (3. - 2. * t)
}

#[inline(always)]
pub(crate) fn interp_quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6. - 15.) + 10.)
}

/// 4-point cubic through `b` (t = 0) and `c` (t = 1), shaped by `a` and `d`.
#[inline(always)]
pub(crate) fn cubic_lerp(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}
