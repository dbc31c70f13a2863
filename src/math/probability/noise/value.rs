// src/math/probability/noise/value.rs

use super::hash::value_coord;
use super::interpolation::{lattice, lerp};
use super::types::Interpolation;

/// Upper bound for 2^N lattice corners (7D is the largest value lattice).
pub(crate) const MAX_CORNERS: usize = 1 << 7;

pub(crate) fn value_2d(seed: i32, x: f32, y: f32, interpolation: Interpolation) -> f32 {
    let (x0, xd) = lattice(x);
    let (y0, yd) = lattice(y);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xs = interpolation.apply(xd);
    let ys = interpolation.apply(yd);

    let xf0 = lerp(value_coord([x0, y0], seed), value_coord([x1, y0], seed), xs);
    let xf1 = lerp(value_coord([x0, y1], seed), value_coord([x1, y1], seed), xs);

    lerp(xf0, xf1, ys)
}

pub(crate) fn value_3d(seed: i32, x: f32, y: f32, z: f32, interpolation: Interpolation) -> f32 {
    let (x0, xd) = lattice(x);
    let (y0, yd) = lattice(y);
    let (z0, zd) = lattice(z);
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xs = interpolation.apply(xd);
    let ys = interpolation.apply(yd);
    let zs = interpolation.apply(zd);

    let xf00 = lerp(value_coord([x0, y0, z0], seed), value_coord([x1, y0, z0], seed), xs);
    let xf10 = lerp(value_coord([x0, y1, z0], seed), value_coord([x1, y1, z0], seed), xs);
    let xf01 = lerp(value_coord([x0, y0, z1], seed), value_coord([x1, y0, z1], seed), xs);
    let xf11 = lerp(value_coord([x0, y1, z1], seed), value_coord([x1, y1, z1], seed), xs);

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs)
}

/// Value noise for any dimension up to 7, used from 4D on.
///
/// Corner `i` sits at `cell + bit d of i` on axis `d`; the corners are then
/// folded axis by axis in the same order as the unrolled 2D/3D versions.
pub(crate) fn value_nd<const N: usize>(
    seed: i32,
    coords: [f32; N],
    interpolation: Interpolation,
) -> f32 {
    let cells: [(i32, f32); N] = std::array::from_fn(|d| lattice(coords[d]));
    let fade: [f32; N] = std::array::from_fn(|d| interpolation.apply(cells[d].1));

    let mut corners = [0f32; MAX_CORNERS];
    let count = 1 << N;
    for (i, corner) in corners[..count].iter_mut().enumerate() {
        let cell: [i32; N] =
            std::array::from_fn(|d| cells[d].0.wrapping_add(((i >> d) & 1) as i32));
        *corner = value_coord(cell, seed);
    }

    fold_lerp(&mut corners[..count], &fade)
}

/// Collapses `2^k` corner values to one, one axis per step.
#[inline]
pub(crate) fn fold_lerp(values: &mut [f32], fade: &[f32]) -> f32 {
    let mut len = values.len();
    for &t in fade {
        len /= 2;
        for j in 0..len {
            values[j] = lerp(values[2 * j], values[2 * j + 1], t);
        }
    }
    values[0]
}

/// Value noise in `N` dimensions, picking the unrolled version where one exists.
#[inline]
pub(crate) fn value<const N: usize>(
    seed: i32,
    coords: [f32; N],
    interpolation: Interpolation,
) -> f32 {
    match N {
        2 => value_2d(seed, coords[0], coords[1], interpolation),
        3 => value_3d(seed, coords[0], coords[1], coords[2], interpolation),
        _ => value_nd(seed, coords, interpolation),
    }
}

/// Hermite value noise remapped to `[0, 1)`; the building block of the hybrids.
#[inline]
pub(crate) fn value_unit<const N: usize>(seed: i32, coords: [f32; N]) -> f32 {
    (value(seed, coords, Interpolation::Hermite) + 1.) * 0.5
}
