// src/math/probability/noise/cubic.rs

use super::constants::*;
use super::hash::value_coord;
use super::interpolation::{cubic_lerp, lattice};

const MAX_NEIGHBOURS: usize = 4 * 4 * 4 * 4;

pub(crate) fn cubic_2d(seed: i32, x: f32, y: f32) -> f32 {
    let (x1, xs) = lattice(x);
    let (y1, ys) = lattice(y);

    let x0 = x1.wrapping_sub(1);
    let y0 = y1.wrapping_sub(1);
    let x2 = x1.wrapping_add(1);
    let y2 = y1.wrapping_add(1);
    let x3 = x1.wrapping_add(2);
    let y3 = y1.wrapping_add(2);

    let row = |y: i32| {
        cubic_lerp(
            value_coord([x0, y], seed),
            value_coord([x1, y], seed),
            value_coord([x2, y], seed),
            value_coord([x3, y], seed),
            xs,
        )
    };

    cubic_lerp(row(y0), row(y1), row(y2), row(y3), ys) * CUBIC_BOUNDING_2D
}

pub(crate) fn cubic_3d(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let (x1, xs) = lattice(x);
    let (y1, ys) = lattice(y);
    let (z1, zs) = lattice(z);

    // Versätze -1..=2 um die Zelle
    let at = |c: i32, k: i32| c.wrapping_add(k);

    let row = |y: i32, z: i32| {
        cubic_lerp(
            value_coord([at(x1, -1), y, z], seed),
            value_coord([x1, y, z], seed),
            value_coord([at(x1, 1), y, z], seed),
            value_coord([at(x1, 2), y, z], seed),
            xs,
        )
    };
    let plane = |z: i32| {
        cubic_lerp(
            row(at(y1, -1), z),
            row(y1, z),
            row(at(y1, 1), z),
            row(at(y1, 2), z),
            ys,
        )
    };

    cubic_lerp(plane(at(z1, -1)), plane(z1), plane(at(z1, 1)), plane(at(z1, 2)), zs)
        * CUBIC_BOUNDING_3D
}

/// Cubic noise over the full `4^N` neighbourhood; used for 4D.
pub(crate) fn cubic_nd<const N: usize>(seed: i32, coords: [f32; N]) -> f32 {
    let cells: [(i32, f32); N] = std::array::from_fn(|d| lattice(coords[d]));
    let fraction: [f32; N] = std::array::from_fn(|d| cells[d].1);

    let mut values = [0f32; MAX_NEIGHBOURS];
    let count = 1 << (2 * N);
    for (i, value) in values[..count].iter_mut().enumerate() {
        // Ziffer d (Basis 4) von i ist der Versatz -1..=2 auf Achse d
        let cell: [i32; N] =
            std::array::from_fn(|d| cells[d].0.wrapping_add(((i >> (2 * d)) & 3) as i32 - 1));
        *value = value_coord(cell, seed);
    }

    let mut len = count;
    for &t in &fraction {
        len /= 4;
        for j in 0..len {
            let k = 4 * j;
            values[j] = cubic_lerp(values[k], values[k + 1], values[k + 2], values[k + 3], t);
        }
    }

    values[0] * cubic_bounding(N)
}

/// Cubic noise in `N` dimensions (2 to 4).
#[inline]
pub(crate) fn cubic<const N: usize>(seed: i32, coords: [f32; N]) -> f32 {
    match N {
        2 => cubic_2d(seed, coords[0], coords[1]),
        3 => cubic_3d(seed, coords[0], coords[1], coords[2]),
        _ => cubic_nd(seed, coords),
    }
}

#[inline(always)]
fn cubic_bounding(dimension: usize) -> f32 {
    match dimension {
        2 => CUBIC_BOUNDING_2D,
        3 => CUBIC_BOUNDING_3D,
        _ => CUBIC_BOUNDING_4D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::random::random_coords;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generic_matches_unrolled() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..1000 {
            let [x, y] = random_coords::<2>(&mut rng, 300.0);
            assert_eq!(cubic_2d(6, x, y).to_bits(), cubic_nd(6, [x, y]).to_bits());
            let [x, y, z] = random_coords::<3>(&mut rng, 300.0);
            assert_eq!(cubic_3d(6, x, y, z).to_bits(), cubic_nd(6, [x, y, z]).to_bits());
        }
    }

    #[test]
    fn test_cubic_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..3000 {
            let values = [
                cubic(3, random_coords::<2>(&mut rng, 100.0)),
                cubic(3, random_coords::<3>(&mut rng, 100.0)),
                cubic(3, random_coords::<4>(&mut rng, 100.0)),
            ];
            for v in values {
                assert!((-1.0..=1.0).contains(&v), "{v}");
            }
        }
    }

    #[test]
    fn test_lattice_points_scale_hash_value() {
        let v = cubic_2d(5, 3.0, 7.0);
        let expected = value_coord([3, 7], 5) * CUBIC_BOUNDING_2D;
        assert!((v - expected).abs() < 1e-6);
    }
}
