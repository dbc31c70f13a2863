// src/math/probability/noise/perlin.rs

use super::constants::*;
use super::hash::{hash_32, hash_256};
use super::interpolation::{lattice, lerp};
use super::types::Interpolation;
use super::value::{MAX_CORNERS, fold_lerp};

/// Gradient vector of a lattice point. 3D and 4D use the 32-entry tables,
/// every other dimension the 256-entry ones.
#[inline(always)]
pub(crate) fn gradient<const N: usize>(cell: [i32; N], seed: i32) -> &'static [f32] {
    match N {
        2 => &GRADIENTS_2D[hash_256(cell, seed)][..],
        3 => &GRADIENTS_3D[hash_32(cell, seed)][..],
        4 => &GRADIENTS_4D[hash_32(cell, seed)][..],
        5 => &GRADIENTS_5D[hash_256(cell, seed)][..],
        6 => &GRADIENTS_6D[hash_256(cell, seed)][..],
        _ => &[],
    }
}

#[inline(always)]
pub(crate) fn dot(gradient: &[f32], offset: &[f32]) -> f32 {
    gradient.iter().zip(offset).map(|(g, d)| g * d).sum()
}

#[inline(always)]
fn grad_coord_2d(seed: i32, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
    let [xg, yg] = GRADIENTS_2D[hash_256([x, y], seed)];
    xd * xg + yd * yg
}

#[inline(always)]
fn grad_coord_3d(seed: i32, x: i32, y: i32, z: i32, xd: f32, yd: f32, zd: f32) -> f32 {
    let [xg, yg, zg] = GRADIENTS_3D[hash_32([x, y, z], seed)];
    xd * xg + yd * yg + zd * zg
}

pub(crate) fn perlin_2d(seed: i32, x: f32, y: f32, interpolation: Interpolation) -> f32 {
    let (x0, xd0) = lattice(x);
    let (y0, yd0) = lattice(y);

    let xd1 = xd0 - 1.;
    let yd1 = yd0 - 1.;

    let xs = interpolation.apply(xd0);
    let ys = interpolation.apply(yd0);

    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xf0 = lerp(
        grad_coord_2d(seed, x0, y0, xd0, yd0),
        grad_coord_2d(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_coord_2d(seed, x0, y1, xd0, yd1),
        grad_coord_2d(seed, x1, y1, xd1, yd1),
        xs,
    );

    lerp(xf0, xf1, ys) * PERLIN_SCALE_2D
}

pub(crate) fn perlin_3d(seed: i32, x: f32, y: f32, z: f32, interpolation: Interpolation) -> f32 {
    let (x0, xd0) = lattice(x);
    let (y0, yd0) = lattice(y);
    let (z0, zd0) = lattice(z);

    let xd1 = xd0 - 1.;
    let yd1 = yd0 - 1.;
    let zd1 = zd0 - 1.;

    let xs = interpolation.apply(xd0);
    let ys = interpolation.apply(yd0);
    let zs = interpolation.apply(zd0);

    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let xf00 = lerp(
        grad_coord_3d(seed, x0, y0, z0, xd0, yd0, zd0),
        grad_coord_3d(seed, x1, y0, z0, xd1, yd0, zd0),
        xs,
    );
    let xf10 = lerp(
        grad_coord_3d(seed, x0, y1, z0, xd0, yd1, zd0),
        grad_coord_3d(seed, x1, y1, z0, xd1, yd1, zd0),
        xs,
    );
    let xf01 = lerp(
        grad_coord_3d(seed, x0, y0, z1, xd0, yd0, zd1),
        grad_coord_3d(seed, x1, y0, z1, xd1, yd0, zd1),
        xs,
    );
    let xf11 = lerp(
        grad_coord_3d(seed, x0, y1, z1, xd0, yd1, zd1),
        grad_coord_3d(seed, x1, y1, z1, xd1, yd1, zd1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs) * PERLIN_SCALE_3D
}

/// Gradient noise for 4D to 6D.
pub(crate) fn perlin_nd<const N: usize>(
    seed: i32,
    coords: [f32; N],
    interpolation: Interpolation,
) -> f32 {
    let cells: [(i32, f32); N] = std::array::from_fn(|d| lattice(coords[d]));
    let offset: [f32; N] = std::array::from_fn(|d| cells[d].1);
    let fade: [f32; N] = std::array::from_fn(|d| interpolation.apply(offset[d]));

    let mut corners = [0f32; MAX_CORNERS];
    let count = 1 << N;
    for (i, corner) in corners[..count].iter_mut().enumerate() {
        let cell: [i32; N] =
            std::array::from_fn(|d| cells[d].0.wrapping_add(((i >> d) & 1) as i32));
        let local: [f32; N] = std::array::from_fn(|d| offset[d] - ((i >> d) & 1) as f32);
        *corner = dot(gradient(cell, seed), &local);
    }

    fold_lerp(&mut corners[..count], &fade) * perlin_scale(N)
}

#[inline(always)]
fn perlin_scale(dimension: usize) -> f32 {
    match dimension {
        2 => PERLIN_SCALE_2D,
        3 => PERLIN_SCALE_3D,
        4 => PERLIN_SCALE_4D,
        5 => PERLIN_SCALE_5D,
        _ => PERLIN_SCALE_6D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::random::random_coords;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_zero_on_lattice_points() {
        for x in -4..4 {
            for y in -4..4 {
                assert!(perlin_2d(1, x as f32, y as f32, Interpolation::Quintic).abs() < 1e-6);
                assert!(
                    perlin_3d(1, x as f32, y as f32, 2.0, Interpolation::Quintic).abs() < 1e-6
                );
                let v = perlin_nd(1, [x as f32, y as f32, 1.0, 3.0, -2.0], Interpolation::Hermite);
                assert!(v.abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_generic_agrees_with_unrolled() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..2000 {
            let [x, y] = random_coords::<2>(&mut rng, 300.0);
            let a = perlin_2d(8, x, y, Interpolation::Hermite);
            let b = perlin_nd(8, [x, y], Interpolation::Hermite);
            assert!((a - b).abs() < 1e-6);
            let [x, y, z] = random_coords::<3>(&mut rng, 300.0);
            let a = perlin_3d(8, x, y, z, Interpolation::Linear);
            let b = perlin_nd(8, [x, y, z], Interpolation::Linear);
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_gradient_table_lengths() {
        for row in GRADIENTS_2D.iter() {
            assert!((row[0] * row[0] + row[1] * row[1] - 1.0).abs() < 1e-5);
        }
        for row in GRADIENTS_5D.iter() {
            assert!((dot(row, row) - 1.0).abs() < 1e-5);
        }
        for row in GRADIENTS_6D.iter() {
            assert!((dot(row, row) - 1.0).abs() < 1e-5);
        }
        for row in GRADIENTS_4D.iter() {
            assert_eq!(dot(row, row), 3.0);
        }
    }

    #[test]
    fn test_high_dimensional_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..3000 {
            let v4 = perlin_nd(5, random_coords::<4>(&mut rng, 100.0), Interpolation::Quintic);
            let v5 = perlin_nd(5, random_coords::<5>(&mut rng, 100.0), Interpolation::Quintic);
            let v6 = perlin_nd(5, random_coords::<6>(&mut rng, 100.0), Interpolation::Quintic);
            for v in [v4, v5, v6] {
                assert!(v.abs() <= 1.0 + 1e-4, "{v}");
            }
        }
    }
}
