// src/math/probability/noise/simplex.rs

use super::constants::*;
use super::hash::{hash_32, hash_256};
use super::interpolation::floor_cell;
use super::perlin::{dot, gradient};

/// Radial falloff `(r² - |d|²)^4`, zero outside the kernel radius.
#[inline(always)]
fn falloff(distance_sq: f32) -> f32 {
    let t = SIMPLEX_RADIUS_SQ - distance_sq;
    if t <= 0. {
        return 0.;
    }
    let t = t * t;
    t * t
}

#[inline(always)]
fn corner_2d(seed: i32, cell: [i32; 2], x: f32, y: f32) -> f32 {
    let w = falloff(x * x + y * y);
    if w == 0. {
        return 0.;
    }
    let [xg, yg] = GRADIENTS_2D[hash_256(cell, seed)];
    w * (x * xg + y * yg)
}

#[inline(always)]
fn corner_3d(seed: i32, cell: [i32; 3], x: f32, y: f32, z: f32) -> f32 {
    let w = falloff(x * x + y * y + z * z);
    if w == 0. {
        return 0.;
    }
    let [xg, yg, zg] = GRADIENTS_3D[hash_32(cell, seed)];
    w * (x * xg + y * yg + z * zg)
}

pub(crate) fn simplex_2d(seed: i32, x: f32, y: f32) -> f32 {
    let t = (x + y) * F2;
    let (i, fi) = floor_cell(x + t);
    let (j, fj) = floor_cell(y + t);

    let t = (fi + fj) * G2;
    let x0 = x - (fi - t);
    let y0 = y - (fj - t);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1. + 2. * G2;
    let y2 = y0 - 1. + 2. * G2;

    let n0 = corner_2d(seed, [i, j], x0, y0);
    let n1 = corner_2d(seed, [i.wrapping_add(i1), j.wrapping_add(j1)], x1, y1);
    let n2 = corner_2d(seed, [i.wrapping_add(1), j.wrapping_add(1)], x2, y2);

    SIMPLEX_SCALE_2D * (n0 + n1 + n2)
}

pub(crate) fn simplex_3d(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let t = (x + y + z) * F3;
    let (i, fi) = floor_cell(x + t);
    let (j, fj) = floor_cell(y + t);
    let (k, fk) = floor_cell(z + t);

    let t = (fi + fj + fk) * G3;
    let x0 = x - (fi - t);
    let y0 = y - (fj - t);
    let z0 = z - (fk - t);

    // Reihenfolge der Achsen nach Größe des Zellversatzes
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + 2. * G3;
    let y2 = y0 - j2 as f32 + 2. * G3;
    let z2 = z0 - k2 as f32 + 2. * G3;
    let x3 = x0 - 1. + 3. * G3;
    let y3 = y0 - 1. + 3. * G3;
    let z3 = z0 - 1. + 3. * G3;

    let n0 = corner_3d(seed, [i, j, k], x0, y0, z0);
    let cell = |a: i32, b: i32, c: i32| [i.wrapping_add(a), j.wrapping_add(b), k.wrapping_add(c)];
    let n1 = corner_3d(seed, cell(i1, j1, k1), x1, y1, z1);
    let n2 = corner_3d(seed, cell(i2, j2, k2), x2, y2, z2);
    let n3 = corner_3d(seed, cell(1, 1, 1), x3, y3, z3);

    SIMPLEX_SCALE_3D * (n0 + n1 + n2 + n3)
}

/// Simplex noise for 4D to 6D.
///
/// The in-cell offsets are ranked by size; corner `k` of the simplex has
/// stepped along the `k` axes with the largest offsets.
pub(crate) fn simplex_nd<const N: usize>(seed: i32, coords: [f32; N]) -> f32 {
    let (skew, unskew) = skew_factors(N);

    let s = coords.iter().sum::<f32>() * skew;
    let cells: [(i32, f32); N] = std::array::from_fn(|d| floor_cell(coords[d] + s));
    let t = cells.iter().map(|&(_, cell)| cell).sum::<f32>() * unskew;
    let offset: [f32; N] = std::array::from_fn(|d| coords[d] - (cells[d].1 - t));

    let mut rank = [0usize; N];
    for a in 0..N {
        for b in (a + 1)..N {
            if offset[a] >= offset[b] {
                rank[b] += 1;
            } else {
                rank[a] += 1;
            }
        }
    }

    let mut sum = 0.;
    for k in 0..=N {
        let step: [i32; N] = std::array::from_fn(|d| (rank[d] < k) as i32);
        let local: [f32; N] =
            std::array::from_fn(|d| offset[d] - step[d] as f32 + k as f32 * unskew);
        let w = falloff(dot(&local, &local));
        if w == 0. {
            continue;
        }
        let cell: [i32; N] = std::array::from_fn(|d| cells[d].0.wrapping_add(step[d]));
        sum += w * dot(gradient(cell, seed), &local);
    }

    sum * simplex_scale(N)
}

/// Simplex noise in `N` dimensions.
#[inline]
pub(crate) fn simplex<const N: usize>(seed: i32, coords: [f32; N]) -> f32 {
    match N {
        2 => simplex_2d(seed, coords[0], coords[1]),
        3 => simplex_3d(seed, coords[0], coords[1], coords[2]),
        _ => simplex_nd(seed, coords),
    }
}

#[inline(always)]
fn skew_factors(dimension: usize) -> (f32, f32) {
    match dimension {
        2 => (F2, G2),
        3 => (F3, G3),
        4 => (F4, G4),
        5 => (F5, G5),
        _ => (F6, G6),
    }
}

#[inline(always)]
fn simplex_scale(dimension: usize) -> f32 {
    match dimension {
        2 => SIMPLEX_SCALE_2D,
        3 => SIMPLEX_SCALE_3D,
        4 => SIMPLEX_SCALE_4D,
        5 => SIMPLEX_SCALE_5D,
        _ => SIMPLEX_SCALE_6D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::random::random_coords;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_generic_agrees_with_unrolled() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..3000 {
            let [x, y] = random_coords::<2>(&mut rng, 200.0);
            assert!((simplex_2d(4, x, y) - simplex_nd(4, [x, y])).abs() < 1e-4);
            let [x, y, z] = random_coords::<3>(&mut rng, 200.0);
            assert!((simplex_3d(4, x, y, z) - simplex_nd(4, [x, y, z])).abs() < 1e-4);
        }
    }

    #[test]
    fn test_simplex_range_all_dimensions() {
        let mut rng = StdRng::seed_from_u64(32);
        for _ in 0..5000 {
            let values = [
                simplex_2d(9, rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0)),
                simplex_nd(9, random_coords::<3>(&mut rng, 500.0)),
                simplex_nd(9, random_coords::<4>(&mut rng, 500.0)),
                simplex_nd(9, random_coords::<5>(&mut rng, 500.0)),
                simplex_nd(9, random_coords::<6>(&mut rng, 500.0)),
            ];
            for v in values {
                assert!(v.abs() <= 1.0 + 1e-3, "{v}");
            }
        }
    }

    #[test]
    fn test_simplex_is_continuous() {
        // Der Kernel fällt vor jeder Simplexkante auf null
        let step = 1e-3;
        for dim in 4..=6 {
            let mut previous = None;
            for i in 0..5000 {
                let t = i as f32 * step;
                let v = match dim {
                    4 => simplex_nd(2, [t, 0.3 * t + 1.1, -0.7 * t, 2.0]),
                    5 => simplex_nd(2, [t, 0.3 * t + 1.1, -0.7 * t, 2.0, 0.5 * t]),
                    _ => simplex_nd(2, [t, 0.3 * t + 1.1, -0.7 * t, 2.0, 0.5 * t, -t]),
                };
                if let Some(p) = previous {
                    let diff: f32 = v - p;
                    assert!(diff.abs() < 0.05, "jump {diff} in {dim}D at {t}");
                }
                previous = Some(v);
            }
        }
    }

    #[test]
    fn test_simplex_not_constant() {
        let mut rng = StdRng::seed_from_u64(33);
        let spread = (0..200)
            .map(|_| simplex_nd(1, random_coords::<5>(&mut rng, 50.0)))
            .fold(0f32, |acc, v| acc.max(v.abs()));
        assert!(spread > 0.1);
    }
}
