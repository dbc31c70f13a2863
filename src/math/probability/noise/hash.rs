// src/math/probability/noise/hash.rs
//
// Integer-only lattice hashing. Every pseudo-random decision in the crate
// starts here, so the results are identical on every platform.

use super::constants::*;

#[inline(always)]
fn multipliers(dimension: usize) -> &'static [i32] {
    match dimension {
        2 => &HASH_MULTIPLIERS_2D,
        3 => &HASH_MULTIPLIERS_3D,
        4 => &HASH_MULTIPLIERS_4D,
        5 => &HASH_MULTIPLIERS_5D,
        6 => &HASH_MULTIPLIERS_6D,
        _ => &HASH_MULTIPLIERS_7D,
    }
}

/// Shared mixing step behind all three output widths.
#[inline(always)]
fn mix<const N: usize>(coords: [i32; N], seed: i32) -> u32 {
    let mut s = seed as u32;
    for (&c, &m) in coords.iter().zip(multipliers(N)) {
        s ^= c.wrapping_mul(m) as u32;
    }
    (s ^ s.rotate_left(19) ^ s.rotate_left(5) ^ HASH_XOR).wrapping_mul(HASH_MUL)
}

/// Full 32-bit hash.
#[inline(always)]
pub(crate) fn hash_all<const N: usize>(coords: [i32; N], seed: i32) -> u32 {
    let s = mix(coords, seed);
    s ^ (s >> 11)
}

/// 8-bit hash, indexes the 256-entry tables.
#[inline(always)]
pub(crate) fn hash_256<const N: usize>(coords: [i32; N], seed: i32) -> usize {
    (mix(coords, seed) >> 24) as usize
}

/// 5-bit hash, indexes the 32-entry tables.
#[inline(always)]
pub(crate) fn hash_32<const N: usize>(coords: [i32; N], seed: i32) -> usize {
    (mix(coords, seed) >> 27) as usize
}

/// Lattice value in `[-1, 1)`: the top 25 bits of the hash scaled by 2^-24.
#[inline(always)]
pub(crate) fn value_coord<const N: usize>(coords: [i32; N], seed: i32) -> f32 {
    ((hash_all(coords, seed) as i32) >> 7) as f32 * (1.0 / 16777216.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_golden_values() {
        assert_eq!(hash_all([0, 0], 1337), 0x5398_b31c);
        assert_eq!(hash_all([3, -7], 42), 0xa9e1_1180);
        assert_eq!(hash_all([1, 2, 3], -5), 0x56d5_2980);
        assert_eq!(hash_256([0, 0], 1337), 83);
        assert_eq!(hash_256([3, -7], 42), 169);
        assert_eq!(hash_32([0, 0], 1337), 10);
        assert_eq!(hash_32([3, -7], 42), 21);
    }

    #[test]
    fn test_widths_share_one_mix() {
        for x in -20..20 {
            for y in -20..20 {
                let full = mix([x, y], 99);
                assert_eq!(hash_256([x, y], 99), (full >> 24) as usize);
                assert_eq!(hash_32([x, y], 99), (full >> 27) as usize);
                assert!(hash_32([x, y], 99) < 32);
            }
        }
    }

    #[test]
    fn test_value_coord_range() {
        for x in -50..50 {
            for y in -50..50 {
                let v = value_coord([x, y, x ^ y], 7);
                assert!((-1.0..1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_seed_changes_hash() {
        let differing = (0..1000)
            .filter(|&i| hash_all([i, -i], 1) != hash_all([i, -i], 2))
            .count();
        assert!(differing > 990);
    }

    #[test]
    fn test_axis_order_matters() {
        assert_ne!(hash_all([1, 2], 0), hash_all([2, 1], 0));
        assert_ne!(hash_all([1, 2, 3, 4, 5, 6], 0), hash_all([6, 5, 4, 3, 2, 1], 0));
    }
}
