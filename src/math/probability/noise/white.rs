// src/math/probability/noise/white.rs

use super::hash::value_coord;

#[inline(always)]
fn float_to_int(f: f32) -> i32 {
    let bits = f.to_bits() as i32;
    bits ^ (bits >> 16)
}

/// Uncorrelated noise: the bit pattern of each coordinate is hashed directly.
#[inline]
pub(crate) fn white<const N: usize>(seed: i32, coords: [f32; N]) -> f32 {
    let cell: [i32; N] = std::array::from_fn(|d| float_to_int(coords[d]));
    value_coord(cell, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_a_pure_function_of_the_bits() {
        assert_eq!(white(1, [0.5, 0.25]), white(1, [0.5, 0.25]));
        assert_ne!(white(1, [0.5, 0.25]), white(2, [0.5, 0.25]));
        // +0.0 und -0.0 unterscheiden sich im Bitmuster
        assert_eq!(float_to_int(0.0), 0);
        assert_ne!(float_to_int(-0.0), 0);
    }

    #[test]
    fn test_white_neighbours_are_uncorrelated() {
        let values: Vec<f32> = (0..1000).map(|i| white(7, [i as f32 * 0.001, 1.0])).collect();
        let mean = values.iter().sum::<f32>() / values.len() as f32;
        assert!(mean.abs() < 0.1);
        let jumps = values.windows(2).filter(|w| (w[0] - w[1]).abs() > 0.1).count();
        assert!(jumps > 800);
    }

    #[test]
    fn test_white_range() {
        for i in -500..500 {
            let v = white(3, [i as f32 * 0.37, 2.0, -1.5, 8.25, 0.1, 3.0]);
            assert!((-1.0..1.0).contains(&v));
        }
    }
}
