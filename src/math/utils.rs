// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const TAU: f32 = std::f32::consts::TAU;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob ein Wert im Intervall [min - tolerance, max + tolerance] liegt
    pub fn within(value: f32, min: f32, max: f32, tolerance: f32) -> bool {
        value >= min - tolerance && value <= max + tolerance
    }
}

/// Winkel-Hilfsfunktionen auf Basis von "Turns" (1.0 = volle Umdrehung).
///
/// Die Näherungen sind Polynome statt `f32::sin`/`f32::cos`; der maximale
/// Fehler liegt bei etwa 0.001.
pub mod angles {
    /// Sine of an angle given in turns.
    #[inline]
    pub fn sin_turns(turns: f32) -> f32 {
        let turns = turns * 4.0;
        // Viertel-Umdrehungen, auf gerade Zahl abgerundet
        let floor = (if turns >= 0.0 {
            turns as i64
        } else {
            turns as i64 - 1
        }) & -2;
        let t = turns - floor as f32;
        let t = t * (2.0 - t);
        t * (-0.775 - 0.225 * t) * ((floor & 2) - 1) as f32
    }

    /// Cosine of an angle given in turns.
    #[inline]
    pub fn cos_turns(turns: f32) -> f32 {
        sin_turns(turns + 0.25)
    }

    /// Konvertiert Turns zu Radiant
    pub fn turns_to_rad(turns: f32) -> f32 {
        turns * super::constants::TAU
    }
}

/// Random utilities für Tests (erweitert vorhandene rand-Funktionalität)
#[cfg(test)]
pub(crate) mod random {
    use rand::Rng;

    /// Erzeugt eine zufällige Koordinate mit Komponenten in `[-extent, extent)`.
    pub(crate) fn random_coords<const N: usize>(rng: &mut impl Rng, extent: f32) -> [f32; N] {
        std::array::from_fn(|_| rng.random_range(-extent..extent))
    }
}

#[cfg(test)]
mod tests {
    use super::angles::*;
    use super::comparison::*;

    #[test]
    fn test_sin_turns_cardinal_points() {
        assert!(nearly_equal(sin_turns(0.0), 0.0));
        assert!(nearly_equal(sin_turns(0.25), 1.0));
        assert!(nearly_equal(sin_turns(0.5), 0.0));
        assert!(nearly_equal(sin_turns(0.75), -1.0));
        assert!(nearly_equal(sin_turns(-0.25), -1.0));
        assert!(nearly_equal(cos_turns(0.0), 1.0));
        assert!(nearly_equal(cos_turns(0.5), -1.0));
    }

    #[test]
    fn test_sin_turns_close_to_std() {
        for i in -400..=400 {
            let turns = i as f32 / 100.0;
            let exact = turns_to_rad(turns).sin();
            assert!(
                nearly_equal_eps(sin_turns(turns), exact, 2e-3),
                "sin_turns({turns}) = {}, expected {exact}",
                sin_turns(turns)
            );
            let exact_cos = turns_to_rad(turns).cos();
            assert!(nearly_equal_eps(cos_turns(turns), exact_cos, 2e-3));
        }
    }

    #[test]
    fn test_random_coords_within_extent() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = super::random::random_coords::<4>(&mut rng, 3.0);
            assert!(p.iter().all(|c| (-3.0..3.0).contains(c)));
        }
    }

    #[test]
    fn test_sin_turns_periodic() {
        for i in 0..100 {
            let turns = i as f32 / 128.0;
            assert_eq!(sin_turns(turns).to_bits(), sin_turns(turns + 2.0).to_bits());
        }
    }
}
