#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpolation between lattice corners for Value, Perlin and gradient perturbation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interpolation {
    Linear,
    #[default]
    Hermite,
    Quintic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoiseType {
    Value,
    ValueFractal,
    Perlin,
    PerlinFractal,
    #[default]
    Simplex,
    SimplexFractal,
    Cellular,
    WhiteNoise,
    Cubic,
    CubicFractal,
    Foam,
    FoamFractal,
    Honey,
    HoneyFractal,
    Mutant,
    MutantFractal,
}

impl NoiseType {
    pub const ALL: [NoiseType; 16] = [
        NoiseType::Value,
        NoiseType::ValueFractal,
        NoiseType::Perlin,
        NoiseType::PerlinFractal,
        NoiseType::Simplex,
        NoiseType::SimplexFractal,
        NoiseType::Cellular,
        NoiseType::WhiteNoise,
        NoiseType::Cubic,
        NoiseType::CubicFractal,
        NoiseType::Foam,
        NoiseType::FoamFractal,
        NoiseType::Honey,
        NoiseType::HoneyFractal,
        NoiseType::Mutant,
        NoiseType::MutantFractal,
    ];

    /// The single-octave algorithm behind this noise type.
    pub(crate) fn algorithm(self) -> Algorithm {
        match self {
            NoiseType::Value | NoiseType::ValueFractal => Algorithm::Value,
            NoiseType::Perlin | NoiseType::PerlinFractal => Algorithm::Perlin,
            NoiseType::Simplex | NoiseType::SimplexFractal => Algorithm::Simplex,
            NoiseType::Cellular => Algorithm::Cellular,
            NoiseType::WhiteNoise => Algorithm::White,
            NoiseType::Cubic | NoiseType::CubicFractal => Algorithm::Cubic,
            NoiseType::Foam | NoiseType::FoamFractal => Algorithm::Foam,
            NoiseType::Honey | NoiseType::HoneyFractal => Algorithm::Honey,
            NoiseType::Mutant | NoiseType::MutantFractal => Algorithm::Mutant,
        }
    }

    pub fn is_fractal(self) -> bool {
        matches!(
            self,
            NoiseType::ValueFractal
                | NoiseType::PerlinFractal
                | NoiseType::SimplexFractal
                | NoiseType::CubicFractal
                | NoiseType::FoamFractal
                | NoiseType::HoneyFractal
                | NoiseType::MutantFractal
        )
    }

    /// Highest dimension this noise type can be sampled in.
    pub fn max_dimension(self) -> usize {
        self.algorithm().max_dimension()
    }

    pub fn supports(self, dimension: usize) -> bool {
        (2..=self.max_dimension()).contains(&dimension)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractalType {
    #[default]
    Fbm,
    Billow,
    RidgedMulti,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellularDistanceFunction {
    /// Squared euclidean length.
    #[default]
    Euclidean,
    Manhattan,
    /// Manhattan plus squared euclidean length.
    Natural,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellularReturnType {
    #[default]
    CellValue,
    NoiseLookup,
    Distance,
    Distance2,
    Distance2Add,
    Distance2Sub,
    Distance2Mul,
    Distance2Div,
}

impl CellularReturnType {
    /// Ob der zweitnächste Punkt gesucht werden muss.
    pub(crate) fn needs_second_edge(self) -> bool {
        !matches!(
            self,
            CellularReturnType::CellValue
                | CellularReturnType::NoiseLookup
                | CellularReturnType::Distance
        )
    }
}

// Interne Enum, nur für die Dispatch-Tabelle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Algorithm {
    Value,
    Perlin,
    Simplex,
    Cubic,
    Cellular,
    White,
    Foam,
    Honey,
    Mutant,
}

impl Algorithm {
    pub(crate) fn max_dimension(self) -> usize {
        match self {
            Algorithm::Cellular => 3,
            Algorithm::Cubic => 4,
            _ => 6,
        }
    }

    /// Seed increment between two fractal octaves.
    pub(crate) fn octave_seed_step(self) -> i32 {
        match self {
            Algorithm::Foam | Algorithm::Honey | Algorithm::Mutant => {
                super::constants::HYBRID_SEED_STEP
            }
            _ => 1,
        }
    }
}
