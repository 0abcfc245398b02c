use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseSeedError, core::Piece};

/// Seed for deterministic piece generation.
///
/// A 128-bit (16-byte) seed initializing the piece generator. The same seed
/// produces the same piece sequence, enabling:
///
/// - Reproducible games for debugging
/// - Replaying a game from the seed printed at exit
/// - Deterministic testing
///
/// Displays and parses as a 32-character hex string.
///
/// # Example
///
/// ```
/// use gridfall_engine::{PieceFactory, PieceSeed};
/// use rand::Rng as _;
///
/// let seed: PieceSeed = rand::rng().random();
///
/// // Two factories with the same seed produce the same pieces
/// let factory1 = PieceFactory::with_seed(seed);
/// let factory2 = PieceFactory::with_seed(seed);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PieceSeed([u8; 16]);

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for PieceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid hex seed: {hex_str:?}")))
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// Produces new falling pieces at the spawn position.
///
/// Each spawn draws one of the 7 catalog kinds uniformly at random from the
/// factory's own generator; the generator is the engine's only source of
/// non-determinism, injected here so games can be replayed from a
/// [`PieceSeed`].
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: Pcg32,
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceFactory {
    /// Creates a factory with a random seed from the OS random source.
    ///
    /// For deterministic piece generation use [`Self::with_seed`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Returns a new piece of a uniformly random kind, horizontally
    /// centered at the spawn row.
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.rng.random())
    }
}
