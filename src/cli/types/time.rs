//! Season and game-count types.

use crate::error::{KickoffError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = KickoffError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| KickoffError::invalid_argument(format!("invalid season year: {s:?}")))
    }
}

/// Number of games a projection is scaled to.
///
/// Constructed only from non-negative counts; parsing or converting a
/// negative value yields `InvalidArgument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamesPlayed(u32);

impl GamesPlayed {
    /// A full NFL regular season.
    pub const FULL_SEASON: GamesPlayed = GamesPlayed(17);

    pub fn new(games: u32) -> Self {
        Self(games)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for GamesPlayed {
    fn default() -> Self {
        Self::FULL_SEASON
    }
}

impl TryFrom<i64> for GamesPlayed {
    type Error = KickoffError;

    fn try_from(games: i64) -> Result<Self> {
        if games < 0 {
            return Err(KickoffError::invalid_argument(format!(
                "games played cannot be negative (got {games})"
            )));
        }
        u32::try_from(games)
            .map(Self)
            .map_err(|_| KickoffError::invalid_argument(format!("games played too large: {games}")))
    }
}

impl fmt::Display for GamesPlayed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GamesPlayed {
    type Err = KickoffError;

    fn from_str(s: &str) -> Result<Self> {
        let games: i64 = s
            .trim()
            .parse()
            .map_err(|_| KickoffError::invalid_argument(format!("invalid game count: {s:?}")))?;
        Self::try_from(games)
    }
}
