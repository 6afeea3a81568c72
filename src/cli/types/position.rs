//! Fantasy football position types and utilities.

use crate::error::KickoffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position literal used for players with no usable position.
pub const UNKNOWN_POSITION: &str = "UNK";

/// Fantasy football player positions.
///
/// Player records carry their position as free-form text; this enum is the
/// closed set the toolkit understands for filtering and for the
/// position-average projection table.
///
/// # Examples
///
/// ```rust
/// use kickoff_kings::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(Position::DEF.to_string(), "DEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DEF,
    UNK,
}

impl Position {
    /// Typical full-season (17 game) fantasy points for the position.
    ///
    /// Positions outside the table fall back to 200.
    pub fn season_average(&self) -> f64 {
        match self {
            Position::QB => 250.0,
            Position::RB => 180.0,
            Position::WR => 160.0,
            Position::TE => 120.0,
            Position::K => 130.0,
            Position::DEF => 150.0,
            Position::UNK => 200.0,
        }
    }

    /// Whether a free-form record position refers to this position.
    pub fn matches(&self, record_position: &str) -> bool {
        record_position
            .parse::<Position>()
            .map(|p| p == *self)
            .unwrap_or(false)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "DEF",
            Position::UNK => UNKNOWN_POSITION,
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = KickoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "UNK" => Ok(Position::UNK),
            _ => Err(KickoffError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
