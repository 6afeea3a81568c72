use serde::{de::Error, Deserialize, Deserializer, Serialize};

use crate::cli::types::Season;
use crate::error::{KickoffError, Result};


/// Numeric stat that treats `null` the same as an absent field.
fn de_null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Deserialize::deserialize(deserializer)?;
    Ok(raw.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Games played arrive as integers or whole floats (`16.0`). Negative,
/// fractional and out-of-range counts are rejected.
fn de_games_played<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Deserialize::deserialize(deserializer)?;
    match raw {
        None => Ok(0),
        Some(v) if !v.is_finite() => Ok(0),
        Some(v) if v < 0.0 => Err(D::Error::custom(format!(
            "games played cannot be negative (got {v})"
        ))),
        Some(v) if v.fract() != 0.0 => Err(D::Error::custom(format!(
            "games played must be a whole number (got {v})"
        ))),
        Some(v) if v > f64::from(u32::MAX) => Err(D::Error::custom(format!(
            "games played out of range (got {v})"
        ))),
        Some(v) => Ok(v as u32),
    }
}

fn de_null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// One player's raw counting stats for a season (or season to date).
///
/// Field names follow the interchange schema shared with data sources and
/// the season store (`"Passing Yds"`, `"FUM Lost"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    #[serde(rename = "Name", default, deserialize_with = "de_null_as_empty")]
    pub name: String,
    #[serde(rename = "Team", default, deserialize_with = "de_null_as_empty")]
    pub team: String,
    /// Free-form position text; see [`crate::Position`] for the known set.
    #[serde(rename = "Position", default, deserialize_with = "de_null_as_empty")]
    pub position: String,
    #[serde(rename = "GP", default, deserialize_with = "de_games_played")]
    pub games_played: u32,
    #[serde(rename = "Passing Yds", default, deserialize_with = "de_null_as_zero")]
    pub passing_yds: f64,
    #[serde(rename = "Passing TD", default, deserialize_with = "de_null_as_zero")]
    pub passing_td: f64,
    #[serde(rename = "Passing Sks", default, deserialize_with = "de_null_as_zero")]
    pub passing_sacks: f64,
    #[serde(rename = "Rushing Yds", default, deserialize_with = "de_null_as_zero")]
    pub rushing_yds: f64,
    #[serde(rename = "Rushing TD", default, deserialize_with = "de_null_as_zero")]
    pub rushing_td: f64,
    #[serde(rename = "Receiving Tgt", default, deserialize_with = "de_null_as_zero")]
    pub receiving_tgt: f64,
    #[serde(rename = "Receiving Yds", default, deserialize_with = "de_null_as_zero")]
    pub receiving_yds: f64,
    #[serde(rename = "Receiving TD", default, deserialize_with = "de_null_as_zero")]
    pub receiving_td: f64,
    #[serde(rename = "Returns TD", default, deserialize_with = "de_null_as_zero")]
    pub returns_td: f64,
    #[serde(rename = "FUM Lost", default, deserialize_with = "de_null_as_zero")]
    pub fumbles_lost: f64,
}

impl PlayerStatRecord {
    /// Record with identity only; every stat is zero.
    pub fn new(name: impl Into<String>, team: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    /// Builder-style games played setter.
    pub fn with_games(mut self, games_played: u32) -> Self {
        self.games_played = games_played;
        self
    }

    /// `total / games_played`, or 0 when no games were played.
    pub fn per_game(&self, total: f64) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            total / f64::from(self.games_played)
        }
    }
}

/// Reject records that carry no player name.
pub fn validate_records(records: &[PlayerStatRecord]) -> Result<()> {
    for (idx, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(KickoffError::invalid_argument(format!(
                "player record #{} is missing a name",
                idx + 1
            )));
        }
    }
    Ok(())
}

/// A stat record with its computed fantasy points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlayerRecord {
    #[serde(flatten)]
    pub stats: PlayerStatRecord,
    #[serde(rename = "Fantasy Points", default, deserialize_with = "de_null_as_zero")]
    pub fantasy_points: f64,
}

/// A player row with a projection and its rank among same-position peers.
///
/// `position_rank` is 0 until ranked, and stays 0 for excluded position groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPlayerRecord {
    #[serde(flatten)]
    pub stats: PlayerStatRecord,
    #[serde(
        rename = "Fantasy Points",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fantasy_points: Option<f64>,
    #[serde(
        rename = "Predicted Points",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub predicted_points: Option<f64>,
    #[serde(rename = "Position Rank", default)]
    pub position_rank: u32,
}

impl ProjectedPlayerRecord {
    /// Wrap a scored record without a projection, e.g. to rank current points.
    pub fn from_scored(scored: &ScoredPlayerRecord) -> Self {
        Self {
            stats: scored.stats.clone(),
            fantasy_points: Some(scored.fantasy_points),
            predicted_points: None,
            position_rank: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.stats.name
    }

    pub fn position(&self) -> &str {
        &self.stats.position
    }
}

/// Anything that can be fed to the projection model: raw or scored rows.
pub trait PlayerRow {
    fn stats(&self) -> &PlayerStatRecord;

    /// Current fantasy points, when the row has been scored.
    fn fantasy_points(&self) -> Option<f64>;
}

impl PlayerRow for PlayerStatRecord {
    fn stats(&self) -> &PlayerStatRecord {
        self
    }

    fn fantasy_points(&self) -> Option<f64> {
        None
    }
}

impl PlayerRow for ScoredPlayerRecord {
    fn stats(&self) -> &PlayerStatRecord {
        &self.stats
    }

    fn fantasy_points(&self) -> Option<f64> {
        Some(self.fantasy_points)
    }
}

impl PlayerRow for ProjectedPlayerRecord {
    fn stats(&self) -> &PlayerStatRecord {
        &self.stats
    }

    fn fantasy_points(&self) -> Option<f64> {
        self.fantasy_points
    }
}

/// One season of scored records, tagged with its year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonBatch {
    pub season: Season,
    pub records: Vec<ScoredPlayerRecord>,
}
