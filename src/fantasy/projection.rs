//! Next-season projections from accumulated season history.
//!
//! The model is append-only: seasons are added with [`ProjectionModel::add_season`]
//! and folded into per-player per-game averages by [`ProjectionModel::train`].
//! Training publishes an immutable [`TrainedModel`] snapshot behind an `Arc`,
//! so readers holding a snapshot never see a half-built aggregate.

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, sync::Arc};
use tracing::{debug, info};

use super::{
    scoring::round2,
    types::{PlayerRow, ProjectedPlayerRecord, ScoredPlayerRecord, SeasonBatch},
};
use crate::{
    cli::types::{GamesPlayed, Position, Season},
    core::cache::{try_read_to_string, write_string},
    Result,
};

#[cfg(test)]
mod tests;

/// Share of the season-over-season points trend added to the per-game average.
pub const TREND_WEIGHT: f64 = 0.1;

/// Per-game averages and trend for one player across all ingested seasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAverages {
    pub name: String,
    pub position: String,
    pub team: String,
    pub seasons: usize,
    pub games: u64,
    pub passing_yds_per_game: f64,
    pub passing_td_per_game: f64,
    pub rushing_yds_per_game: f64,
    pub rushing_td_per_game: f64,
    pub receiving_yds_per_game: f64,
    pub receiving_td_per_game: f64,
    pub receiving_tgt_per_game: f64,
    pub fantasy_points_per_game: f64,
    /// Latest season points minus earliest season points; 0 with one season.
    pub trend: f64,
}

/// Running sums for one player while training.
#[derive(Default)]
struct Totals {
    position: String,
    team: String,
    seasons: usize,
    games: u64,
    passing_yds: f64,
    passing_td: f64,
    rushing_yds: f64,
    rushing_td: f64,
    receiving_yds: f64,
    receiving_td: f64,
    receiving_tgt: f64,
    fantasy_points: f64,
    earliest_points: f64,
    latest_points: f64,
}

impl Totals {
    fn add(&mut self, record: &ScoredPlayerRecord) {
        let s = &record.stats;
        if self.seasons == 0 {
            self.position = s.position.clone();
            self.team = s.team.clone();
            self.earliest_points = record.fantasy_points;
        }
        self.seasons += 1;
        self.games = self.games.saturating_add(u64::from(s.games_played));
        self.passing_yds += s.passing_yds;
        self.passing_td += s.passing_td;
        self.rushing_yds += s.rushing_yds;
        self.rushing_td += s.rushing_td;
        self.receiving_yds += s.receiving_yds;
        self.receiving_td += s.receiving_td;
        self.receiving_tgt += s.receiving_tgt;
        self.fantasy_points += record.fantasy_points;
        self.latest_points = record.fantasy_points;
    }

    fn into_averages(self, name: String) -> PlayerAverages {
        let games = self.games;
        let per_game = |total: f64| {
            if games == 0 {
                0.0
            } else {
                total / games as f64
            }
        };

        PlayerAverages {
            passing_yds_per_game: per_game(self.passing_yds),
            passing_td_per_game: per_game(self.passing_td),
            rushing_yds_per_game: per_game(self.rushing_yds),
            rushing_td_per_game: per_game(self.rushing_td),
            receiving_yds_per_game: per_game(self.receiving_yds),
            receiving_td_per_game: per_game(self.receiving_td),
            receiving_tgt_per_game: per_game(self.receiving_tgt),
            fantasy_points_per_game: per_game(self.fantasy_points),
            trend: if self.seasons > 1 {
                self.latest_points - self.earliest_points
            } else {
                0.0
            },
            name,
            position: self.position,
            team: self.team,
            seasons: self.seasons,
            games,
        }
    }
}

/// Immutable result of a training pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    players: Vec<PlayerAverages>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TrainedModel {
    fn from_players(players: Vec<PlayerAverages>) -> Self {
        let index = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self { players, index }
    }

    fn reindex(self) -> Self {
        Self::from_players(self.players)
    }

    /// Averages for every trained player, in first-seen order.
    pub fn players(&self) -> &[PlayerAverages] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&PlayerAverages> {
        self.index.get(name).map(|&i| &self.players[i])
    }

    /// Projected points for `name`, falling back to the position-average
    /// heuristic when the player has no history.
    pub fn predict(&self, name: &str, games: GamesPlayed) -> f64 {
        match self.player(name) {
            Some(avg) => {
                let per_game = avg.fantasy_points_per_game + TREND_WEIGHT * avg.trend;
                round2(per_game * games.as_f64()).max(0.0)
            }
            None => position_average_projection(name, games),
        }
    }
}

/// Fallback projection for players without history.
///
/// Position is not inferred from the name; every unknown player gets the
/// quarterback season average scaled to `games`.
pub fn position_average_projection(name: &str, games: GamesPlayed) -> f64 {
    debug!(player = name, "no history, using position-average projection");
    Position::QB.season_average() * (games.as_f64() / GamesPlayed::FULL_SEASON.as_f64())
}

/// Whether the model has aggregated history to project from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Untrained,
    Trained,
}

/// Accumulates season history and projects next-season points.
#[derive(Debug, Clone, Default)]
pub struct ProjectionModel {
    history: Vec<SeasonBatch>,
    trained: Option<Arc<TrainedModel>>,
}

/// On-disk form of a model: history plus the last trained aggregate.
#[derive(Serialize, Deserialize)]
struct SavedModel {
    history: Vec<SeasonBatch>,
    trained: Option<TrainedModel>,
}

impl ProjectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one season of scored records. Does not retrain.
    pub fn add_season(&mut self, records: Vec<ScoredPlayerRecord>, season: Season) {
        debug!(%season, players = records.len(), "adding season to projection history");
        self.history.push(SeasonBatch { season, records });
    }

    /// Aggregate all ingested seasons into per-player averages.
    ///
    /// Batches are folded in season order whatever order they were added in,
    /// so the trend always runs from the earliest year to the latest.
    /// With no seasons the model stays [`ModelState::Untrained`].
    pub fn train(&mut self) {
        if self.history.is_empty() {
            self.trained = None;
            return;
        }

        let mut batches: Vec<&SeasonBatch> = self.history.iter().collect();
        batches.sort_by_key(|b| b.season);

        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Totals> = HashMap::new();

        for batch in batches {
            for record in &batch.records {
                let name = &record.stats.name;
                if !totals.contains_key(name) {
                    order.push(name.clone());
                }
                totals.entry(name.clone()).or_default().add(record);
            }
        }

        let players: Vec<PlayerAverages> = order
            .into_iter()
            .filter_map(|name| totals.remove(&name).map(|t| t.into_averages(name)))
            .collect();

        info!(
            seasons = self.history.len(),
            players = players.len(),
            "projection model trained"
        );
        self.trained = Some(Arc::new(TrainedModel::from_players(players)));
    }

    pub fn state(&self) -> ModelState {
        if self.trained.is_some() {
            ModelState::Trained
        } else {
            ModelState::Untrained
        }
    }

    pub fn is_trained(&self) -> bool {
        self.state() == ModelState::Trained
    }

    /// Season tags in ingestion order.
    pub fn seasons(&self) -> Vec<Season> {
        self.history.iter().map(|b| b.season).collect()
    }

    /// Current trained snapshot, if any. Cheap to clone and share.
    pub fn snapshot(&self) -> Option<Arc<TrainedModel>> {
        self.trained.clone()
    }

    /// Drop all history and return to the untrained state.
    pub fn reset(&mut self) {
        self.history.clear();
        self.trained = None;
    }

    /// Projected points for one player over `games` games.
    pub fn predict(&self, name: &str, games: GamesPlayed) -> f64 {
        match &self.trained {
            Some(model) => model.predict(name, games),
            None => position_average_projection(name, games),
        }
    }

    /// Project every row in `pool`.
    ///
    /// Untrained models echo each row's current fantasy points (0 when the
    /// row is unscored) as its prediction.
    pub fn predict_all<R: PlayerRow>(
        &self,
        pool: &[R],
        games: GamesPlayed,
    ) -> Vec<ProjectedPlayerRecord> {
        pool.iter()
            .map(|row| {
                let predicted = match &self.trained {
                    Some(model) => model.predict(&row.stats().name, games),
                    None => row.fantasy_points().unwrap_or(0.0),
                };
                ProjectedPlayerRecord {
                    stats: row.stats().clone(),
                    fantasy_points: row.fantasy_points(),
                    predicted_points: Some(predicted),
                    position_rank: 0,
                }
            })
            .collect()
    }

    /// Write history and trained aggregate as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let saved = SavedModel {
            history: self.history.clone(),
            trained: self.trained.as_deref().cloned(),
        };
        write_string(path, &serde_json::to_string_pretty(&saved)?)?;
        info!(path = %path.display(), "projection model saved");
        Ok(())
    }

    /// Load a model written by [`ProjectionModel::save`]. `Ok(None)` when the file is absent.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let Some(contents) = try_read_to_string(path) else {
            return Ok(None);
        };
        let saved: SavedModel = serde_json::from_str(&contents)?;
        Ok(Some(Self {
            history: saved.history,
            trained: saved.trained.map(|t| Arc::new(t.reindex())),
        }))
    }
}
