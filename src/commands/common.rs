//! Common utilities and helper functions shared across commands.
//!
//! Loading the scored pool, rebuilding the projection model from stored
//! history, and output formatting live here so each command stays small.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::{
    cli::types::{GamesPlayed, Position, Season},
    config::Config,
    core::cache::{PoolCacheKey, UnifiedCache},
    fantasy::{
        source::source_for, DataSource, PlayerRow, ProjectedPlayerRecord, ProjectionModel,
        ScoredPlayerRecord,
    },
    storage::{PlayerDatabase, SeasonStore},
    KickoffError, Result,
};

/// Scored pools by source identity and version.
pub type PoolCache = UnifiedCache<PoolCacheKey, Vec<ScoredPlayerRecord>>;

/// Scored pools kept in memory per process.
pub const POOL_CACHE_CAPACITY: usize = 8;

/// Resources shared by every command.
///
/// The store is optional: when the database cannot be opened, commands run
/// in memory only.
pub struct CommandContext {
    pub config: Config,
    pub pool_cache: PoolCache,
    pub store: Option<PlayerDatabase>,
}

impl CommandContext {
    pub fn new(config: Config) -> Self {
        let store = match PlayerDatabase::open(&config.db_path) {
            Ok(db) => Some(db),
            Err(e) => {
                warn!(path = %config.db_path.display(), error = %e, "season store unavailable; continuing without it");
                None
            }
        };
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Option<PlayerDatabase>) -> Self {
        let pool_cache = PoolCache::with_disk(POOL_CACHE_CAPACITY, config.cache_dir.clone());
        Self {
            config,
            pool_cache,
            store,
        }
    }

    /// The store, or an error for commands that cannot work without it.
    pub fn require_store(&mut self) -> Result<&mut PlayerDatabase> {
        let path = self.config.db_path.display().to_string();
        self.store.as_mut().ok_or_else(|| KickoffError::Cache {
            message: format!("database at {path} could not be opened"),
        })
    }

    pub fn season_store(&self) -> Option<&dyn SeasonStore> {
        self.store.as_ref().map(|db| db as &dyn SeasonStore)
    }

    /// Scored pool for an optional `--input` file (sample data otherwise).
    pub fn scored_pool(&self, input: Option<&Path>) -> Result<Vec<ScoredPlayerRecord>> {
        load_scored_pool(source_for(input).as_ref(), &self.pool_cache)
    }
}

/// Fetch and score a source's players, reusing a cached scoring of the same
/// source version when one exists.
pub fn load_scored_pool(source: &dyn DataSource, cache: &PoolCache) -> Result<Vec<ScoredPlayerRecord>> {
    let key = PoolCacheKey {
        source_id: source.id(),
        version: source.version(),
    };

    if let Some(pool) = cache.get(&key) {
        debug!(source = %key.source_id, version = key.version, "scored pool cache hit");
        return Ok(pool);
    }

    let records = source.fetch()?;
    let pool = crate::fantasy::score_all(&records);
    info!(source = %key.source_id, players = pool.len(), "scored player pool");
    cache.put(key, pool.clone());
    Ok(pool)
}

/// Build a trained model from stored seasons.
///
/// Each requested year is loaded once, oldest first. Seasons that are
/// missing or unreadable are skipped with a warning; with no store at all
/// the model stays untrained.
pub fn load_history(store: Option<&dyn SeasonStore>, seasons: &[Season]) -> ProjectionModel {
    let mut model = ProjectionModel::new();

    let mut seasons = seasons.to_vec();
    seasons.sort();
    seasons.dedup();

    let Some(store) = store else {
        if !seasons.is_empty() {
            warn!("no season store available; projecting without history");
        }
        return model;
    };

    for season in seasons {
        match store.load_season(season) {
            Ok(Some(records)) => model.add_season(records, season),
            Ok(None) => warn!(%season, "season not cached; skipping"),
            Err(e) => warn!(%season, error = %e, "failed to read cached season; skipping"),
        }
    }

    model.train();
    model
}

/// Projection model for a command.
///
/// `--history` seasons win; otherwise an explicit `--model` file must load,
/// and the default saved model is used when present.
pub fn resolve_model(
    ctx: &CommandContext,
    history: &[Season],
    model_path: Option<&Path>,
) -> Result<ProjectionModel> {
    if !history.is_empty() {
        return Ok(load_history(ctx.season_store(), history));
    }

    if let Some(path) = model_path {
        return ProjectionModel::load(path)?.ok_or_else(|| {
            KickoffError::invalid_argument(format!("no saved model at {}", path.display()))
        });
    }

    let default_path = ctx.config.model_path();
    match ProjectionModel::load(&default_path) {
        Ok(Some(model)) => {
            debug!(path = %default_path.display(), "using saved projection model");
            Ok(model)
        }
        Ok(None) => Ok(ProjectionModel::new()),
        Err(e) => {
            warn!(path = %default_path.display(), error = %e, "ignoring unreadable saved model");
            Ok(ProjectionModel::new())
        }
    }
}

/// Project a scored pool for `games` games.
pub fn project_pool(
    model: &ProjectionModel,
    pool: &[ScoredPlayerRecord],
    games: GamesPlayed,
) -> Vec<ProjectedPlayerRecord> {
    model.predict_all(pool, games)
}

/// Keep rows whose position matches any filter; an empty filter keeps all.
pub fn filter_positions<R: PlayerRow>(rows: Vec<R>, positions: &[Position]) -> Vec<R> {
    if positions.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|r| positions.iter().any(|p| p.matches(&r.stats().position)))
        .collect()
}

/// `{ "players": [...], "count": n }`
#[derive(Debug, Serialize)]
pub struct PlayerListing<'a, T: Serialize> {
    pub players: &'a [T],
    pub count: usize,
}

impl<'a, T: Serialize> PlayerListing<'a, T> {
    pub fn new(players: &'a [T]) -> Self {
        Self {
            players,
            count: players.len(),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_points(points: Option<f64>) -> String {
    points
        .map(|p| format!("{p:.2}"))
        .unwrap_or_else(|| "-".to_string())
}

/// Text table of projected rows.
pub fn print_projected_table(rows: &[ProjectedPlayerRecord]) {
    println!(
        "{:<4} {:<26} {:<4} {:<5} {:>4} {:>9} {:>9}",
        "#", "Name", "Pos", "Team", "Rank", "Current", "Projected"
    );
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:<4} {:<26} {:<4} {:<5} {:>4} {:>9} {:>9}",
            i + 1,
            row.name(),
            row.position(),
            row.stats.team,
            row.position_rank,
            format_points(row.fantasy_points),
            format_points(row.predicted_points),
        );
    }
}
