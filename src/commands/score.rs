//! Score a season's raw stats and optionally store the result.

use std::path::PathBuf;
use tracing::warn;

use super::common::{filter_positions, format_points, print_json, CommandContext, PlayerListing};
use crate::{
    cli::types::{Position, Season},
    fantasy::ScoredPlayerRecord,
    storage::SeasonStore,
    Result,
};

#[derive(Debug, Clone, Default)]
pub struct ScoreParams {
    pub input: Option<PathBuf>,
    pub season: Season,
    /// Save the scored batch to the season store under `season`.
    pub store: bool,
    pub positions: Vec<Position>,
    pub as_json: bool,
}

/// Scored players in source order, filtered by position.
///
/// A failed store write is logged; the scored pool is still returned.
pub fn score_players(ctx: &mut CommandContext, params: &ScoreParams) -> Result<Vec<ScoredPlayerRecord>> {
    let pool = ctx.scored_pool(params.input.as_deref())?;

    if params.store {
        match ctx.store.as_mut() {
            Some(db) => {
                if let Err(e) = db.store_season(params.season, &pool) {
                    warn!(season = %params.season, error = %e, "failed to store scored season");
                }
            }
            None => warn!(season = %params.season, "no season store available; not storing"),
        }
    }

    Ok(filter_positions(pool, &params.positions))
}

pub async fn handle_score(ctx: &mut CommandContext, params: ScoreParams) -> Result<()> {
    let players = score_players(ctx, &params)?;

    if params.as_json {
        return print_json(&PlayerListing::new(&players));
    }

    println!(
        "{:<26} {:<4} {:<5} {:>3} {:>9}",
        "Name", "Pos", "Team", "GP", "Points"
    );
    for p in &players {
        println!(
            "{:<26} {:<4} {:<5} {:>3} {:>9}",
            p.stats.name,
            p.stats.position,
            p.stats.team,
            p.stats.games_played,
            format_points(Some(p.fantasy_points))
        );
    }
    println!("{} players", players.len());
    if params.store && ctx.store.is_some() {
        println!("✓ Season {} stored", params.season);
    }
    Ok(())
}
