//! Season store maintenance.

use std::path::PathBuf;

use super::common::{print_json, CommandContext};
use crate::{cli::types::Season, storage::CachedSeason, Result};

#[derive(Debug, Clone)]
pub enum SeasonsAction {
    List { as_json: bool },
    Cache { season: Season, input: Option<PathBuf> },
    Clear { season: Season },
}

pub fn list_seasons(ctx: &mut CommandContext) -> Result<Vec<CachedSeason>> {
    Ok(ctx.require_store()?.cached_seasons()?)
}

/// Score the input and store it under `season`; returns the player count.
pub fn cache_season(ctx: &mut CommandContext, season: Season, input: Option<PathBuf>) -> Result<usize> {
    let pool = ctx.scored_pool(input.as_deref())?;
    ctx.require_store()?.cache_season(season, &pool)?;
    Ok(pool.len())
}

pub fn clear_season(ctx: &mut CommandContext, season: Season) -> Result<usize> {
    Ok(ctx.require_store()?.clear_season(season)?)
}

pub async fn handle_seasons(ctx: &mut CommandContext, action: SeasonsAction) -> Result<()> {
    match action {
        SeasonsAction::List { as_json } => {
            let seasons = list_seasons(ctx)?;
            if as_json {
                return print_json(&seasons);
            }
            if seasons.is_empty() {
                println!("No seasons cached");
            }
            for s in &seasons {
                println!("{}  {:>4} players  cached at {}", s.season, s.players, s.cached_at);
            }
        }
        SeasonsAction::Cache { season, input } => {
            let count = cache_season(ctx, season, input)?;
            println!("✓ Cached {count} players for season {season}");
        }
        SeasonsAction::Clear { season } => {
            let removed = clear_season(ctx, season)?;
            println!("✓ Removed {removed} players for season {season}");
        }
    }
    Ok(())
}
