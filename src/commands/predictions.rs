//! Next-season projections with position ranks.

use std::path::PathBuf;

use super::common::{
    filter_positions, print_json, print_projected_table, project_pool, resolve_model,
    CommandContext, PlayerListing,
};
use crate::{
    cli::types::{GamesPlayed, Position, Season},
    fantasy::{add_position_ranks, sort_by_predicted, ProjectedPlayerRecord},
    Result,
};

#[derive(Debug, Clone, Default)]
pub struct PredictionsParams {
    pub input: Option<PathBuf>,
    pub history: Vec<Season>,
    pub model: Option<PathBuf>,
    pub games: GamesPlayed,
    pub positions: Vec<Position>,
    pub limit: Option<usize>,
    pub as_json: bool,
}

/// Project, rank by position, then sort by predicted points.
///
/// Ranks are computed over the whole pool before any position filter or
/// limit is applied.
pub fn build_predictions(
    ctx: &CommandContext,
    params: &PredictionsParams,
) -> Result<Vec<ProjectedPlayerRecord>> {
    let pool = ctx.scored_pool(params.input.as_deref())?;
    let model = resolve_model(ctx, &params.history, params.model.as_deref())?;

    let mut projected = add_position_ranks(project_pool(&model, &pool, params.games));
    sort_by_predicted(&mut projected);

    let mut projected = filter_positions(projected, &params.positions);
    if let Some(limit) = params.limit {
        projected.truncate(limit);
    }
    Ok(projected)
}

pub async fn handle_predictions(ctx: &mut CommandContext, params: PredictionsParams) -> Result<()> {
    let rows = build_predictions(ctx, &params)?;

    if params.as_json {
        return print_json(&PlayerListing::new(&rows));
    }

    print_projected_table(&rows);
    println!("{} players, {} games", rows.len(), params.games);
    Ok(())
}
