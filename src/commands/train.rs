//! Train the projection model from stored seasons and save it.

use std::path::PathBuf;

use super::common::{load_history, CommandContext};
use crate::{cli::types::Season, fantasy::ProjectionModel, KickoffError, Result};

#[derive(Debug, Clone, Default)]
pub struct TrainParams {
    pub history: Vec<Season>,
    /// Defaults to the model file in the cache directory.
    pub output: Option<PathBuf>,
}

/// Train from stored seasons and write the model; returns it with its path.
pub fn train_and_save(ctx: &CommandContext, params: &TrainParams) -> Result<(ProjectionModel, PathBuf)> {
    if params.history.is_empty() {
        return Err(KickoffError::invalid_argument(
            "at least one --history season is required",
        ));
    }

    let model = load_history(ctx.season_store(), &params.history);
    if !model.is_trained() {
        return Err(KickoffError::invalid_argument(
            "none of the requested seasons are in the season store; run `seasons cache` first",
        ));
    }

    let path = params
        .output
        .clone()
        .unwrap_or_else(|| ctx.config.model_path());
    model.save(&path)?;
    Ok((model, path))
}

pub async fn handle_train(ctx: &mut CommandContext, params: TrainParams) -> Result<()> {
    let (model, path) = train_and_save(ctx, &params)?;

    let seasons: Vec<String> = model.seasons().iter().map(Season::to_string).collect();
    let players = model.snapshot().map(|m| m.players().len()).unwrap_or(0);
    println!("✓ Trained on seasons {} ({} players)", seasons.join(", "), players);
    println!("Model saved to {}", path.display());
    Ok(())
}
