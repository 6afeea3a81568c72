//! Live-draft recommendations with optional narrative analysis.

use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use super::common::{print_json, print_projected_table, project_pool, resolve_model, CommandContext};
use crate::{
    analysis::{AnalysisContext, DraftAnalyst},
    cli::types::{GamesPlayed, Season},
    config::OPENAI_API_KEY_ENV_VAR,
    fantasy::{DraftRecommendation, DraftState},
    KickoffError, Result,
};

pub const DEFAULT_TEAMS: u32 = 12;

/// What the caller is entitled to for this draft call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub ai_analysis: bool,
}

#[derive(Debug, Clone)]
pub struct DraftParams {
    pub input: Option<PathBuf>,
    pub history: Vec<Season>,
    pub model: Option<PathBuf>,
    pub teams: u32,
    pub slot: u32,
    /// Extra drafted names for this call only.
    pub drafted: Vec<String>,
    /// Stored session supplying drafted names, team count and slot.
    pub session: Option<String>,
    pub as_json: bool,
}

impl Default for DraftParams {
    fn default() -> Self {
        Self {
            input: None,
            history: Vec::new(),
            model: None,
            teams: DEFAULT_TEAMS,
            slot: 1,
            drafted: Vec::new(),
            session: None,
            as_json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftReport {
    #[serde(flatten)]
    pub recommendation: DraftRecommendation,
    pub num_teams: u32,
    pub draft_position: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

/// Draft state from the stored session (if named) plus this call's extra picks.
pub fn resolve_state(ctx: &CommandContext, params: &DraftParams) -> Result<DraftState> {
    let mut state = match &params.session {
        Some(name) => {
            let db = ctx.store.as_ref().ok_or_else(|| KickoffError::SessionNotFound {
                name: name.clone(),
            })?;
            db.get_session(name)?
                .ok_or_else(|| KickoffError::SessionNotFound { name: name.clone() })?
                .state()
        }
        None => DraftState::new(params.teams, params.slot),
    };
    state.already_drafted.extend(params.drafted.iter().cloned());
    Ok(state)
}

pub async fn build_draft_report<A: DraftAnalyst>(
    ctx: &CommandContext,
    params: &DraftParams,
    capabilities: Capabilities,
    analyst: &A,
) -> Result<DraftReport> {
    let state = resolve_state(ctx, params)?;
    let pool = ctx.scored_pool(params.input.as_deref())?;
    let model = resolve_model(ctx, &params.history, params.model.as_deref())?;
    let projected = project_pool(&model, &pool, GamesPlayed::default());

    let recommendation = state.recommend(&projected)?;
    info!(
        current_pick = recommendation.current_pick,
        available = recommendation.total_available,
        "draft recommendations ready"
    );

    let (analysis, strategy) = if !capabilities.ai_analysis {
        (None, None)
    } else if !analyst.is_configured() {
        warn!("analysis requested but {OPENAI_API_KEY_ENV_VAR} is not set");
        (None, None)
    } else {
        let context = AnalysisContext::from_recommendation(&recommendation, state.num_teams);
        let analysis = analyst
            .draft_analysis(&recommendation.recommendations, &context)
            .await;
        let strategy = analyst
            .draft_strategy(&state.already_drafted, state.num_teams, state.draft_position)
            .await;
        (analysis, strategy)
    };

    Ok(DraftReport {
        recommendation,
        num_teams: state.num_teams,
        draft_position: state.draft_position,
        analysis,
        strategy,
    })
}

pub async fn handle_draft<A: DraftAnalyst>(
    ctx: &mut CommandContext,
    params: DraftParams,
    capabilities: Capabilities,
    analyst: &A,
) -> Result<()> {
    let report = build_draft_report(ctx, &params, capabilities, analyst).await?;

    if params.as_json {
        return print_json(&report);
    }

    let rec = &report.recommendation;
    println!(
        "Pick {} (round {}, pick {} of {}) - {} players available",
        rec.current_pick, rec.round_number, rec.pick_in_round, report.num_teams, rec.total_available
    );
    print_projected_table(&rec.recommendations);

    if let Some(analysis) = &report.analysis {
        println!("\nAnalysis:\n{analysis}");
    }
    if let Some(strategy) = &report.strategy {
        println!("\nStrategy:\n{strategy}");
    }
    Ok(())
}
