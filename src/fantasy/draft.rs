//! Live-draft recommendations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::{
    ranking::{add_position_ranks, sort_by_predicted},
    types::ProjectedPlayerRecord,
};
use crate::error::{KickoffError, Result};

/// Maximum number of players returned per recommendation.
pub const MAX_RECOMMENDATIONS: usize = 20;

/// Caller-owned snapshot of a draft in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    /// Names already taken, in pick order.
    pub already_drafted: Vec<String>,
    pub num_teams: u32,
    /// 1-indexed slot of the user's team. Does not affect recommendations yet.
    pub draft_position: u32,
}

impl DraftState {
    pub fn new(num_teams: u32, draft_position: u32) -> Self {
        Self {
            already_drafted: Vec::new(),
            num_teams,
            draft_position,
        }
    }

    /// Recommendations for this state.
    pub fn recommend(&self, pool: &[ProjectedPlayerRecord]) -> Result<DraftRecommendation> {
        recommend(
            pool,
            &self.already_drafted,
            self.num_teams,
            self.draft_position,
        )
    }
}

/// Where the draft currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickSlot {
    pub current_pick: u32,
    pub round_number: u32,
    pub pick_in_round: u32,
}

impl PickSlot {
    /// Linear pick arithmetic for `drafted` picks made in a `num_teams` league.
    pub fn after(drafted: usize, num_teams: u32) -> Result<Self> {
        if num_teams == 0 {
            return Err(KickoffError::invalid_argument(
                "number of teams must be at least 1",
            ));
        }
        let drafted = u32::try_from(drafted)
            .map_err(|_| KickoffError::invalid_argument("too many drafted players"))?;

        let current_pick = drafted + 1;
        Ok(Self {
            current_pick,
            round_number: (current_pick - 1) / num_teams + 1,
            pick_in_round: (current_pick - 1) % num_teams + 1,
        })
    }
}

/// Result of a recommendation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRecommendation {
    pub recommendations: Vec<ProjectedPlayerRecord>,
    pub current_pick: u32,
    pub round_number: u32,
    pub pick_in_round: u32,
    pub total_available: usize,
}

impl DraftRecommendation {
    pub fn slot(&self) -> PickSlot {
        PickSlot {
            current_pick: self.current_pick,
            round_number: self.round_number,
            pick_in_round: self.pick_in_round,
        }
    }
}

/// Rank the undrafted players and return the best [`MAX_RECOMMENDATIONS`].
///
/// Drafted names match exactly (case-sensitive). `draft_position` is accepted
/// but does not change filtering or ordering.
pub fn recommend(
    pool: &[ProjectedPlayerRecord],
    already_drafted: &[String],
    num_teams: u32,
    draft_position: u32,
) -> Result<DraftRecommendation> {
    let slot = PickSlot::after(already_drafted.len(), num_teams)?;

    let drafted: HashSet<&str> = already_drafted.iter().map(String::as_str).collect();
    let available: Vec<ProjectedPlayerRecord> = pool
        .iter()
        .filter(|p| !drafted.contains(p.name()))
        .cloned()
        .collect();

    let mut available = add_position_ranks(available);
    sort_by_predicted(&mut available);

    let total_available = available.len();
    available.truncate(MAX_RECOMMENDATIONS);

    debug!(
        current_pick = slot.current_pick,
        round = slot.round_number,
        draft_position,
        total_available,
        "draft recommendations computed"
    );

    Ok(DraftRecommendation {
        recommendations: available,
        current_pick: slot.current_pick,
        round_number: slot.round_number,
        pick_in_round: slot.pick_in_round,
        total_available,
    })
}
