//! Data models for the storage layer

use crate::{cli::types::Season, fantasy::DraftState};
use serde::{Deserialize, Serialize};

/// Summary of one cached season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSeason {
    pub season: Season,
    pub players: usize,
    pub cached_at: i64,
}

/// A saved, named draft in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSession {
    pub name: String,
    pub num_teams: u32,
    pub draft_position: u32,
    /// Drafted player names in pick order
    pub already_drafted: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl DraftSession {
    /// Snapshot of this session for the draft assistant
    pub fn state(&self) -> DraftState {
        DraftState {
            already_drafted: self.already_drafted.clone(),
            num_teams: self.num_teams,
            draft_position: self.draft_position,
        }
    }
}
