//! Storage layer for Kickoff Kings
//!
//! SQLite persistence, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Season cache operations
//! - `sessions`: Draft session operations

pub mod models;
pub mod queries;
pub mod schema;
pub mod sessions;

#[cfg(test)]
mod tests;

use crate::{cli::types::Season, fantasy::ScoredPlayerRecord};

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::PlayerDatabase;

/// Persistence collaborator for scored season batches.
///
/// Callers treat every failure as "not cached" and carry on in memory.
pub trait SeasonStore {
    fn store_season(&mut self, season: Season, records: &[ScoredPlayerRecord]) -> anyhow::Result<()>;

    fn load_season(&self, season: Season) -> anyhow::Result<Option<Vec<ScoredPlayerRecord>>>;
}

impl SeasonStore for PlayerDatabase {
    fn store_season(&mut self, season: Season, records: &[ScoredPlayerRecord]) -> anyhow::Result<()> {
        self.cache_season(season, records)
    }

    fn load_season(&self, season: Season) -> anyhow::Result<Option<Vec<ScoredPlayerRecord>>> {
        PlayerDatabase::load_season(self, season)
    }
}
