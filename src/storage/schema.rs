//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// SQLite-backed season cache and draft session store
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Fresh in-memory database, used by tests and one-shot runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // One row per scored player per cached season, in source order
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS scored_players (
                season INTEGER NOT NULL,
                row_idx INTEGER NOT NULL,
                name TEXT NOT NULL,
                team TEXT NOT NULL,
                position TEXT NOT NULL,
                games_played INTEGER NOT NULL,
                passing_yds REAL NOT NULL,
                passing_td REAL NOT NULL,
                passing_sacks REAL NOT NULL,
                rushing_yds REAL NOT NULL,
                rushing_td REAL NOT NULL,
                receiving_tgt REAL NOT NULL,
                receiving_yds REAL NOT NULL,
                receiving_td REAL NOT NULL,
                returns_td REAL NOT NULL,
                fumbles_lost REAL NOT NULL,
                fantasy_points REAL NOT NULL,
                cached_at INTEGER NOT NULL,
                PRIMARY KEY (season, row_idx)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_scored_players_name
             ON scored_players(name)",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS draft_sessions (
                name TEXT PRIMARY KEY,
                num_teams INTEGER NOT NULL,
                draft_position INTEGER NOT NULL,
                already_drafted TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }
}

/// Seconds since the Unix epoch
pub(crate) fn now_secs() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}
