//! Season cache queries

use super::{models::CachedSeason, schema::now_secs, schema::PlayerDatabase};
use crate::{
    cli::types::Season,
    fantasy::{PlayerStatRecord, ScoredPlayerRecord},
};
use anyhow::Result;
use rusqlite::{params, Row};
use tracing::debug;

impl PlayerDatabase {
    /// Replace the cached batch for `season` with `records`
    pub fn cache_season(&mut self, season: Season, records: &[ScoredPlayerRecord]) -> Result<()> {
        let now = now_secs()?;
        let tx = self.conn.transaction()?;

        tx.execute(
            "DELETE FROM scored_players WHERE season = ?",
            params![season.as_u16()],
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO scored_players
                 (season, row_idx, name, team, position, games_played,
                  passing_yds, passing_td, passing_sacks, rushing_yds, rushing_td,
                  receiving_tgt, receiving_yds, receiving_td, returns_td, fumbles_lost,
                  fantasy_points, cached_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;

            for (idx, record) in records.iter().enumerate() {
                let s = &record.stats;
                stmt.execute(params![
                    season.as_u16(),
                    idx as i64,
                    s.name,
                    s.team,
                    s.position,
                    s.games_played,
                    s.passing_yds,
                    s.passing_td,
                    s.passing_sacks,
                    s.rushing_yds,
                    s.rushing_td,
                    s.receiving_tgt,
                    s.receiving_yds,
                    s.receiving_td,
                    s.returns_td,
                    s.fumbles_lost,
                    record.fantasy_points,
                    now
                ])?;
            }
        }

        tx.commit()?;
        debug!(%season, players = records.len(), "season cached");
        Ok(())
    }

    /// Cached batch for `season` in source order, or `None` if not cached
    pub fn load_season(&self, season: Season) -> Result<Option<Vec<ScoredPlayerRecord>>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, team, position, games_played,
                    passing_yds, passing_td, passing_sacks, rushing_yds, rushing_td,
                    receiving_tgt, receiving_yds, receiving_td, returns_td, fumbles_lost,
                    fantasy_points
             FROM scored_players
             WHERE season = ?
             ORDER BY row_idx",
        )?;

        let rows = stmt.query_map(params![season.as_u16()], row_to_scored)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(if records.is_empty() {
            None
        } else {
            Some(records)
        })
    }

    /// All cached seasons, oldest first
    pub fn cached_seasons(&self) -> Result<Vec<CachedSeason>> {
        let mut stmt = self.conn.prepare(
            "SELECT season, COUNT(*), MAX(cached_at)
             FROM scored_players
             GROUP BY season
             ORDER BY season",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(CachedSeason {
                season: Season::new(row.get(0)?),
                players: row.get::<_, i64>(1)? as usize,
                cached_at: row.get(2)?,
            })
        })?;

        let mut seasons = Vec::new();
        for row in rows {
            seasons.push(row?);
        }
        Ok(seasons)
    }

    /// Remove a cached season; returns the number of rows deleted
    pub fn clear_season(&mut self, season: Season) -> Result<usize> {
        let deleted = self.conn.execute(
            "DELETE FROM scored_players WHERE season = ?",
            params![season.as_u16()],
        )?;
        Ok(deleted)
    }
}

fn row_to_scored(row: &Row) -> rusqlite::Result<ScoredPlayerRecord> {
    Ok(ScoredPlayerRecord {
        stats: PlayerStatRecord {
            name: row.get(0)?,
            team: row.get(1)?,
            position: row.get(2)?,
            games_played: row.get(3)?,
            passing_yds: row.get(4)?,
            passing_td: row.get(5)?,
            passing_sacks: row.get(6)?,
            rushing_yds: row.get(7)?,
            rushing_td: row.get(8)?,
            receiving_tgt: row.get(9)?,
            receiving_yds: row.get(10)?,
            receiving_td: row.get(11)?,
            returns_td: row.get(12)?,
            fumbles_lost: row.get(13)?,
        },
        fantasy_points: row.get(14)?,
    })
}
