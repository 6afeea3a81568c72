//! Draft session persistence

use super::{models::DraftSession, schema::now_secs, schema::PlayerDatabase};
use anyhow::{bail, Result};
use rusqlite::{params, types::Type, OptionalExtension, Row};

impl PlayerDatabase {
    /// Create a new named session; fails if the name is taken
    pub fn create_session(
        &mut self,
        name: &str,
        num_teams: u32,
        draft_position: u32,
    ) -> Result<DraftSession> {
        if self.get_session(name)?.is_some() {
            bail!("a draft session named {name:?} already exists");
        }

        let now = now_secs()?;
        let session = DraftSession {
            name: name.to_string(),
            num_teams,
            draft_position,
            already_drafted: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.conn.execute(
            "INSERT INTO draft_sessions
             (name, num_teams, draft_position, already_drafted, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                session.name,
                session.num_teams,
                session.draft_position,
                serde_json::to_string(&session.already_drafted)?,
                session.created_at,
                session.updated_at
            ],
        )?;
        Ok(session)
    }

    pub fn get_session(&self, name: &str) -> Result<Option<DraftSession>> {
        let session = self
            .conn
            .query_row(
                "SELECT name, num_teams, draft_position, already_drafted, created_at, updated_at
                 FROM draft_sessions WHERE name = ?",
                params![name],
                row_to_session,
            )
            .optional()?;
        Ok(session)
    }

    /// All sessions, most recently updated first
    pub fn list_sessions(&self) -> Result<Vec<DraftSession>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, num_teams, draft_position, already_drafted, created_at, updated_at
             FROM draft_sessions
             ORDER BY updated_at DESC, name",
        )?;

        let rows = stmt.query_map([], row_to_session)?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row?);
        }
        Ok(sessions)
    }

    /// Append a drafted player to a session.
    ///
    /// Returns `None` if the session does not exist. A player already in the
    /// drafted list is not added twice.
    pub fn record_pick(&mut self, name: &str, player: &str) -> Result<Option<DraftSession>> {
        let Some(mut session) = self.get_session(name)? else {
            return Ok(None);
        };

        if session.already_drafted.iter().any(|p| p == player) {
            return Ok(Some(session));
        }

        session.already_drafted.push(player.to_string());
        session.updated_at = now_secs()?;

        self.conn.execute(
            "UPDATE draft_sessions SET already_drafted = ?, updated_at = ? WHERE name = ?",
            params![
                serde_json::to_string(&session.already_drafted)?,
                session.updated_at,
                session.name
            ],
        )?;
        Ok(Some(session))
    }

    /// Delete a session; returns whether it existed
    pub fn delete_session(&mut self, name: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM draft_sessions WHERE name = ?", params![name])?;
        Ok(deleted > 0)
    }
}

fn row_to_session(row: &Row) -> rusqlite::Result<DraftSession> {
    let drafted_json: String = row.get(3)?;
    let already_drafted = serde_json::from_str(&drafted_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(DraftSession {
        name: row.get(0)?,
        num_teams: row.get(1)?,
        draft_position: row.get(2)?,
        already_drafted,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
