//! Named draft sessions.

use super::common::{print_json, CommandContext};
use crate::{storage::DraftSession, KickoffError, Result};

#[derive(Debug, Clone)]
pub enum SessionAction {
    New { name: String, teams: u32, slot: u32 },
    List { as_json: bool },
    Show { name: String, as_json: bool },
    Pick { name: String, player: String },
    Delete { name: String },
}

/// Create a session; the team count is validated the same way a draft is.
pub fn new_session(ctx: &mut CommandContext, name: &str, teams: u32, slot: u32) -> Result<DraftSession> {
    if teams == 0 {
        return Err(KickoffError::invalid_argument(
            "number of teams must be at least 1",
        ));
    }
    Ok(ctx.require_store()?.create_session(name, teams, slot)?)
}

pub fn show_session(ctx: &mut CommandContext, name: &str) -> Result<DraftSession> {
    ctx.require_store()?
        .get_session(name)?
        .ok_or_else(|| KickoffError::SessionNotFound {
            name: name.to_string(),
        })
}

pub fn record_pick(ctx: &mut CommandContext, name: &str, player: &str) -> Result<DraftSession> {
    ctx.require_store()?
        .record_pick(name, player)?
        .ok_or_else(|| KickoffError::SessionNotFound {
            name: name.to_string(),
        })
}

pub fn delete_session(ctx: &mut CommandContext, name: &str) -> Result<()> {
    if ctx.require_store()?.delete_session(name)? {
        Ok(())
    } else {
        Err(KickoffError::SessionNotFound {
            name: name.to_string(),
        })
    }
}

fn print_session(session: &DraftSession) {
    println!(
        "{}: {} teams, slot {}, {} drafted",
        session.name,
        session.num_teams,
        session.draft_position,
        session.already_drafted.len()
    );
}

pub async fn handle_session(ctx: &mut CommandContext, action: SessionAction) -> Result<()> {
    match action {
        SessionAction::New { name, teams, slot } => {
            let session = new_session(ctx, &name, teams, slot)?;
            print!("✓ Created ");
            print_session(&session);
        }
        SessionAction::List { as_json } => {
            let sessions = ctx.require_store()?.list_sessions()?;
            if as_json {
                return print_json(&sessions);
            }
            if sessions.is_empty() {
                println!("No draft sessions");
            }
            sessions.iter().for_each(print_session);
        }
        SessionAction::Show { name, as_json } => {
            let session = show_session(ctx, &name)?;
            if as_json {
                return print_json(&session);
            }
            print_session(&session);
            for (i, player) in session.already_drafted.iter().enumerate() {
                println!("{:>3}. {}", i + 1, player);
            }
        }
        SessionAction::Pick { name, player } => {
            let session = record_pick(ctx, &name, &player)?;
            println!(
                "✓ Pick {} recorded: {}",
                session.already_drafted.len(),
                player
            );
        }
        SessionAction::Delete { name } => {
            delete_session(ctx, &name)?;
            println!("✓ Deleted session {name}");
        }
    }
    Ok(())
}
