//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GamesPlayed, Position, Season};

/// Where player stats come from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// JSON stats file (array of records or `{"players": [...]}`); the sample season when omitted.
    #[clap(long, short)]
    pub input: Option<PathBuf>,
}

/// How projections are produced.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Stored season to train on (repeatable): `--history 2022 --history 2023`.
    #[clap(long = "history")]
    pub history: Vec<Season>,

    /// Saved model file; defaults to the model written by `train`, if any.
    #[clap(long)]
    pub model: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum SeasonsCmd {
    /// List cached seasons.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Score a stats source and store it as a season.
    Cache {
        #[clap(long, short)]
        season: Season,

        #[clap(flatten)]
        input: InputArgs,
    },

    /// Remove a cached season.
    Clear {
        #[clap(long, short)]
        season: Season,
    },
}

#[derive(Debug, Subcommand)]
pub enum SessionCmd {
    /// Start a named draft session.
    New {
        name: String,

        /// Number of teams in the league.
        #[clap(long, default_value_t = 12)]
        teams: u32,

        /// Your 1-indexed draft slot.
        #[clap(long, default_value_t = 1)]
        slot: u32,
    },

    /// List draft sessions.
    List {
        #[clap(long)]
        json: bool,
    },

    /// Show a session and its picks.
    Show {
        name: String,

        #[clap(long)]
        json: bool,
    },

    /// Record a drafted player.
    Pick { name: String, player: String },

    /// Delete a session.
    Delete { name: String },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score every player in a stats source.
    Score {
        #[clap(flatten)]
        input: InputArgs,

        /// Season the stats belong to (used with `--store`).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Save the scored players to the season store.
        #[clap(long)]
        store: bool,

        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position")]
        positions: Vec<Position>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Project next-season points with position ranks.
    Predictions {
        #[clap(flatten)]
        input: InputArgs,

        #[clap(flatten)]
        model: ModelArgs,

        /// Games to project.
        #[clap(long, short, default_value_t = GamesPlayed::default())]
        games: GamesPlayed,

        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position")]
        positions: Vec<Position>,

        /// Show only the top N players.
        #[clap(long, short)]
        limit: Option<usize>,

        #[clap(long)]
        json: bool,
    },

    /// Recommend the best available players for the next pick.
    Draft {
        #[clap(flatten)]
        input: InputArgs,

        #[clap(flatten)]
        model: ModelArgs,

        /// Number of teams in the league.
        #[clap(long, default_value_t = 12)]
        teams: u32,

        /// Your 1-indexed draft slot.
        #[clap(long, default_value_t = 1)]
        slot: u32,

        /// Player already drafted (repeatable, exact name).
        #[clap(long = "drafted")]
        drafted: Vec<String>,

        /// Read drafted players, teams and slot from a stored session.
        #[clap(long)]
        session: Option<String>,

        /// Ask the analyst for commentary (needs `OPENAI_API_KEY`).
        #[clap(long)]
        analysis: bool,

        #[clap(long)]
        json: bool,
    },

    /// Train the projection model from stored seasons and save it.
    Train {
        /// Stored season to train on (repeatable).
        #[clap(long = "history", required = true)]
        history: Vec<Season>,

        /// Where to write the model.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Manage the season store.
    Seasons {
        #[clap(subcommand)]
        cmd: SeasonsCmd,
    },

    /// Manage named draft sessions.
    Session {
        #[clap(subcommand)]
        cmd: SessionCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "kickoff-kings",
    version,
    about = "Fantasy football scoring, projections and draft help"
)]
pub struct KickoffKings {
    /// Log level when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}
