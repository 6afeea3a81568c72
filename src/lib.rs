//! Kickoff Kings: fantasy football scoring, projections and draft help.
//!
//! The library is a one-way pipeline over explicit inputs:
//!
//! - **Scoring**: raw season stats to PPR fantasy points ([`fantasy::scoring`])
//! - **Projection**: per-game averages and trend across stored seasons ([`fantasy::projection`])
//! - **Ranking**: position ranks and display ordering ([`fantasy::ranking`])
//! - **Draft help**: best available players and pick arithmetic ([`fantasy::draft`])
//!
//! Around it sit optional collaborators: a SQLite season store and draft
//! sessions ([`storage`]), a scored-pool cache ([`core::cache`]) and a
//! chat-completions analyst ([`analysis`]). Everything works without them.
//!
//! ## Quick Start
//!
//! ```rust
//! use kickoff_kings::{
//!     fantasy::{recommend, sample::sample_players, score_all, ProjectionModel},
//!     GamesPlayed,
//! };
//!
//! # fn example() -> kickoff_kings::Result<()> {
//! let scored = score_all(&sample_players());
//! let projected = ProjectionModel::new().predict_all(&scored, GamesPlayed::default());
//!
//! let picks = recommend(&projected, &["Tyreek Hill".to_string()], 12, 1)?;
//! assert_eq!(picks.current_pick, 2);
//! assert_eq!(picks.recommendations.len(), 20);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export KICKOFF_KINGS_CACHE_DIR=~/.cache/kickoff-kings
//! export OPENAI_API_KEY=sk-...   # enables `draft --analysis`
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod fantasy;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GamesPlayed, Position, Season};
pub use error::{KickoffError, Result};
pub use fantasy::{
    DraftRecommendation, PlayerStatRecord, ProjectedPlayerRecord, ProjectionModel,
    ScoredPlayerRecord,
};
