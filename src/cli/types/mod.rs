//! Type-safe wrappers and enums shared by the CLI and the library.

pub mod position;
pub mod time;

pub use position::{Position, UNKNOWN_POSITION};
pub use time::{GamesPlayed, Season};
