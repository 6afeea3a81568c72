//! Command implementations for the Kickoff Kings CLI

pub mod common;
pub mod draft;
pub mod predictions;
pub mod score;
pub mod seasons;
pub mod session;
pub mod train;

#[cfg(test)]
mod tests;

pub use common::CommandContext;
