//! Optional narrative draft advice.
//!
//! The analyst is purely additive: recommendations are complete without it,
//! and every failure collapses to `None`.

pub mod openai;
pub mod prompts;

pub use openai::OpenAiAnalyst;
pub use prompts::{AnalysisContext, ChatPrompt};

use crate::fantasy::ProjectedPlayerRecord;

/// Free-text advice for a draft in progress.
#[allow(async_fn_in_trait)]
pub trait DraftAnalyst {
    /// Whether calls can produce anything at all.
    fn is_configured(&self) -> bool;

    /// Commentary on the current top recommendations.
    async fn draft_analysis(
        &self,
        recommendations: &[ProjectedPlayerRecord],
        context: &AnalysisContext,
    ) -> Option<String>;

    /// A strategy for the rest of the draft given who is gone already.
    async fn draft_strategy(
        &self,
        already_drafted: &[String],
        num_teams: u32,
        draft_position: u32,
    ) -> Option<String>;
}
