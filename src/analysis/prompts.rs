//! Chat prompts for draft analysis.

use serde::Serialize;

use crate::fantasy::{DraftRecommendation, ProjectedPlayerRecord};

/// Players listed in the analysis prompt.
pub const PROMPT_PLAYERS: usize = 10;

const ANALYSIS_SYSTEM: &str =
    "You are a helpful fantasy football draft expert. Provide concise, actionable advice.";
const STRATEGY_SYSTEM: &str = "You are a fantasy football draft strategy expert.";

/// Draft situation shown to the analyst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisContext {
    pub round_number: u32,
    pub pick_in_round: u32,
    pub num_teams: u32,
    pub drafted_count: usize,
}

impl AnalysisContext {
    pub fn from_recommendation(rec: &DraftRecommendation, num_teams: u32) -> Self {
        Self {
            round_number: rec.round_number,
            pick_in_round: rec.pick_in_round,
            num_teams,
            drafted_count: (rec.current_pick as usize).saturating_sub(1),
        }
    }
}

/// A single system + user exchange with its sampling limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: &'static str,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

fn player_lines(recommendations: &[ProjectedPlayerRecord]) -> String {
    recommendations
        .iter()
        .take(PROMPT_PLAYERS)
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}. {} ({}) - {:.1} pts",
                i + 1,
                p.name(),
                p.position(),
                p.predicted_points.unwrap_or(0.0)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn draft_analysis_prompt(
    recommendations: &[ProjectedPlayerRecord],
    context: &AnalysisContext,
) -> ChatPrompt {
    let user = format!(
        "You are a fantasy football expert. Analyze these draft recommendations and provide strategic advice.

Draft Context:
- Round: {}
- Pick in Round: {}
- Total Teams: {}
- Already Drafted: {} players

Top Recommendations:
{}

Provide:
1. Which player(s) to target and why
2. Position strategy for this round
3. Any sleepers or value picks
4. What positions to avoid right now

Keep the analysis concise (2-3 paragraphs) and actionable.",
        context.round_number,
        context.pick_in_round,
        context.num_teams,
        context.drafted_count,
        player_lines(recommendations)
    );

    ChatPrompt {
        system: ANALYSIS_SYSTEM,
        user,
        max_tokens: 400,
        temperature: 0.7,
    }
}

pub fn draft_strategy_prompt(
    already_drafted: &[String],
    num_teams: u32,
    draft_position: u32,
) -> ChatPrompt {
    let drafted = if already_drafted.is_empty() {
        "None".to_string()
    } else {
        already_drafted.join(", ")
    };

    let user = format!(
        "Based on this fantasy football draft situation, provide a draft strategy:

- League Size: {num_teams} teams
- Your Draft Position: {draft_position}
- Already Drafted Players: {drafted}

Provide a concise strategy (2-3 paragraphs) covering:
1. What positions to target next
2. Position depth considerations
3. Value opportunities

Keep it actionable and specific to this draft situation."
    );

    ChatPrompt {
        system: STRATEGY_SYSTEM,
        user,
        max_tokens: 300,
        temperature: 0.7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fantasy::PlayerStatRecord;

    fn projected(name: &str, position: &str, predicted: Option<f64>) -> ProjectedPlayerRecord {
        ProjectedPlayerRecord {
            stats: PlayerStatRecord::new(name, "KC", position),
            fantasy_points: None,
            predicted_points: predicted,
            position_rank: 0,
        }
    }

    #[test]
    fn test_analysis_prompt_lists_top_ten() {
        let pool: Vec<_> = (0..15)
            .map(|i| projected(&format!("Player {i}"), "WR", Some(200.0 - i as f64)))
            .collect();
        let context = AnalysisContext {
            round_number: 3,
            pick_in_round: 4,
            num_teams: 12,
            drafted_count: 27,
        };

        let prompt = draft_analysis_prompt(&pool, &context);
        assert_eq!(prompt.max_tokens, 400);
        assert_eq!(prompt.system, ANALYSIS_SYSTEM);
        assert!(prompt.user.contains("1. Player 0 (WR) - 200.0 pts"));
        assert!(prompt.user.contains("10. Player 9 (WR) - 191.0 pts"));
        assert!(!prompt.user.contains("Player 10"));
        assert!(prompt.user.contains("- Round: 3"));
        assert!(prompt.user.contains("- Pick in Round: 4"));
        assert!(prompt.user.contains("- Total Teams: 12"));
        assert!(prompt.user.contains("- Already Drafted: 27 players"));
    }

    #[test]
    fn test_analysis_prompt_missing_prediction_shows_zero() {
        let pool = vec![projected("Unknown Kicker", "K", None)];
        let context = AnalysisContext {
            round_number: 1,
            pick_in_round: 1,
            num_teams: 10,
            drafted_count: 0,
        };
        let prompt = draft_analysis_prompt(&pool, &context);
        assert!(prompt.user.contains("1. Unknown Kicker (K) - 0.0 pts"));
    }

    #[test]
    fn test_strategy_prompt() {
        let prompt = draft_strategy_prompt(&[], 10, 7);
        assert_eq!(prompt.max_tokens, 300);
        assert!(prompt.user.contains("- League Size: 10 teams"));
        assert!(prompt.user.contains("- Your Draft Position: 7"));
        assert!(prompt.user.contains("- Already Drafted Players: None"));

        let drafted = vec!["Josh Allen".to_string(), "Tyreek Hill".to_string()];
        let prompt = draft_strategy_prompt(&drafted, 12, 1);
        assert!(prompt.user.contains("- Already Drafted Players: Josh Allen, Tyreek Hill"));
    }

    #[test]
    fn test_context_from_recommendation() {
        let rec = DraftRecommendation {
            recommendations: Vec::new(),
            current_pick: 14,
            round_number: 2,
            pick_in_round: 2,
            total_available: 0,
        };
        let context = AnalysisContext::from_recommendation(&rec, 12);
        assert_eq!(context.drafted_count, 13);
        assert_eq!(context.round_number, 2);
        assert_eq!(context.num_teams, 12);
    }
}
