//! Fantasy point scoring under the fixed PPR rule table.
//!
//! Scores are rounded to two decimals with `f64::round`, i.e. halves round
//! away from zero.

use rayon::prelude::*;

use super::types::{PlayerStatRecord, ScoredPlayerRecord};


/// Point values for every stat the scoring engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    pub passing_yds_per_point: f64,
    pub passing_td: f64,
    pub passing_sack: f64,
    pub rushing_yds_per_point: f64,
    pub rushing_td: f64,
    pub receiving_yds_per_point: f64,
    pub receiving_td: f64,
    pub reception: f64,
    /// Targets are converted to estimated receptions at this catch rate.
    pub catch_rate: f64,
    pub return_td: f64,
    pub fumble_lost: f64,
    pub passing_bonus: MilestoneBonus,
    pub rushing_bonus: MilestoneBonus,
    pub receiving_bonus: MilestoneBonus,
}

/// Two-tier per-game yardage bonus: `[lower, upper)` earns `lower_points`,
/// `upper` and above earns `upper_points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneBonus {
    pub lower: f64,
    pub upper: f64,
    pub lower_points: f64,
    pub upper_points: f64,
}

impl MilestoneBonus {
    /// Bonus points earned for one game at the given per-game average.
    pub fn per_game(&self, avg_yds: f64) -> f64 {
        if avg_yds >= self.upper {
            self.upper_points
        } else if avg_yds >= self.lower {
            self.lower_points
        } else {
            0.0
        }
    }
}

impl ScoringRules {
    /// ESPN-style standard PPR scoring.
    pub const STANDARD_PPR: ScoringRules = ScoringRules {
        passing_yds_per_point: 25.0,
        passing_td: 4.0,
        passing_sack: -1.0,
        rushing_yds_per_point: 10.0,
        rushing_td: 6.0,
        receiving_yds_per_point: 10.0,
        receiving_td: 6.0,
        reception: 1.0,
        catch_rate: 0.65,
        return_td: 6.0,
        fumble_lost: -2.0,
        passing_bonus: MilestoneBonus {
            lower: 300.0,
            upper: 400.0,
            lower_points: 3.0,
            upper_points: 5.0,
        },
        rushing_bonus: MilestoneBonus {
            lower: 100.0,
            upper: 200.0,
            lower_points: 3.0,
            upper_points: 5.0,
        },
        receiving_bonus: MilestoneBonus {
            lower: 100.0,
            upper: 200.0,
            lower_points: 3.0,
            upper_points: 5.0,
        },
    };

    /// Unrounded fantasy points for a record.
    pub fn raw_points(&self, r: &PlayerStatRecord) -> f64 {
        let mut points = 0.0;

        points += r.passing_yds / self.passing_yds_per_point;
        points += r.passing_td * self.passing_td;
        points += r.passing_sacks * self.passing_sack;

        points += r.rushing_yds / self.rushing_yds_per_point;
        points += r.rushing_td * self.rushing_td;

        let receptions = r.receiving_tgt * self.catch_rate;
        points += receptions * self.reception;
        points += r.receiving_yds / self.receiving_yds_per_point;
        points += r.receiving_td * self.receiving_td;

        points += r.returns_td * self.return_td;
        points += r.fumbles_lost * self.fumble_lost;

        points + self.milestone_points(r)
    }

    /// Milestone bonuses: tier chosen from the per-game average, paid once per game.
    pub fn milestone_points(&self, r: &PlayerStatRecord) -> f64 {
        if r.games_played == 0 {
            return 0.0;
        }
        let games = f64::from(r.games_played);

        let per_game = self.passing_bonus.per_game(r.per_game(r.passing_yds))
            + self.rushing_bonus.per_game(r.per_game(r.rushing_yds))
            + self.receiving_bonus.per_game(r.per_game(r.receiving_yds));

        per_game * games
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::STANDARD_PPR
    }
}

/// Round to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fantasy points for one record under the standard rules.
pub fn score(record: &PlayerStatRecord) -> f64 {
    round2(ScoringRules::STANDARD_PPR.raw_points(record))
}

/// Score a record into a new [`ScoredPlayerRecord`].
pub fn score_record(record: &PlayerStatRecord) -> ScoredPlayerRecord {
    ScoredPlayerRecord {
        stats: record.clone(),
        fantasy_points: score(record),
    }
}

/// Score a whole pool in parallel; output order matches input order.
pub fn score_all(records: &[PlayerStatRecord]) -> Vec<ScoredPlayerRecord> {
    records.par_iter().map(score_record).collect()
}
