//! Scoring, projection, ranking and draft recommendation.
//!
//! Data flows one way: raw stats are scored, optionally accumulated into
//! season history for projection, ranked by position, and finally filtered
//! into draft recommendations. Every step takes its input explicitly and
//! returns new records.

pub mod draft;
pub mod projection;
pub mod ranking;
pub mod sample;
pub mod scoring;
pub mod source;
pub mod types;

pub use draft::{recommend, DraftRecommendation, DraftState, PickSlot, MAX_RECOMMENDATIONS};
pub use projection::{ModelState, ProjectionModel, TrainedModel};
pub use ranking::{add_position_ranks, sort_by_predicted};
pub use scoring::{score, score_all, score_record, ScoringRules};
pub use source::{DataSource, JsonFileSource, SampleDataSource};
pub use types::{PlayerRow, PlayerStatRecord, ProjectedPlayerRecord, ScoredPlayerRecord, SeasonBatch};
