//! Unit tests for the projection model

use super::*;
use crate::fantasy::types::PlayerStatRecord;
use tempfile::tempdir;

fn scored(name: &str, position: &str, games: u32, points: f64) -> ScoredPlayerRecord {
    ScoredPlayerRecord {
        stats: PlayerStatRecord::new(name, "TST", position).with_games(games),
        fantasy_points: points,
    }
}

fn two_season_model() -> ProjectionModel {
    let mut model = ProjectionModel::new();
    model.add_season(
        vec![
            scored("Rising Star", "WR", 10, 100.0),
            scored("Fading Vet", "RB", 10, 200.0),
        ],
        Season::new(2022),
    );
    model.add_season(
        vec![
            scored("Rising Star", "WR", 10, 150.0),
            scored("Fading Vet", "RB", 10, 20.0),
            scored("Rookie", "TE", 8, 64.0),
        ],
        Season::new(2023),
    );
    model.train();
    model
}

#[test]
fn test_new_model_is_untrained() {
    let model = ProjectionModel::new();
    assert_eq!(model.state(), ModelState::Untrained);
    assert!(model.snapshot().is_none());
    assert!(model.seasons().is_empty());
}

#[test]
fn test_add_season_does_not_train() {
    let mut model = ProjectionModel::new();
    model.add_season(vec![scored("A", "QB", 17, 300.0)], Season::new(2023));
    assert!(!model.is_trained());
    assert_eq!(model.seasons(), vec![Season::new(2023)]);
}

#[test]
fn test_train_without_seasons_stays_untrained() {
    let mut model = ProjectionModel::new();
    model.train();
    assert_eq!(model.state(), ModelState::Untrained);
}

#[test]
fn test_train_computes_per_game_averages_and_trend() {
    let model = two_season_model();
    assert!(model.is_trained());

    let snapshot = model.snapshot().unwrap();
    let rising = snapshot.player("Rising Star").unwrap();
    assert_eq!(rising.seasons, 2);
    assert_eq!(rising.games, 20);
    assert_eq!(rising.fantasy_points_per_game, 12.5);
    assert_eq!(rising.trend, 50.0);

    let rookie = snapshot.player("Rookie").unwrap();
    assert_eq!(rookie.seasons, 1);
    assert_eq!(rookie.fantasy_points_per_game, 8.0);
    assert_eq!(rookie.trend, 0.0);
}

#[test]
fn test_players_keep_first_seen_order() {
    let model = two_season_model();
    let names: Vec<_> = model
        .snapshot()
        .unwrap()
        .players()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, vec!["Rising Star", "Fading Vet", "Rookie"]);
}

#[test]
fn test_stat_averages_use_summed_games() {
    let mut model = ProjectionModel::new();
    let mut first = scored("Gunslinger", "QB", 16, 300.0);
    first.stats.passing_yds = 4000.0;
    let mut second = scored("Gunslinger", "QB", 4, 60.0);
    second.stats.passing_yds = 1000.0;
    model.add_season(vec![first], Season::new(2022));
    model.add_season(vec![second], Season::new(2023));
    model.train();

    let snapshot = model.snapshot().unwrap();
    let avg = snapshot.player("Gunslinger").unwrap();
    assert_eq!(avg.passing_yds_per_game, 250.0);
    assert_eq!(avg.fantasy_points_per_game, 18.0);
    assert_eq!(avg.position, "QB");
}

#[test]
fn test_trend_follows_season_years_not_ingestion_order() {
    let mut model = ProjectionModel::new();
    model.add_season(
        vec![
            scored("Rising Star", "WR", 10, 150.0),
            scored("Fading Vet", "RB", 10, 20.0),
            scored("Rookie", "TE", 8, 64.0),
        ],
        Season::new(2023),
    );
    model.add_season(
        vec![
            scored("Rising Star", "WR", 10, 100.0),
            scored("Fading Vet", "RB", 10, 200.0),
        ],
        Season::new(2022),
    );
    model.train();

    let snapshot = model.snapshot().unwrap();
    assert_eq!(snapshot.player("Rising Star").unwrap().trend, 50.0);
    assert_eq!(snapshot.player("Fading Vet").unwrap().trend, -180.0);
    assert_eq!(model.predict("Rising Star", GamesPlayed::FULL_SEASON), 297.5);
    // ingestion order is still reported as added
    assert_eq!(model.seasons(), vec![Season::new(2023), Season::new(2022)]);
}

#[test]
fn test_large_game_counts_do_not_overflow() {
    let mut model = ProjectionModel::new();
    model.add_season(vec![scored("Iron Man", "QB", u32::MAX, 0.0)], Season::new(2022));
    model.add_season(vec![scored("Iron Man", "QB", u32::MAX, 0.0)], Season::new(2023));
    model.train();

    let snapshot = model.snapshot().unwrap();
    let avg = snapshot.player("Iron Man").unwrap();
    assert_eq!(avg.games, 2 * u64::from(u32::MAX));
    assert_eq!(avg.fantasy_points_per_game, 0.0);
}

#[test]
fn test_zero_games_average_is_zero() {
    let mut model = ProjectionModel::new();
    model.add_season(vec![scored("Injured", "RB", 0, 0.0)], Season::new(2023));
    model.train();

    let snapshot = model.snapshot().unwrap();
    let avg = snapshot.player("Injured").unwrap();
    assert_eq!(avg.fantasy_points_per_game, 0.0);
    assert_eq!(avg.rushing_yds_per_game, 0.0);
    assert_eq!(model.predict("Injured", GamesPlayed::FULL_SEASON), 0.0);
}

#[test]
fn test_predict_applies_trend() {
    let model = two_season_model();
    // (12.5 + 0.1 * 50) * 17
    assert_eq!(model.predict("Rising Star", GamesPlayed::FULL_SEASON), 297.5);
    // 8 * 10
    assert_eq!(model.predict("Rookie", GamesPlayed::new(10)), 80.0);
}

#[test]
fn test_predict_is_floored_at_zero() {
    let model = two_season_model();
    // (11 + 0.1 * -180) * 17 is negative
    assert_eq!(model.predict("Fading Vet", GamesPlayed::FULL_SEASON), 0.0);
}

#[test]
fn test_unknown_player_uses_position_average_fallback() {
    let model = two_season_model();
    assert_eq!(model.predict("Nobody Known", GamesPlayed::FULL_SEASON), 250.0);
    assert_eq!(model.predict("Nobody Known", GamesPlayed::new(34)), 500.0);
    assert_eq!(model.predict("Nobody Known", GamesPlayed::new(0)), 0.0);
}

#[test]
fn test_untrained_predict_uses_fallback() {
    let model = ProjectionModel::new();
    assert_eq!(model.predict("Anyone", GamesPlayed::FULL_SEASON), 250.0);
}

#[test]
fn test_untrained_predict_all_echoes_fantasy_points() {
    let model = ProjectionModel::new();
    let pool = vec![
        scored("A", "QB", 17, 305.22),
        scored("B", "RB", 16, 0.0),
        scored("C", "WR", 15, 187.4),
    ];

    let projected = model.predict_all(&pool, GamesPlayed::FULL_SEASON);
    assert_eq!(projected.len(), 3);
    for (row, source) in projected.iter().zip(&pool) {
        assert_eq!(row.predicted_points, Some(source.fantasy_points));
        assert_eq!(row.fantasy_points, Some(source.fantasy_points));
        assert_eq!(row.position_rank, 0);
    }
}

#[test]
fn test_untrained_predict_all_on_unscored_rows_is_zero() {
    let model = ProjectionModel::new();
    let pool = vec![PlayerStatRecord::new("Raw", "TST", "TE").with_games(10)];

    let projected = model.predict_all(&pool, GamesPlayed::FULL_SEASON);
    assert_eq!(projected[0].predicted_points, Some(0.0));
    assert_eq!(projected[0].fantasy_points, None);
}

#[test]
fn test_trained_predict_all_looks_up_by_name() {
    let model = two_season_model();
    let pool = vec![
        scored("Rising Star", "WR", 12, 999.0),
        scored("Unseen", "QB", 17, 123.0),
    ];

    let projected = model.predict_all(&pool, GamesPlayed::FULL_SEASON);
    assert_eq!(projected[0].predicted_points, Some(297.5));
    assert_eq!(projected[0].fantasy_points, Some(999.0));
    assert_eq!(projected[1].predicted_points, Some(250.0));
}

#[test]
fn test_snapshot_is_unaffected_by_retraining() {
    let mut model = two_season_model();
    let before = model.snapshot().unwrap();

    model.add_season(vec![scored("Rising Star", "WR", 10, 300.0)], Season::new(2024));
    model.train();

    assert_eq!(before.predict("Rising Star", GamesPlayed::FULL_SEASON), 297.5);
    assert_ne!(
        model.predict("Rising Star", GamesPlayed::FULL_SEASON),
        before.predict("Rising Star", GamesPlayed::FULL_SEASON)
    );
}

#[test]
fn test_reset_clears_history() {
    let mut model = two_season_model();
    model.reset();
    assert!(!model.is_trained());
    assert!(model.seasons().is_empty());
}

#[test]
fn test_save_and_load_model() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("models").join("model.json");

    let model = two_season_model();
    model.save(&path).unwrap();

    let loaded = ProjectionModel::load(&path).unwrap().unwrap();
    assert!(loaded.is_trained());
    assert_eq!(loaded.seasons(), vec![Season::new(2022), Season::new(2023)]);
    assert_eq!(loaded.predict("Rising Star", GamesPlayed::FULL_SEASON), 297.5);
}

#[test]
fn test_load_missing_model_is_none() {
    let dir = tempdir().unwrap();
    let loaded = ProjectionModel::load(&dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_corrupt_model_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(ProjectionModel::load(&path).is_err());
}
