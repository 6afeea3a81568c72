//! Command handler tests against a temporary cache directory and an
//! in-memory store.

use super::{
    common::CommandContext,
    draft::{build_draft_report, resolve_state, Capabilities, DraftParams},
    predictions::{build_predictions, PredictionsParams},
    score::{score_players, ScoreParams},
    seasons::{cache_season, clear_season, list_seasons},
    session::{delete_session, new_session, record_pick, show_session},
    train::{train_and_save, TrainParams},
};
use crate::{
    analysis::OpenAiAnalyst,
    cli::types::{GamesPlayed, Position, Season},
    config::Config,
    fantasy::MAX_RECOMMENDATIONS,
    storage::PlayerDatabase,
    KickoffError,
};
use tempfile::TempDir;

fn test_context(dir: &TempDir) -> CommandContext {
    let config = Config {
        cache_dir: dir.path().to_path_buf(),
        db_path: dir.path().join("kickoff.db"),
        analyst: None,
    };
    CommandContext::with_store(config, Some(PlayerDatabase::new_in_memory().unwrap()))
}

fn storeless_context(dir: &TempDir) -> CommandContext {
    let config = Config {
        cache_dir: dir.path().to_path_buf(),
        db_path: dir.path().join("kickoff.db"),
        analyst: None,
    };
    CommandContext::with_store(config, None)
}

#[test]
fn test_score_players_sample_and_filter() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);

    let all = score_players(&mut ctx, &ScoreParams::default()).unwrap();
    assert_eq!(all.len(), 50);
    assert_eq!(all[0].stats.name, "Patrick Mahomes");
    assert_eq!(all[0].fantasy_points, 305.22);

    let params = ScoreParams {
        positions: vec![Position::TE],
        ..ScoreParams::default()
    };
    let tes = score_players(&mut ctx, &params).unwrap();
    assert_eq!(tes.len(), 10);
    assert!(tes.iter().all(|p| p.stats.position == "TE"));
}

#[test]
fn test_score_players_store_writes_season() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);

    let params = ScoreParams {
        season: Season::new(2023),
        store: true,
        ..ScoreParams::default()
    };
    score_players(&mut ctx, &params).unwrap();

    let seasons = list_seasons(&mut ctx).unwrap();
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].players, 50);
}

#[test]
fn test_score_players_without_store_still_scores() {
    let dir = TempDir::new().unwrap();
    let mut ctx = storeless_context(&dir);
    let params = ScoreParams {
        store: true,
        ..ScoreParams::default()
    };
    assert_eq!(score_players(&mut ctx, &params).unwrap().len(), 50);
}

#[test]
fn test_untrained_predictions_echo_current_points() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let rows = build_predictions(&ctx, &PredictionsParams::default()).unwrap();
    assert_eq!(rows.len(), 50);
    assert!(rows
        .iter()
        .all(|r| r.predicted_points == r.fantasy_points));
    assert!(rows
        .windows(2)
        .all(|w| w[0].predicted_points >= w[1].predicted_points));
}

#[test]
fn test_predictions_rank_before_filter_and_limit() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    let params = PredictionsParams {
        positions: vec![Position::WR],
        limit: Some(3),
        ..PredictionsParams::default()
    };
    let rows = build_predictions(&ctx, &params).unwrap();
    let ranks: Vec<u32> = rows.iter().map(|r| r.position_rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert!(rows.iter().all(|r| r.position() == "WR"));
}

#[test]
fn test_predictions_from_stored_history() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);
    cache_season(&mut ctx, Season::new(2023), None).unwrap();

    let full = PredictionsParams {
        history: vec![Season::new(2023)],
        ..PredictionsParams::default()
    };
    let no_games = PredictionsParams {
        games: GamesPlayed::new(0),
        ..full.clone()
    };

    let rows = build_predictions(&ctx, &full).unwrap();
    // 17 games played in a single season: the projection is the season total.
    let mahomes = rows.iter().find(|r| r.name() == "Patrick Mahomes").unwrap();
    assert_eq!(mahomes.predicted_points, Some(305.22));

    let zero = build_predictions(&ctx, &no_games).unwrap();
    assert!(zero.iter().all(|r| r.predicted_points == Some(0.0)));
}

#[test]
fn test_predictions_missing_model_file_is_error() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);
    let params = PredictionsParams {
        model: Some(dir.path().join("nope.json")),
        ..PredictionsParams::default()
    };
    assert!(matches!(
        build_predictions(&ctx, &params),
        Err(KickoffError::InvalidArgument { .. })
    ));
}

#[test]
fn test_train_requires_cached_history() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);

    assert!(train_and_save(&ctx, &TrainParams::default()).is_err());

    let params = TrainParams {
        history: vec![Season::new(2019)],
        output: None,
    };
    assert!(matches!(
        train_and_save(&ctx, &params),
        Err(KickoffError::InvalidArgument { .. })
    ));
}

#[test]
fn test_train_saves_model_used_by_default() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);
    cache_season(&mut ctx, Season::new(2023), None).unwrap();

    let params = TrainParams {
        history: vec![Season::new(2023)],
        output: None,
    };
    let (model, path) = train_and_save(&ctx, &params).unwrap();
    assert!(model.is_trained());
    assert_eq!(path, ctx.config.model_path());
    assert!(path.exists());

    // No --history: the saved model is picked up from the cache directory.
    let rows = build_predictions(&ctx, &PredictionsParams::default()).unwrap();
    // 417.05 points over 16 games, scaled to 17.
    let hill = rows.iter().find(|r| r.name() == "Tyreek Hill").unwrap();
    assert_eq!(hill.predicted_points, Some(443.12));
}

#[test]
fn test_clear_season() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);
    cache_season(&mut ctx, Season::new(2022), None).unwrap();
    assert_eq!(clear_season(&mut ctx, Season::new(2022)).unwrap(), 50);
    assert!(list_seasons(&mut ctx).unwrap().is_empty());
}

#[test]
fn test_store_required_commands_fail_without_store() {
    let dir = TempDir::new().unwrap();
    let mut ctx = storeless_context(&dir);
    assert!(matches!(
        list_seasons(&mut ctx),
        Err(KickoffError::Cache { .. })
    ));
}

#[tokio::test]
async fn test_draft_report_excludes_drafted() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);
    let analyst = OpenAiAnalyst::disabled().unwrap();

    let params = DraftParams {
        drafted: vec!["Tyreek Hill".to_string(), "Josh Allen".to_string()],
        ..DraftParams::default()
    };
    let report = build_draft_report(&ctx, &params, Capabilities::default(), &analyst)
        .await
        .unwrap();

    let rec = &report.recommendation;
    assert_eq!(rec.current_pick, 3);
    assert_eq!(rec.round_number, 1);
    assert_eq!(rec.pick_in_round, 3);
    assert_eq!(rec.total_available, 48);
    assert_eq!(rec.recommendations.len(), MAX_RECOMMENDATIONS);
    assert!(rec
        .recommendations
        .iter()
        .all(|p| p.name() != "Tyreek Hill" && p.name() != "Josh Allen"));
    assert!(report.analysis.is_none());
}

#[tokio::test]
async fn test_draft_report_analysis_unconfigured_degrades() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);
    let analyst = OpenAiAnalyst::disabled().unwrap();

    let report = build_draft_report(
        &ctx,
        &DraftParams::default(),
        Capabilities { ai_analysis: true },
        &analyst,
    )
    .await
    .unwrap();
    assert!(report.analysis.is_none());
    assert!(report.strategy.is_none());
    assert_eq!(report.recommendation.current_pick, 1);
}

#[tokio::test]
async fn test_draft_zero_teams_is_invalid() {
    let dir = TempDir::new().unwrap();
    let ctx = test_context(&dir);
    let analyst = OpenAiAnalyst::disabled().unwrap();
    let params = DraftParams {
        teams: 0,
        ..DraftParams::default()
    };
    let result = build_draft_report(&ctx, &params, Capabilities::default(), &analyst).await;
    assert!(matches!(result, Err(KickoffError::InvalidArgument { .. })));
}

#[test]
fn test_session_lifecycle_feeds_draft_state() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);

    new_session(&mut ctx, "league", 10, 4).unwrap();
    record_pick(&mut ctx, "league", "Christian McCaffrey").unwrap();
    record_pick(&mut ctx, "league", "Justin Jefferson").unwrap();

    let params = DraftParams {
        session: Some("league".to_string()),
        drafted: vec!["CeeDee Lamb".to_string()],
        ..DraftParams::default()
    };
    let state = resolve_state(&ctx, &params).unwrap();
    assert_eq!(state.num_teams, 10);
    assert_eq!(state.draft_position, 4);
    assert_eq!(state.already_drafted.len(), 3);

    // Extra picks are not persisted.
    assert_eq!(show_session(&mut ctx, "league").unwrap().already_drafted.len(), 2);

    delete_session(&mut ctx, "league").unwrap();
    assert!(matches!(
        show_session(&mut ctx, "league"),
        Err(KickoffError::SessionNotFound { .. })
    ));
    assert!(matches!(
        resolve_state(&ctx, &params),
        Err(KickoffError::SessionNotFound { .. })
    ));
}

#[test]
fn test_new_session_rejects_zero_teams() {
    let dir = TempDir::new().unwrap();
    let mut ctx = test_context(&dir);
    assert!(matches!(
        new_session(&mut ctx, "bad", 0, 1),
        Err(KickoffError::InvalidArgument { .. })
    ));
    assert!(matches!(
        record_pick(&mut ctx, "missing", "Anyone"),
        Err(KickoffError::SessionNotFound { .. })
    ));
}
