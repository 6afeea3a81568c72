//! Unit tests for storage functionality

use super::*;
use crate::{
    cli::types::Season,
    fantasy::{score_record, PlayerStatRecord, ScoredPlayerRecord},
};

fn create_test_db() -> PlayerDatabase {
    PlayerDatabase::new_in_memory().unwrap()
}

fn scored(name: &str, position: &str, rushing_yds: f64) -> ScoredPlayerRecord {
    let mut stats = PlayerStatRecord::new(name, "TST", position).with_games(17);
    stats.rushing_yds = rushing_yds;
    score_record(&stats)
}

#[test]
fn test_database_creation() {
    let db = create_test_db();
    assert!(db.cached_seasons().unwrap().is_empty());
    assert!(db.list_sessions().unwrap().is_empty());
}

#[test]
fn test_cache_and_load_season_preserves_order() {
    let mut db = create_test_db();
    let records = vec![
        scored("Zeta Back", "RB", 900.0),
        scored("Alpha Back", "RB", 1200.0),
        scored("Mid Back", "RB", 400.0),
    ];

    db.cache_season(Season::new(2023), &records).unwrap();

    let loaded = db.load_season(Season::new(2023)).unwrap().unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_load_missing_season_is_none() {
    let db = create_test_db();
    assert!(db.load_season(Season::new(1999)).unwrap().is_none());
}

#[test]
fn test_cache_season_replaces_previous_batch() {
    let mut db = create_test_db();
    let season = Season::new(2022);

    db.cache_season(season, &[scored("Old One", "RB", 100.0), scored("Old Two", "WR", 50.0)])
        .unwrap();
    db.cache_season(season, &[scored("New One", "TE", 300.0)]).unwrap();

    let loaded = db.load_season(season).unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].stats.name, "New One");
}

#[test]
fn test_cached_seasons_and_clear() {
    let mut db = create_test_db();
    db.cache_season(Season::new(2023), &[scored("A", "RB", 10.0), scored("B", "RB", 20.0)])
        .unwrap();
    db.cache_season(Season::new(2021), &[scored("C", "WR", 30.0)]).unwrap();

    let seasons = db.cached_seasons().unwrap();
    let summary: Vec<(u16, usize)> = seasons.iter().map(|s| (s.season.as_u16(), s.players)).collect();
    assert_eq!(summary, vec![(2021, 1), (2023, 2)]);

    assert_eq!(db.clear_season(Season::new(2023)).unwrap(), 2);
    assert_eq!(db.clear_season(Season::new(2023)).unwrap(), 0);
    assert_eq!(db.cached_seasons().unwrap().len(), 1);
}

#[test]
fn test_season_store_trait_round_trip() {
    fn store_and_fetch(store: &mut dyn SeasonStore) -> Option<Vec<ScoredPlayerRecord>> {
        store
            .store_season(Season::new(2020), &[scored("Trait Back", "RB", 700.0)])
            .unwrap();
        store.load_season(Season::new(2020)).unwrap()
    }

    let mut db = create_test_db();
    let loaded = store_and_fetch(&mut db).unwrap();
    assert_eq!(loaded[0].stats.name, "Trait Back");
    assert_eq!(loaded[0].fantasy_points, 70.0);
}

#[test]
fn test_create_and_get_session() {
    let mut db = create_test_db();

    let session = db.create_session("home league", 12, 5).unwrap();
    assert_eq!(session.num_teams, 12);
    assert_eq!(session.draft_position, 5);
    assert!(session.already_drafted.is_empty());

    let fetched = db.get_session("home league").unwrap().unwrap();
    assert_eq!(fetched, session);
    assert!(db.get_session("work league").unwrap().is_none());
}

#[test]
fn test_duplicate_session_name_rejected() {
    let mut db = create_test_db();
    db.create_session("dup", 10, 1).unwrap();
    let err = db.create_session("dup", 8, 2).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_record_pick_appends_in_order_and_ignores_repeats() {
    let mut db = create_test_db();
    db.create_session("picks", 10, 3).unwrap();

    db.record_pick("picks", "Christian McCaffrey").unwrap();
    db.record_pick("picks", "Tyreek Hill").unwrap();
    let session = db.record_pick("picks", "Christian McCaffrey").unwrap().unwrap();

    assert_eq!(
        session.already_drafted,
        vec!["Christian McCaffrey".to_string(), "Tyreek Hill".to_string()]
    );

    let state = db.get_session("picks").unwrap().unwrap().state();
    assert_eq!(state.already_drafted.len(), 2);
    assert_eq!(state.num_teams, 10);
}

#[test]
fn test_record_pick_unknown_session() {
    let mut db = create_test_db();
    assert!(db.record_pick("missing", "Anyone").unwrap().is_none());
}

#[test]
fn test_delete_session() {
    let mut db = create_test_db();
    db.create_session("gone", 12, 1).unwrap();

    assert!(db.delete_session("gone").unwrap());
    assert!(!db.delete_session("gone").unwrap());
    assert!(db.list_sessions().unwrap().is_empty());
}
