use super::*;
use crate::types::PlayerName;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> MatchStore {
    MatchStore::new(dir.path().join("match_data.json"))
}

#[test]
fn test_load_missing_file_initializes() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let state = store.load().unwrap();
    assert!(state.matches.is_empty());
    assert!(state.players.is_empty());

    let written = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value, serde_json::json!({"matches": [], "players": {}}));
}

#[test]
fn test_load_empty_file_initializes() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "").unwrap();

    let state = store.load().unwrap();
    assert_eq!(state, LeagueState::new());
    assert!(!fs::read_to_string(store.path()).unwrap().is_empty());
}

#[test]
fn test_load_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, LeagueError::CorruptData { .. }));
    // Corrupt data must not be overwritten
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");
}

#[test]
fn test_load_wrong_shape_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), r#"{"matches": 3}"#).unwrap();

    assert!(matches!(
        store.load(),
        Err(LeagueError::CorruptData { .. })
    ));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut state = store.load().unwrap();
    state
        .record_match("Thomas", "Raymond", Some("2025-05-20"))
        .unwrap();
    store.save(&state).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, state);
    let thomas = PlayerName::new("Thomas").unwrap();
    assert_eq!(loaded.players.get(&thomas).unwrap().wins, 1);
    assert!(!dir.path().join("match_data.json.tmp").exists());
}

#[test]
fn test_saved_layout() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut state = LeagueState::new();
    state.record_match("Zoë", "Amy", Some("2025-01-02")).unwrap();
    store.save(&state).unwrap();

    let written = fs::read_to_string(store.path()).unwrap();
    let expected = r#"{
  "matches": [
    {
      "date": "2025-01-02T00:00:00",
      "winner": "Zoë",
      "loser": "Amy"
    }
  ],
  "players": {
    "Zoë": {
      "wins": 1,
      "losses": 0
    },
    "Amy": {
      "wins": 0,
      "losses": 1
    }
  }
}
"#;
    assert_eq!(written, expected);
}

#[test]
fn test_save_load_is_stable() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut state = LeagueState::new();
    state.record_match("A", "B", Some("2025-03-01")).unwrap();
    state.record_match("C", "A", None).unwrap();
    store.save(&state).unwrap();

    store.save(&store.load().unwrap()).unwrap();
    let first = fs::read_to_string(store.path()).unwrap();
    store.save(&store.load().unwrap()).unwrap();
    let second = fs::read_to_string(store.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_from_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let store = MatchStore::new(dir.path().join("nope").join("match_data.json"));
    assert!(matches!(store.load(), Err(LeagueError::Io { .. })));
}

#[test]
fn test_load_extreme_counts() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{"matches": [], "players": {"Max": {"wins": 18446744073709551615, "losses": 1}}}"#,
    )
    .unwrap();

    let mut state = store.load().unwrap();
    let max = PlayerName::new("Max").unwrap();
    assert_eq!(state.players.get(&max).unwrap().wins, u64::MAX);

    state.record_match("Max", "Min", Some("2025-01-01")).unwrap();
    let row = state.player_summary("Max").unwrap();
    assert_eq!(row.wins, u64::MAX);
    assert_eq!(row.total, u64::MAX);
    assert!(row.win_rate <= 1.0);
    store.save(&state).unwrap();
}
