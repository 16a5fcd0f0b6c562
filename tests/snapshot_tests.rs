use shipgame::{Coord, EngineSnapshot, GameEngine, GameState, Orientation, Player, ShotOutcome};

fn c(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

fn mid_game_engine() -> GameEngine {
    let mut engine = GameEngine::new();
    assert!(engine.place_ship(Player::First, 3, c(2, 2), Orientation::Row));
    assert!(engine.place_ship(Player::First, 2, c(7, 0), Orientation::Column));
    assert!(engine.place_ship(Player::Second, 4, c(5, 5), Orientation::Row));
    assert_eq!(
        engine.try_fire_torpedo(Player::First, c(5, 6)),
        Ok(ShotOutcome::Hit)
    );
    assert_eq!(
        engine.try_fire_torpedo(Player::Second, c(2, 3)),
        Ok(ShotOutcome::Hit)
    );
    engine
}

#[test]
fn snapshot_roundtrip_preserves_the_whole_game() {
    let engine = mid_game_engine();
    let snapshot = engine.snapshot();
    let restored = GameEngine::from_snapshot(snapshot.clone());

    assert_eq!(restored, engine);
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.active_player(), Player::First);
    assert_eq!(restored.current_state(), GameState::Unfinished);
    assert_eq!(restored.ships_remaining(Player::First), 2);
    assert_eq!(restored.fleet(Player::Second)[0].hit_count(), 1);
}

#[test]
fn restored_engine_keeps_playing_by_the_same_rules() {
    let engine = mid_game_engine();
    let mut restored = GameEngine::from_snapshot(engine.snapshot());

    // Out-of-turn shot still rejected after restore.
    assert!(!restored.fire_torpedo(Player::Second, c(0, 0)));
    // Finish off second's only ship.
    for col in [5u8, 7, 8] {
        assert!(restored.fire_torpedo(Player::First, c(5, col)));
        restored.fire_torpedo(Player::Second, c(9, 9));
    }
    assert_eq!(restored.current_state(), GameState::FirstWon);
}

#[test]
fn snapshot_serializes_through_serde() {
    let engine = mid_game_engine();
    let snapshot = engine.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: EngineSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let restored = GameEngine::from_snapshot(decoded);
    assert_eq!(restored, engine);
}
