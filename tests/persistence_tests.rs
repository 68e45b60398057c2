//! Persistence tests - high score restore, save points and failure tolerance

use std::path::PathBuf;

use neo_tetris::core::SequencePieces;
use neo_tetris::engine::{EngineConfig, GameEngine, GameEvent, VirtualScheduler};
use neo_tetris::store::{JsonFileStore, MemoryStore, SavedState, StateStore, StoreConfig};
use neo_tetris::types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn engine_on<St: StateStore>(store: St) -> GameEngine<VirtualScheduler, SequencePieces, St> {
    GameEngine::new(
        EngineConfig::default(),
        VirtualScheduler::new(),
        SequencePieces::repeat(PieceKind::I),
        store,
    )
}

fn clear_bottom_row<St: StateStore>(engine: &mut GameEngine<VirtualScheduler, SequencePieces, St>) {
    for col in 4..BOARD_WIDTH as i8 {
        engine.board_mut().set(19, col, Some(PieceKind::O));
    }
    for _ in 0..4 {
        engine.apply(Command::MoveLeft);
    }
    engine.apply(Command::HardDrop);
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("neo-tetris-it-{}-{}", name, std::process::id()))
        .join("state.json")
}

#[test]
fn test_high_score_loaded_at_startup() {
    let saved = SavedState {
        high_score: 4200,
        score: 900,
        level: 3,
        ..SavedState::default()
    };
    let mut engine = engine_on(MemoryStore::with_state(saved));
    assert_eq!(engine.high_score(), 4200);

    // only the high score is restored
    engine.new_game();
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.high_score(), 4200);
}

#[test]
fn test_saves_after_clear_and_game_over() {
    let mut engine = engine_on(MemoryStore::new());
    engine.new_game();
    assert_eq!(engine.store().save_count(), 0);

    clear_bottom_row(&mut engine);
    assert_eq!(engine.store().save_count(), 1);
    let record = engine.store().state().unwrap().clone();
    assert_eq!(record.score, 100);
    assert_eq!(record.combo, 1);
    assert_eq!(record.lines_cleared, 1);
    assert_eq!(record.speed, 1000);
    assert_eq!(record.high_score, 0);

    engine.game_over();
    assert_eq!(engine.store().save_count(), 2);
    assert_eq!(engine.store().state().unwrap().high_score, 100);
}

#[test]
fn test_saved_board_uses_color_names() {
    let mut engine = engine_on(MemoryStore::new());
    engine.new_game();
    engine.board_mut().set(19, 9, Some(PieceKind::L));
    engine.board_mut().set(0, 0, Some(PieceKind::I));

    let record = engine.saved_state();
    assert_eq!(record.board.len(), BOARD_HEIGHT);
    assert!(record.board.iter().all(|row| row.len() == BOARD_WIDTH));
    assert_eq!(record.board[19][9].as_deref(), Some("#ffa500"));
    assert_eq!(record.board[0][0].as_deref(), Some("#00ffff"));
    assert_eq!(record.board[10][5], None);
}

#[test]
fn test_new_high_score_flag() {
    let mut engine = engine_on(MemoryStore::with_state(SavedState {
        high_score: 150,
        ..SavedState::default()
    }));
    engine.new_game();
    clear_bottom_row(&mut engine);
    engine.game_over();
    assert!(engine.drain_events().contains(&GameEvent::GameOver {
        final_score: 100,
        new_high_score: false,
    }));
    assert_eq!(engine.high_score(), 150);

    engine.new_game();
    clear_bottom_row(&mut engine);
    clear_bottom_row(&mut engine);
    engine.game_over();
    assert!(engine.drain_events().contains(&GameEvent::GameOver {
        final_score: 300,
        new_high_score: true,
    }));
    assert_eq!(engine.high_score(), 300);
}

#[test]
fn test_failing_store_never_interrupts_play() {
    let mut engine = engine_on(MemoryStore::failing());
    assert_eq!(engine.high_score(), 0);

    engine.new_game();
    clear_bottom_row(&mut engine);
    assert!(engine.is_active());
    assert_eq!(engine.score(), 100);

    engine.game_over();
    assert_eq!(engine.high_score(), 100);
    assert_eq!(engine.store().save_count(), 2);
    assert!(engine.store().state().is_none());
}

#[test]
fn test_json_file_carries_high_score_between_sessions() {
    let path = scratch_path("sessions");
    let _ = std::fs::remove_file(&path);

    {
        let mut engine = engine_on(JsonFileStore::new(path.clone()));
        engine.new_game();
        clear_bottom_row(&mut engine);
        engine.game_over();
    }

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["high_score"], 100);
    assert_eq!(value["board"].as_array().unwrap().len(), BOARD_HEIGHT);

    let engine = engine_on(JsonFileStore::new(path.clone()));
    assert_eq!(engine.high_score(), 100);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_malformed_file_falls_back_to_zero() {
    let path = scratch_path("malformed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let mut engine = engine_on(JsonFileStore::new(path.clone()));
    assert_eq!(engine.high_score(), 0);

    // saving overwrites the broken file
    engine.new_game();
    engine.game_over();
    let mut store = JsonFileStore::new(path.clone());
    assert_eq!(store.load().unwrap().map(|s| s.high_score), Some(0));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_store_config_boxed_backend() {
    let config = StoreConfig {
        path: Some(scratch_path("boxed")),
    };
    let mut engine = engine_on(config.open());
    engine.new_game();
    clear_bottom_row(&mut engine);
    engine.game_over();

    let mut reopened = config.open();
    let record = reopened.load().unwrap().unwrap();
    assert_eq!(record.high_score, 100);

    let _ = std::fs::remove_dir_all(config.path.unwrap().parent().unwrap());
}

#[test]
fn test_score_events_match_save_points() {
    let mut engine = engine_on(MemoryStore::new());
    engine.new_game();
    let mut events = engine.drain_events();

    clear_bottom_row(&mut engine);
    // a lock without a clear is not a save point
    engine.apply(Command::HardDrop);
    engine.advance(5000);
    clear_bottom_row(&mut engine);
    engine.game_over();
    events.extend(engine.drain_events());

    let save_points = events.iter().filter(|e| e.affects_score()).count();
    assert_eq!(save_points, 3);
    assert_eq!(engine.store().save_count(), save_points);
}
