//! End-to-end flows: seed files, keyboard gestures and owner updates.

use std::fs;
use zanban::app::KeyFocus;
use zanban::domain::SeedFormat;
use zanban::{handle_event, load_board, Board, Config, Event, Theme, ZanbanError};

const SEED: &str = r#"
[[columns]]
title = "Todo"
cards = [
    { id = "milk", text = "Buy milk" },
    { id = "dog", text = "Walk dog" },
    { id = "mom", text = "Call mom" },
]

[[columns]]
title = "Done"
cards = [{ id = "rent", text = "Pay rent" }]
"#;

fn ids(board: &Board, column: usize) -> Vec<&str> {
    board.columns[column]
        .cards
        .iter()
        .flatten()
        .map(|c| c.id.as_str())
        .collect()
}

fn loaded_state() -> zanban::AppState {
    let mut state = zanban::AppState::new(Board::loading(&["Todo", "Done"]), Theme::default());
    let board = Board::from_seed(SEED, SeedFormat::Toml).unwrap();
    handle_event(&mut state, &Event::BoardLoaded { board }).unwrap();
    state
}

fn send(state: &mut zanban::AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

#[test]
fn board_file_is_read_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("board.toml");
    fs::write(&toml_path, SEED).unwrap();
    let board = Board::from_file(&toml_path).unwrap();
    assert_eq!(ids(&board, 0), ["milk", "dog", "mom"]);

    let json_path = dir.path().join("board.json");
    fs::write(&json_path, r#"{"columns":[{"title":"Inbox","cards":[{"text":"Untracked"}]}]}"#).unwrap();
    let board = Board::from_file(&json_path).unwrap();
    assert_eq!(board.titles(), ["Inbox"]);
    assert_eq!(board.columns[0].cards.as_ref().map(Vec::len), Some(1));
}

#[test]
fn board_file_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(Board::from_file(dir.path().join("missing.toml")), Err(ZanbanError::Io(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(Board::from_file(&broken), Err(ZanbanError::Parse(_))));
}

#[test]
fn load_board_reads_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.toml");
    fs::write(&path, SEED).unwrap();

    let config = Config {
        board_file: Some(path.to_string_lossy().into_owned()),
        ..Config::default()
    };
    let mut state = zanban::initialize(&config);
    let event = load_board(&config);
    assert!(matches!(event, Event::BoardLoaded { .. }));

    let (render, _) = handle_event(&mut state, &event).unwrap();
    assert!(render);
    assert_eq!(state.board.titles(), ["Todo", "Done"]);
}

#[test]
fn carry_card_to_another_column() {
    let mut state = loaded_state();
    send(
        &mut state,
        &[Event::KeyDown, Event::PickUp, Event::FocusRight, Event::KeyUp, Event::Drop],
    );

    assert_eq!(ids(&state.board, 0), ["milk", "mom"]);
    assert_eq!(ids(&state.board, 1), ["dog", "rent"]);
    assert_eq!(state.focused, 1);
    assert_eq!(state.selected_card_id().as_deref(), Some("dog"));
    assert!(state.gesture.is_none());
    assert!(state.columns.iter().all(|c| c.drag.dragging_id().is_none()));
}

#[test]
fn second_gesture_is_unaffected_by_the_first() {
    let mut state = loaded_state();
    send(&mut state, &[Event::PickUp, Event::KeyDown, Event::Drop]);
    assert_eq!(ids(&state.board, 0), ["milk", "dog", "mom"]);

    send(&mut state, &[Event::PickUp, Event::KeyDown, Event::KeyDown, Event::Drop]);
    assert_eq!(ids(&state.board, 0), ["dog", "milk", "mom"]);
}

#[test]
fn filtered_drop_uses_visible_zones() {
    let mut state = loaded_state();
    send(&mut state, &[Event::FilterMode, Event::Char('m'), Event::Confirm]);
    assert_eq!(state.visible_ids(0), ["milk", "mom"]);

    // Carry "mom" to the zone before "milk".
    send(&mut state, &[Event::KeyDown, Event::PickUp, Event::KeyUp, Event::Drop]);
    assert_eq!(ids(&state.board, 0), ["mom", "milk", "dog"]);
}

#[test]
fn deleting_the_carried_card_resets_drag_state() {
    let mut state = loaded_state();
    send(&mut state, &[Event::PickUp]);
    assert_eq!(state.columns[0].drag.dragging_id(), Some("milk"));

    state.board.delete_card("milk").unwrap();
    state.reconcile();
    assert!(state.columns[0].drag.dragging_id().is_none());

    send(&mut state, &[Event::AbortDrag]);
    assert!(state.gesture.is_none());
}

#[test]
fn add_card_through_the_form() {
    let mut state = loaded_state();
    send(&mut state, &[Event::FocusRight, Event::ToggleInput]);
    assert_eq!(state.key_focus(), KeyFocus::Form);

    for c in "  File taxes ".chars() {
        send(&mut state, &[Event::Char(c)]);
    }
    send(&mut state, &[Event::Confirm, Event::Escape]);

    let done = state.board.columns[1].cards.as_ref().unwrap();
    assert_eq!(done.last().and_then(|c| c.text()), Some("File taxes"));
    assert_eq!(state.key_focus(), KeyFocus::Cards);
    assert!(state.board.columns[1].draft.is_empty());
}

#[test]
fn viewmodel_reflects_loading_then_cards() {
    let mut state = zanban::AppState::new(Board::loading(&["Todo", "Done"]), Theme::default());
    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.header.badge.is_none());
    assert!(vm.empty_state.is_some());

    let board = Board::from_seed(SEED, SeedFormat::Toml).unwrap();
    handle_event(&mut state, &Event::BoardLoaded { board }).unwrap();
    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.header.badge.as_deref(), Some("3"));
    assert_eq!(vm.header.position, "1/2");
    assert_eq!(vm.rows.len(), 3);
    assert!(vm.empty_state.is_none());
}
