//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes keyboard input
//! and board lifecycle events, translating them into column events, owner
//! updates and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Keyboard gestures become [`ColumnEvent`]s on the focused (or source) column
//! 4. Emitted intents are applied to the board and columns are reconciled
//! 5. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `FocusLeft`, `FocusRight`
//! - **Drag**: `PickUp`, `Drop`, `AbortDrag`
//! - **Editing**: `ToggleInput`, `Char`, `Backspace`, `Confirm`, `Escape`, `Delete`
//! - **Filtering**: `FilterMode`
//! - **Lifecycle**: `BoardLoaded`, `BoardLoadFailed`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use zanban::app::{handle_event, AppState, Event};
//! use zanban::domain::Board;
//! use zanban::ui::Theme;
//!
//! let mut state = AppState::new(Board::with_titles(&["Todo"]), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{DragGesture, KeyFocus};
use crate::app::{Action, AppState};
use crate::column::{ColumnEvent, DropZone};
use crate::domain::error::Result;
use crate::domain::Board;

/// Events triggered by user input or board loading.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card cursor down (wraps), or the drop cursor while carrying.
    KeyDown,
    /// Moves the card cursor up (wraps), or the drop cursor while carrying.
    KeyUp,
    /// Focuses the column to the left.
    FocusLeft,
    /// Focuses the column to the right.
    FocusRight,

    /// Picks up the card under the cursor, or drops the carried card.
    PickUp,
    /// Drops the carried card on the targeted zone.
    Drop,
    /// Puts the carried card back without moving it.
    AbortDrag,

    /// Opens or closes the inline form of the focused column.
    ToggleInput,
    /// Appends a character to the filter query or the draft.
    Char(char),
    /// Removes the last character of the filter query or the draft.
    Backspace,
    /// Submits the draft, or keeps the filter query and leaves the filter bar.
    Confirm,
    /// Cancels the current context: gesture, filter, form or active query.
    Escape,
    /// Deletes the card under the cursor.
    Delete,

    /// Focuses the filter bar.
    FilterMode,

    /// Replaces the loading board with the loaded one.
    BoardLoaded {
        /// Board read from the configured source.
        board: Board,
    },

    /// Reports that the configured board could not be read.
    ///
    /// Columns keep their titles and become empty so the board stays usable.
    BoardLoadFailed {
        /// Error message describing the failure.
        error: String,
    },

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, updating state and generating actions.
///
/// Returns `(should_render, actions)`. Intents the board rejects are logged
/// and otherwise ignored, so the handler itself only fails on conditions it
/// cannot recover from.
///
/// # Errors
///
/// Currently never returns an error; the `Result` is kept for parity with
/// the plugin runtime's error reporting.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.gesture.is_some() {
                state.move_drop_cursor_down();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.gesture.is_some() {
                state.move_drop_cursor_up();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::FocusLeft => {
            state.shift_focus(-1);
            Ok((true, vec![]))
        }
        Event::FocusRight => {
            state.shift_focus(1);
            Ok((true, vec![]))
        }
        Event::PickUp => {
            if state.gesture.is_some() {
                return Ok((drop_carried(state), vec![]));
            }
            Ok((pick_up(state), vec![]))
        }
        Event::Drop => Ok((drop_carried(state), vec![])),
        Event::AbortDrag => Ok((abort_drag(state), vec![])),
        Event::ToggleInput => {
            if state.gesture.is_some() {
                return Ok((false, vec![]));
            }
            let focused = state.focused;
            Ok((state.dispatch_column_event(focused, &ColumnEvent::AddClicked), vec![]))
        }
        Event::Char(c) => match state.key_focus() {
            KeyFocus::Filter => {
                state.filter_query.push(*c);
                tracing::trace!(query = %state.filter_query, char = %c, "filter query updated");
                state.reconcile();
                Ok((true, vec![]))
            }
            KeyFocus::Form => {
                let mut draft = focused_draft(state);
                draft.push(*c);
                let focused = state.focused;
                Ok((state.dispatch_column_event(focused, &ColumnEvent::TextChanged(draft)), vec![]))
            }
            KeyFocus::Cards => Ok((false, vec![])),
        },
        Event::Backspace => match state.key_focus() {
            KeyFocus::Filter => {
                state.filter_query.pop();
                state.reconcile();
                Ok((true, vec![]))
            }
            KeyFocus::Form => {
                let mut draft = focused_draft(state);
                if draft.pop().is_none() {
                    return Ok((false, vec![]));
                }
                let focused = state.focused;
                Ok((state.dispatch_column_event(focused, &ColumnEvent::TextChanged(draft)), vec![]))
            }
            KeyFocus::Cards => Ok((false, vec![])),
        },
        Event::Confirm => match state.key_focus() {
            KeyFocus::Filter => {
                tracing::debug!(query = %state.filter_query, "filter kept");
                state.filter_focused = false;
                Ok((true, vec![]))
            }
            KeyFocus::Form => {
                let focused = state.focused;
                let before = state.visible_ids(focused).len();
                let render = state.dispatch_column_event(focused, &ColumnEvent::ConfirmClicked);
                let after = state.visible_ids(focused);
                if after.len() > before {
                    if let Some(created) = after.last().cloned() {
                        state.follow_card(&created);
                    }
                }
                Ok((render, vec![]))
            }
            KeyFocus::Cards => {
                if state.gesture.is_some() {
                    return Ok((drop_carried(state), vec![]));
                }
                Ok((false, vec![]))
            }
        },
        Event::Escape => {
            if state.gesture.is_some() {
                return Ok((abort_drag(state), vec![]));
            }
            match state.key_focus() {
                KeyFocus::Filter => {
                    state.filter_focused = false;
                    state.filter_query.clear();
                    state.reconcile();
                    Ok((true, vec![]))
                }
                KeyFocus::Form => {
                    let focused = state.focused;
                    Ok((state.dispatch_column_event(focused, &ColumnEvent::CancelClicked), vec![]))
                }
                KeyFocus::Cards => {
                    if state.filter_query.is_empty() {
                        return Ok((false, vec![]));
                    }
                    state.filter_query.clear();
                    state.reconcile();
                    Ok((true, vec![]))
                }
            }
        }
        Event::Delete => {
            if state.gesture.is_some() || state.key_focus() != KeyFocus::Cards {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_card_id() else {
                tracing::debug!("no card selected to delete");
                return Ok((false, vec![]));
            };
            let focused = state.focused;
            Ok((state.dispatch_column_event(focused, &ColumnEvent::DeleteClicked(id)), vec![]))
        }
        Event::FilterMode => {
            if state.gesture.is_some() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering filter mode");
            state.filter_focused = true;
            Ok((true, vec![]))
        }
        Event::BoardLoaded { board } => {
            if &state.board == board {
                tracing::debug!("board unchanged, skipping render");
                return Ok((false, vec![]));
            }
            state.replace_board(board.clone());
            Ok((true, vec![]))
        }
        Event::BoardLoadFailed { error } => {
            tracing::warn!(error = %error, "board load failed, starting empty");
            let titles: Vec<String> = state.board.titles().into_iter().map(String::from).collect();
            state.replace_board(Board::with_titles(&titles));
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn focused_draft(state: &AppState) -> String {
    state
        .board
        .columns
        .get(state.focused)
        .map(|column| column.draft.clone())
        .unwrap_or_default()
}

/// Starts carrying the card under the cursor.
fn pick_up(state: &mut AppState) -> bool {
    if state.key_focus() != KeyFocus::Cards {
        return false;
    }
    let Some(card_id) = state.selected_card_id() else {
        tracing::debug!("nothing to pick up");
        return false;
    };

    let source = state.focused;
    state.dispatch_column_event(source, &ColumnEvent::DragStarted(card_id.clone()));
    if state.board.dragging() != Some(card_id.as_str()) {
        return false;
    }

    let drop_cursor = state.cursors.get(source).copied().unwrap_or(0);
    tracing::debug!(card_id = %card_id, source, "card picked up");
    state.gesture = Some(DragGesture {
        source,
        card_id,
        drop_cursor,
    });
    true
}

/// Drops the carried card on the targeted zone of the focused column.
///
/// The source column always receives exactly one drag-end afterwards,
/// whether or not the drop was accepted.
fn drop_carried(state: &mut AppState) -> bool {
    let Some(gesture) = state.gesture.take() else {
        return false;
    };

    let target = state.focused;
    let zone = state
        .visible_ids(target)
        .into_iter()
        .nth(gesture.drop_cursor)
        .map_or(DropZone::End, DropZone::Before);

    tracing::debug!(card_id = %gesture.card_id, source = gesture.source, target, zone = ?zone, "dropping card");
    state.dispatch_column_event(target, &ColumnEvent::Dropped(zone));
    state.dispatch_column_event(gesture.source, &ColumnEvent::DragEnded);
    state.follow_card(&gesture.card_id);
    true
}

fn abort_drag(state: &mut AppState) -> bool {
    let Some(gesture) = state.gesture.take() else {
        return false;
    };
    tracing::debug!(card_id = %gesture.card_id, "drag aborted");
    state.dispatch_column_event(gesture.source, &ColumnEvent::DragEnded);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;
    use crate::ui::Theme;

    fn state() -> AppState {
        let mut board = Board::with_titles(&["Todo", "Done"]);
        board.columns[0].cards = Some(vec![
            Card::new("a", "Buy milk"),
            Card::new("b", "Walk dog"),
            Card::new("c", "Call mom"),
        ]);
        board.columns[1].cards = Some(vec![Card::new("d", "Pay rent")]);
        AppState::new(board, Theme::default())
    }

    fn ids(state: &AppState, column: usize) -> Vec<String> {
        state.board.columns[column]
            .cards
            .iter()
            .flatten()
            .map(|c| c.id.clone())
            .collect()
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    #[test]
    fn test_reorder_within_column() {
        let mut state = state();
        send(&mut state, &[Event::PickUp, Event::KeyDown, Event::KeyDown, Event::KeyDown, Event::Drop]);

        assert_eq!(ids(&state, 0), ["b", "c", "a"]);
        assert!(state.gesture.is_none());
        assert!(state.columns[0].drag.dragging_id().is_none());
        assert_eq!(state.selected_card_id().as_deref(), Some("a"));
    }

    #[test]
    fn test_drop_on_disabled_zone_ends_gesture_without_move() {
        let mut state = state();
        send(&mut state, &[Event::PickUp, Event::KeyDown, Event::Drop]);

        assert_eq!(ids(&state, 0), ["a", "b", "c"]);
        assert!(state.gesture.is_none());
        assert!(state.columns[0].drag.dragging_id().is_none());
    }

    #[test]
    fn test_move_across_columns() {
        let mut state = state();
        send(&mut state, &[Event::KeyDown, Event::PickUp, Event::FocusRight, Event::KeyUp, Event::Drop]);

        assert_eq!(ids(&state, 0), ["a", "c"]);
        assert_eq!(ids(&state, 1), ["b", "d"]);
        assert_eq!(state.selected_card_id().as_deref(), Some("b"));
        assert!(state.columns.iter().all(|c| c.drag.dragging_id().is_none()));
    }

    #[test]
    fn test_abort_leaves_board_untouched() {
        let mut state = state();
        send(&mut state, &[Event::PickUp, Event::FocusRight, Event::Escape]);

        assert_eq!(ids(&state, 0), ["a", "b", "c"]);
        assert!(state.gesture.is_none());
        assert!(state.columns[0].drag.dragging_id().is_none());
    }

    #[test]
    fn test_form_typing_and_confirm() {
        let mut state = state();
        send(
            &mut state,
            &[Event::ToggleInput, Event::Char('h'), Event::Char('i'), Event::Char('!'), Event::Backspace],
        );
        assert_eq!(state.key_focus(), KeyFocus::Form);
        assert_eq!(state.board.columns[0].draft, "hi");

        send(&mut state, &[Event::Confirm]);
        let cards = state.board.columns[0].cards.as_ref().unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3].text(), Some("hi"));
        assert_eq!(state.board.columns[0].draft, "");
        assert_eq!(state.key_focus(), KeyFocus::Form);
        assert_eq!(state.cursors[0], 3);
    }

    #[test]
    fn test_escape_cancels_form_and_clears_draft() {
        let mut state = state();
        send(&mut state, &[Event::ToggleInput, Event::Char('x'), Event::Escape]);
        assert_eq!(state.key_focus(), KeyFocus::Cards);
        assert_eq!(state.board.columns[0].draft, "");
    }

    #[test]
    fn test_filter_mode_and_escape() {
        let mut state = state();
        send(&mut state, &[Event::FilterMode, Event::Char('d'), Event::Char('o'), Event::Char('g')]);
        assert_eq!(state.selected_card_id().as_deref(), Some("b"));

        send(&mut state, &[Event::Confirm]);
        assert_eq!(state.key_focus(), KeyFocus::Cards);
        assert_eq!(state.filter_query, "dog");

        send(&mut state, &[Event::Escape]);
        assert!(state.filter_query.is_empty());
    }

    #[test]
    fn test_delete_selected() {
        let mut state = state();
        send(&mut state, &[Event::KeyUp, Event::Delete]);
        assert_eq!(ids(&state, 0), ["a", "b"]);
        assert_eq!(state.selected_card_id().as_deref(), Some("b"));
    }

    #[test]
    fn test_board_load_failed_keeps_titles() {
        let mut state = AppState::new(Board::loading(&["Todo", "Done"]), Theme::default());
        let (render, _) = handle_event(&mut state, &Event::BoardLoadFailed { error: "boom".into() }).unwrap();
        assert!(render);
        assert_eq!(state.board.titles(), ["Todo", "Done"]);
        assert!(state.board.columns.iter().all(|c| c.cards == Some(vec![])));
    }

    #[test]
    fn test_close_focus_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
