//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the plugin's state container. It pairs the
//! authoritative [`Board`] (the owner of all cards) with one [`ColumnState`] per
//! column (transient interaction state), and adds the keyboard concerns a
//! terminal needs: focused column, per-column cursors, the board-wide filter
//! query and the carried-card gesture.
//!
//! # Data Flow
//!
//! ```text
//! Board + filter ──▶ ColumnProps ──▶ ColumnState::handle ──▶ Intents
//!    ▲                                                          │
//!    └──────────────────── Board::dispatch ◀────────────────────┘
//! ```
//!
//! After every owner mutation the column states are reconciled against the new
//! props, so drag state never outlives the card it refers to.
//!
//! # Example
//!
//! ```rust
//! use zanban::app::AppState;
//! use zanban::domain::{Board, Card};
//! use zanban::ui::Theme;
//!
//! let mut board = Board::with_titles(&["Todo"]);
//! board.columns[0].cards = Some(vec![Card::new("a", "Buy milk")]);
//!
//! let state = AppState::new(board, Theme::default());
//! assert_eq!(state.selected_card_id().as_deref(), Some("a"));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::modes::{DragGesture, KeyFocus};
use crate::column::{filter_cards, ColumnEvent, ColumnProps, ColumnState, ColumnView};
use crate::domain::Board;
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardRow, EmptyState, FooterInfo, HeaderInfo, ListRow, TextBoxInfo, UIViewModel, ZoneRow,
};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authoritative card data; the owner every column intent is sent to.
    pub board: Board,

    /// Transient interaction state, one entry per board column.
    pub columns: Vec<ColumnState>,

    /// Index of the column on screen.
    pub focused: usize,

    /// Zero-based cursor per column, indexing that column's visible cards.
    pub cursors: Vec<usize>,

    /// Board-wide filter query, shared by every column.
    pub filter_query: String,

    /// Whether keystrokes currently edit the filter query.
    pub filter_focused: bool,

    /// Card being carried between drop zones, if any.
    pub gesture: Option<DragGesture>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

/// Builds the props column `column` is rendered with.
///
/// Out-of-range columns get empty props, which render as loading.
#[must_use]
pub fn column_props<'a>(board: &'a Board, filter_query: &'a str, column: usize) -> ColumnProps<'a> {
    board
        .columns
        .get(column)
        .map_or_else(ColumnProps::default, |data| ColumnProps {
            title: Some(data.title.as_str()),
            filter_value: Some(filter_query),
            cards: data.cards.as_deref(),
            text: Some(data.draft.as_str()),
        })
}

impl AppState {
    /// Creates the state for a board, with fresh interaction state per column.
    #[must_use]
    pub fn new(board: Board, theme: Theme) -> Self {
        let count = board.columns.len();
        Self {
            board,
            columns: vec![ColumnState::default(); count],
            focused: 0,
            cursors: vec![0; count],
            filter_query: String::new(),
            filter_focused: false,
            gesture: None,
            theme,
        }
    }

    /// Swaps in a newly loaded board, resetting all interaction state.
    pub fn replace_board(&mut self, board: Board) {
        let count = board.columns.len();
        tracing::debug!(columns = count, "board replaced");

        self.board = board;
        self.columns = vec![ColumnState::default(); count];
        self.cursors = vec![0; count];
        self.focused = self.focused.min(count.saturating_sub(1));
        self.gesture = None;
    }

    /// Props for column `column` under the current filter.
    #[must_use]
    pub fn props(&self, column: usize) -> ColumnProps<'_> {
        column_props(&self.board, &self.filter_query, column)
    }

    /// Where keyboard input is routed right now.
    #[must_use]
    pub fn key_focus(&self) -> KeyFocus {
        if self.filter_focused {
            KeyFocus::Filter
        } else if self.gesture.is_none()
            && self
                .columns
                .get(self.focused)
                .is_some_and(|column| column.input.is_composing())
        {
            KeyFocus::Form
        } else {
            KeyFocus::Cards
        }
    }

    /// Ids of the cards visible in `column`, in display order.
    #[must_use]
    pub fn visible_ids(&self, column: usize) -> Vec<String> {
        let props = self.props(column);
        filter_cards(props.cards, props.filter_value)
            .visible
            .map(|cards| cards.iter().map(|card| card.id.clone()).collect())
            .unwrap_or_default()
    }

    /// Id of the card under the cursor in the focused column.
    #[must_use]
    pub fn selected_card_id(&self) -> Option<String> {
        let cursor = self.cursors.get(self.focused).copied().unwrap_or(0);
        self.visible_ids(self.focused).into_iter().nth(cursor)
    }

    /// Moves the cursor down by one card, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_ids(self.focused).len();
        if let Some(cursor) = self.cursors.get_mut(self.focused) {
            if len > 0 {
                *cursor = (*cursor + 1) % len;
            }
        }
    }

    /// Moves the cursor up by one card, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_ids(self.focused).len();
        if let Some(cursor) = self.cursors.get_mut(self.focused) {
            if len > 0 {
                *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
            }
        }
    }

    /// Moves the drop cursor towards the end zone.
    pub fn move_drop_cursor_down(&mut self) {
        let last_zone = self.visible_ids(self.focused).len();
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.drop_cursor = (gesture.drop_cursor + 1).min(last_zone);
        }
    }

    /// Moves the drop cursor towards the first zone.
    pub fn move_drop_cursor_up(&mut self) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.drop_cursor = gesture.drop_cursor.saturating_sub(1);
        }
    }

    /// Focuses the column `delta` steps away, stopping at the board edges.
    pub fn shift_focus(&mut self, delta: isize) {
        if self.columns.is_empty() {
            return;
        }
        let last = self.columns.len() - 1;
        self.focused = self.focused.saturating_add_signed(delta).min(last);
        self.clamp_cursors();
    }

    /// Sends a UI event to column `column` and applies the resulting intents.
    ///
    /// Intents are forwarded to the board in emission order. Rejected intents
    /// are logged and leave column state untouched. Returns whether anything
    /// changed that needs a render.
    pub fn dispatch_column_event(&mut self, column: usize, event: &ColumnEvent) -> bool {
        let (render, intents) = {
            let props = column_props(&self.board, &self.filter_query, column);
            let Some(state) = self.columns.get_mut(column) else {
                tracing::debug!(column, "event for unknown column ignored");
                return false;
            };
            state.handle(&props, event)
        };

        let mut changed = render;
        for intent in intents {
            match self.board.dispatch(column, &intent) {
                Ok(()) => changed = true,
                Err(e) => tracing::warn!(error = %e, intent = ?intent, "board rejected intent"),
            }
        }

        if changed {
            self.reconcile();
        }
        changed
    }

    /// Re-validates every column's interaction state against current props.
    pub fn reconcile(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            let props = column_props(&self.board, &self.filter_query, index);
            column.reconcile(&props);
        }
        self.clamp_cursors();
    }

    /// Places the focused column's cursor on card `id` if it is visible there.
    pub fn follow_card(&mut self, id: &str) {
        let Some(position) = self.visible_ids(self.focused).iter().position(|v| v == id) else {
            return;
        };
        if let Some(cursor) = self.cursors.get_mut(self.focused) {
            *cursor = position;
        }
    }

    /// Clamps cursors (and the drop cursor) to the visible cards.
    pub fn clamp_cursors(&mut self) {
        for column in 0..self.cursors.len() {
            let len = self.visible_ids(column).len();
            self.cursors[column] = self.cursors[column].min(len.saturating_sub(1));
        }

        let zones = self.visible_ids(self.focused).len();
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.drop_cursor = gesture.drop_cursor.min(zones);
        }
    }

    /// Computes a renderable UI view model for the focused column.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Build every row: cards, interleaved with drop zones while carrying
    /// 2. Find the focus row (drop cursor while carrying, card cursor otherwise)
    /// 3. Center a window of the available height on it, then pull the window
    ///    back from the end so it stays full
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let Some(column) = self.columns.get(self.focused) else {
            return UIViewModel {
                header: HeaderInfo {
                    badge: None,
                    title: "No columns".to_string(),
                    position: "0/0".to_string(),
                    form_open: false,
                },
                filter_bar: None,
                input_form: None,
                result_count: None,
                rows: vec![],
                empty_state: Some(EmptyState {
                    message: "This board has no columns".to_string(),
                    subtitle: "Set `columns` or `board_file` in the plugin configuration".to_string(),
                }),
                footer: self.compute_footer(),
            };
        };

        let props = self.props(self.focused);
        let view = column.view(&props);
        let focus = self.key_focus();

        let filter_bar = (self.filter_focused || !self.filter_query.is_empty()).then(|| TextBoxInfo {
            label: "Filter".to_string(),
            text: self.filter_query.clone(),
            focused: focus == KeyFocus::Filter,
        });
        let input_form = view.input_form.map(|draft| TextBoxInfo {
            label: "New card".to_string(),
            text: draft.to_string(),
            focused: focus == KeyFocus::Form,
        });

        let (all_rows, focus_row) = self.compute_rows(&view, cols);
        let available = Self::calculate_available_rows(
            rows,
            filter_bar.is_some(),
            input_form.is_some(),
            view.result_count.is_some(),
        );

        let mut visible_start = focus_row.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(all_rows.len());
        if visible_end - visible_start < available && all_rows.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        UIViewModel {
            header: HeaderInfo {
                badge: view.total_count.map(|n| n.to_string()),
                title: view.title.unwrap_or("Untitled").to_string(),
                position: format!("{}/{}", self.focused + 1, self.columns.len()),
                form_open: column.input.is_composing(),
            },
            filter_bar,
            input_form,
            result_count: view.result_count,
            rows: all_rows[visible_start..visible_end].to_vec(),
            empty_state: self.compute_empty_state(&view),
            footer: self.compute_footer(),
        }
    }

    /// Builds every list row and returns it with the index of the focus row.
    fn compute_rows(&self, view: &ColumnView<'_>, cols: usize) -> (Vec<ListRow>, usize) {
        const ROW_CHROME: usize = 6;

        let Some(visible) = &view.visible else {
            return (vec![], 0);
        };

        let cursor = self.cursors.get(self.focused).copied().unwrap_or(0);
        let carrying = self.gesture.as_ref();
        let max_text = cols.saturating_sub(ROW_CHROME).max(1);

        let mut rows = Vec::with_capacity(visible.len() * 2 + 1);
        let mut focus_row = 0;

        let push_zone = |rows: &mut Vec<ListRow>, focus_row: &mut usize, k: usize| {
            if let Some(gesture) = carrying {
                let targeted = gesture.drop_cursor == k;
                if targeted {
                    *focus_row = rows.len();
                }
                rows.push(ListRow::Zone(ZoneRow {
                    targeted,
                    disabled: view.zones.get(k).is_some_and(|zone| zone.disabled),
                }));
            }
        };

        for (k, card) in visible.iter().enumerate() {
            push_zone(&mut rows, &mut focus_row, k);

            let full = card.text().unwrap_or("(untitled)");
            let text = truncate_chars(full, max_text);
            let shown = text.chars().count();
            let highlight_ranges = card
                .text()
                .map(|t| view.keywords.highlight_ranges(t))
                .unwrap_or_default()
                .into_iter()
                .filter(|&(start, _)| start < shown)
                .map(|(start, end)| (start, end.min(shown)))
                .collect();

            let is_selected = carrying.is_none() && k == cursor;
            if is_selected {
                focus_row = rows.len();
            }
            rows.push(ListRow::Card(CardRow {
                text,
                is_selected,
                is_dragging: view.dragging.as_deref() == Some(card.id.as_str()),
                highlight_ranges,
            }));
        }
        push_zone(&mut rows, &mut focus_row, visible.len());

        (rows, focus_row)
    }

    fn compute_empty_state(&self, view: &ColumnView<'_>) -> Option<EmptyState> {
        let visible = match &view.visible {
            None => {
                return Some(EmptyState {
                    message: "Loading...".to_string(),
                    subtitle: "Waiting for the board to load".to_string(),
                })
            }
            Some(visible) => visible,
        };

        if !visible.is_empty() || self.gesture.is_some() {
            return None;
        }

        if view.total_count == Some(0) {
            Some(EmptyState {
                message: "No cards yet".to_string(),
                subtitle: "Press 'a' to add one".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No matching cards".to_string(),
                subtitle: "Press Esc to clear the filter".to_string(),
            })
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let pairs: &[(&str, &str)] = if self.gesture.is_some() {
            &[("j/k", "target"), ("h/l", "column"), ("Space/Enter", "drop"), ("Esc", "cancel")]
        } else {
            match self.key_focus() {
                KeyFocus::Filter => &[("type", "filter"), ("Enter", "keep"), ("Esc", "clear")],
                KeyFocus::Form => &[("type", "edit"), ("Enter", "add"), ("Tab", "hide"), ("Esc", "cancel")],
                KeyFocus::Cards => &[
                    ("j/k", "move"),
                    ("h/l", "column"),
                    ("Space", "pick up"),
                    ("a", "add"),
                    ("d", "delete"),
                    ("/", "filter"),
                    ("q", "quit"),
                ],
            }
        };

        FooterInfo {
            hints: pairs
                .iter()
                .map(|(key, desc)| ((*key).to_string(), (*desc).to_string()))
                .collect(),
        }
    }

    /// Rows left for the list after header, borders, boxes and footer.
    const fn calculate_available_rows(
        total_rows: usize,
        filter_bar: bool,
        input_form: bool,
        result_line: bool,
    ) -> usize {
        let mut chrome = 6;
        if filter_bar {
            chrome += 3;
        }
        if input_form {
            chrome += 3;
        }
        if result_line {
            chrome += 1;
        }
        total_rows.saturating_sub(chrome)
    }
}
