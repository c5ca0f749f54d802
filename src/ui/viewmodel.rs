//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from the focused
//! column's [`ColumnView`](crate::column::ColumnView) and consumed by the
//! renderer. They carry display-ready data only: formatted strings, row flags and
//! highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use zanban::ui::{CardRow, FooterInfo, HeaderInfo, ListRow, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         badge: Some("2".to_string()),
//!         title: "Todo".to_string(),
//!         position: "1/3".to_string(),
//!         form_open: false,
//!     },
//!     filter_bar: None,
//!     input_form: None,
//!     result_count: None,
//!     rows: vec![ListRow::Card(CardRow {
//!         text: "Buy milk".to_string(),
//!         is_selected: true,
//!         is_dragging: false,
//!         highlight_ranges: vec![],
//!     })],
//!     empty_state: None,
//!     footer: FooterInfo { hints: vec![("q".to_string(), "quit".to_string())] },
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

/// Complete UI view model for rendering the focused column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Column header.
    pub header: HeaderInfo,

    /// Filter query box, shown while typing or while a query is active.
    pub filter_bar: Option<TextBoxInfo>,

    /// Inline creation form, shown while the column is composing.
    pub input_form: Option<TextBoxInfo>,

    /// "N results" indicator, present only while filtering.
    pub result_count: Option<usize>,

    /// Windowed list rows (cards, and drop zones during a drag).
    pub rows: Vec<ListRow>,

    /// Message replacing the list while loading or when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Key hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Unfiltered card count, absent while loading.
    pub badge: Option<String>,
    /// Column title.
    pub title: String,
    /// Column position on the board, e.g. `"2/3"`.
    pub position: String,
    /// Whether the add button is in its "open" state.
    pub form_open: bool,
}

/// A single-line text box (filter bar or inline form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBoxInfo {
    /// Label printed before the text.
    pub label: String,
    /// Current text.
    pub text: String,
    /// Whether keystrokes currently go to this box.
    pub focused: bool,
}

/// One row of the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// A drop zone, rendered only while a card is being carried.
    Zone(ZoneRow),
    /// A card.
    Card(CardRow),
}

/// Display state of a drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRow {
    /// The drop cursor is on this zone.
    pub targeted: bool,
    /// Dropping here would be a no-op; the zone rejects drops.
    pub disabled: bool,
}

/// Display state of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    /// Card text, already truncated to the available width.
    pub text: String,
    /// Whether the card is under the cursor.
    pub is_selected: bool,
    /// Whether the card is being carried.
    pub is_dragging: bool,
    /// Character ranges matching the filter keywords, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// `(key, description)` pairs.
    pub hints: Vec<(String, String)>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
