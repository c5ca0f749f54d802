//! Keyboard focus and drag gesture state for the plugin.
//!
//! A terminal has no pointer, so the plugin turns key presses into the gestures
//! a column understands. [`KeyFocus`] decides where typed characters go, and
//! [`DragGesture`] stands in for the pointer while a card is being carried.
//!
//! # State Machine
//!
//! ```text
//!            '/'                      'a'
//!  Filter ◀────── Cards ──────────────────▶ Form
//!    │  Enter/Esc   ▲   Esc / Enter / Tab     │
//!    └──────────────┘◀────────────────────────┘
//! ```
//!
//! `Form` is not stored; it is derived from the focused column's input mode so
//! the column stays the single source of truth for form visibility.

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFocus {
    /// Navigation, drag and card commands.
    Cards,

    /// Typing into the board-wide filter query.
    ///
    /// Enter keeps the query and returns to `Cards`; Esc clears it.
    Filter,

    /// Typing into the focused column's inline form.
    Form,
}

/// A card being carried between drop zones.
///
/// Lives from pick-up to drop or abort. `drop_cursor` indexes the zone list of
/// the focused column, which may differ from `source` during a cross-column move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    /// Column the gesture started in.
    pub source: usize,
    /// Card being carried.
    pub card_id: String,
    /// Targeted zone position in the focused column.
    pub drop_cursor: usize,
}
