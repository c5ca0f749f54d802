//! The column interaction core.
//!
//! A column is an ordered list of cards that can be filtered, dragged between
//! drop zones, deleted, and extended through an inline form. This module holds
//! the logic with non-trivial invariants and nothing else: it owns no card data,
//! performs no I/O and never fails.
//!
//! # Modules
//!
//! - [`filter`]: Keyword parsing and visible-subset derivation
//! - [`drag`]: Drop zones, the disablement rule and move intents
//! - [`input`]: Idle/composing toggle for the inline form
//! - [`intent`]: Messages sent to the owner of the cards
//! - [`state`]: Composition of the above behind a single event entry point
//!
//! Dependency order, leaves first: filter → drag → input → state.

pub mod drag;
pub mod filter;
pub mod input;
pub mod intent;
pub mod state;

pub use drag::{DragState, DragTracker, DropZone, ZoneIndex, ZoneView};
pub use filter::{filter_cards, FilterOutcome, Keywords};
pub use input::InputMode;
pub use intent::Intent;
pub use state::{ColumnEvent, ColumnProps, ColumnState, ColumnView};
