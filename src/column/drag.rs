//! Drag-and-drop tracking over a column's drop zones.
//!
//! A column exposes one drop zone before each visible card plus a trailing zone
//! after the last card ("move to end of column"). The [`DragTracker`] remembers
//! which card is being dragged, decides which zones would produce a no-op
//! reorder, and turns a drop on an enabled zone into an [`Intent::Drop`]. It never
//! reorders cards itself.
//!
//! # State Machine
//!
//! ```text
//!            begin(id)
//!   Idle ─────────────────▶ Dragging(id)
//!    ▲                            │
//!    └──────── end() ─────────────┘   (drop, drop elsewhere, or abort)
//! ```
//!
//! # Disablement Rule
//!
//! While dragging card `x` found at visible index `i`, the zone before card `i`
//! and the zone before card `i + 1` are disabled. The trailing zone is disabled
//! when `x` is the last visible card. A card that is not visible in this column
//! (dragged from elsewhere, or filtered out) disables nothing.
//!
//! # Example
//!
//! ```rust
//! use zanban::column::{DragTracker, DropZone, ZoneIndex};
//! use zanban::Card;
//!
//! let cards = [Card::new("a", "A"), Card::new("b", "B"), Card::new("c", "C")];
//! let visible: Vec<&Card> = cards.iter().collect();
//! let index = ZoneIndex::new(&visible);
//!
//! let mut tracker = DragTracker::default();
//! tracker.begin("b");
//!
//! assert!(!tracker.is_disabled(&DropZone::before("a"), &index));
//! assert!(tracker.is_disabled(&DropZone::before("b"), &index));
//! assert!(tracker.is_disabled(&DropZone::before("c"), &index));
//! assert!(!tracker.is_disabled(&DropZone::End, &index));
//! ```

use super::intent::Intent;
use crate::domain::Card;
use std::collections::HashMap;

/// An insertion point in a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropZone {
    /// The gap directly before the card with this id.
    Before(String),
    /// The trailing gap after the last card.
    End,
}

impl DropZone {
    /// Shorthand for [`DropZone::Before`].
    #[must_use]
    pub fn before(id: impl Into<String>) -> Self {
        Self::Before(id.into())
    }

    /// The card a drop here inserts before, `None` for the end of the column.
    #[must_use]
    pub fn entered(&self) -> Option<&str> {
        match self {
            Self::Before(id) => Some(id.as_str()),
            Self::End => None,
        }
    }
}

/// Current drag state of a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture started on the card with this id.
    Dragging(String),
}

/// Id to position lookup over the visible cards of one render.
///
/// Built once per render so adjacency checks do not depend on how the list is
/// laid out on screen.
#[derive(Debug, Clone, Default)]
pub struct ZoneIndex<'a> {
    order: Vec<&'a str>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> ZoneIndex<'a> {
    /// Indexes the visible cards in display order.
    #[must_use]
    pub fn new(visible: &[&'a Card]) -> Self {
        let order: Vec<&'a str> = visible.iter().map(|card| card.id.as_str()).collect();
        let positions = order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        Self { order, positions }
    }

    /// Visible position of `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Number of visible cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no card is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of a zone in the zone list (`0..=len`).
    ///
    /// `None` for a `Before` zone whose card is not visible.
    #[must_use]
    pub fn zone_position(&self, zone: &DropZone) -> Option<usize> {
        match zone {
            DropZone::Before(id) => self.position(id),
            DropZone::End => Some(self.len()),
        }
    }

    /// All zones in display order: one before each card, then the end zone.
    #[must_use]
    pub fn zones(&self) -> Vec<DropZone> {
        self.order
            .iter()
            .map(|id| DropZone::before(*id))
            .chain(std::iter::once(DropZone::End))
            .collect()
    }

    /// Zone at position `k` of [`zones`](Self::zones).
    #[must_use]
    pub fn zone_at(&self, k: usize) -> Option<DropZone> {
        match k.cmp(&self.len()) {
            std::cmp::Ordering::Less => Some(DropZone::before(self.order[k])),
            std::cmp::Ordering::Equal => Some(DropZone::End),
            std::cmp::Ordering::Greater => None,
        }
    }
}

/// A drop zone together with its enabled state for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneView {
    /// The zone.
    pub zone: DropZone,
    /// Whether the zone rejects drops.
    pub disabled: bool,
}

/// Tracks the drag gesture of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Id of the dragged card, if a gesture is active.
    #[must_use]
    pub fn dragging_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id.as_str()),
        }
    }

    /// Enters `Dragging(id)`, replacing any previous gesture.
    pub fn begin(&mut self, id: &str) {
        tracing::debug!(card_id = %id, "drag started");
        self.state = DragState::Dragging(id.to_string());
    }

    /// Returns to `Idle`. Called exactly once per gesture, whatever its outcome.
    pub fn end(&mut self) {
        if let DragState::Dragging(id) = &self.state {
            tracing::debug!(card_id = %id, "drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Clears a gesture whose card is no longer visible.
    ///
    /// Returns `true` when the state was reset.
    pub fn reconcile(&mut self, index: &ZoneIndex<'_>) -> bool {
        let stale = self
            .dragging_id()
            .is_some_and(|id| index.position(id).is_none());
        if stale {
            tracing::debug!(card_id = ?self.dragging_id(), "dragged card left the column, resetting drag state");
            self.state = DragState::Idle;
        }
        stale
    }

    /// Applies the disablement rule to `zone`.
    #[must_use]
    pub fn is_disabled(&self, zone: &DropZone, index: &ZoneIndex<'_>) -> bool {
        let Some(dragged) = self.dragging_id().and_then(|id| index.position(id)) else {
            return false;
        };

        index
            .zone_position(zone)
            .is_some_and(|k| k == dragged || k == dragged + 1)
    }

    /// Every zone of the render with its enabled state.
    #[must_use]
    pub fn zones(&self, index: &ZoneIndex<'_>) -> Vec<ZoneView> {
        index
            .zones()
            .into_iter()
            .map(|zone| {
                let disabled = self.is_disabled(&zone, index);
                ZoneView { zone, disabled }
            })
            .collect()
    }

    /// Resolves a drop on `zone` into a move intent.
    ///
    /// Returns `None` for disabled zones and for zones that do not exist in the
    /// current render. Does not end the gesture; drag-end arrives separately.
    #[must_use]
    pub fn drop_on(&self, zone: &DropZone, index: &ZoneIndex<'_>) -> Option<Intent> {
        if index.zone_position(zone).is_none() {
            tracing::debug!(zone = ?zone, "drop on unknown zone ignored");
            return None;
        }
        if self.is_disabled(zone, index) {
            tracing::debug!(zone = ?zone, "drop on disabled zone ignored");
            return None;
        }

        Some(Intent::Drop {
            entered: zone.entered().map(String::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Card> {
        vec![Card::new("a", "A"), Card::new("b", "B"), Card::new("c", "C")]
    }

    fn disabled_flags(tracker: &DragTracker, cards: &[Card]) -> Vec<bool> {
        let visible: Vec<&Card> = cards.iter().collect();
        let index = ZoneIndex::new(&visible);
        tracker.zones(&index).into_iter().map(|z| z.disabled).collect()
    }

    #[test]
    fn test_idle_disables_nothing() {
        let tracker = DragTracker::default();
        assert_eq!(disabled_flags(&tracker, &abc()), [false, false, false, false]);
    }

    #[test]
    fn test_dragging_middle_disables_own_and_next_gap() {
        let mut tracker = DragTracker::default();
        tracker.begin("b");
        assert_eq!(disabled_flags(&tracker, &abc()), [false, true, true, false]);
    }

    #[test]
    fn test_dragging_first_leaves_end_enabled() {
        let mut tracker = DragTracker::default();
        tracker.begin("a");
        assert_eq!(disabled_flags(&tracker, &abc()), [true, true, false, false]);
    }

    #[test]
    fn test_dragging_last_disables_end_zone() {
        let mut tracker = DragTracker::default();
        tracker.begin("c");
        assert_eq!(disabled_flags(&tracker, &abc()), [false, false, true, true]);
    }

    #[test]
    fn test_foreign_card_disables_nothing() {
        let mut tracker = DragTracker::default();
        tracker.begin("zz");
        assert_eq!(disabled_flags(&tracker, &abc()), [false, false, false, false]);
    }

    #[test]
    fn test_drop_emits_entered_or_end() {
        let cards = abc();
        let visible: Vec<&Card> = cards.iter().collect();
        let index = ZoneIndex::new(&visible);
        let mut tracker = DragTracker::default();
        tracker.begin("c");

        assert_eq!(
            tracker.drop_on(&DropZone::before("a"), &index),
            Some(Intent::Drop { entered: Some("a".to_string()) })
        );
        assert_eq!(tracker.drop_on(&DropZone::End, &index), None);
        assert_eq!(tracker.drop_on(&DropZone::before("c"), &index), None);
        assert_eq!(tracker.drop_on(&DropZone::before("gone"), &index), None);
    }

    #[test]
    fn test_drop_on_end_while_idle_targets_end() {
        let cards = abc();
        let visible: Vec<&Card> = cards.iter().collect();
        let index = ZoneIndex::new(&visible);
        let tracker = DragTracker::default();
        assert_eq!(
            tracker.drop_on(&DropZone::End, &index),
            Some(Intent::Drop { entered: None })
        );
    }

    #[test]
    fn test_reconcile_resets_when_card_vanishes() {
        let cards = vec![Card::new("a", "A")];
        let visible: Vec<&Card> = cards.iter().collect();
        let index = ZoneIndex::new(&visible);

        let mut tracker = DragTracker::default();
        tracker.begin("a");
        assert!(!tracker.reconcile(&index));

        let empty = ZoneIndex::new(&[]);
        assert!(tracker.reconcile(&empty));
        assert_eq!(tracker.state(), &DragState::Idle);
    }

    #[test]
    fn test_zone_at_bounds() {
        let cards = abc();
        let visible: Vec<&Card> = cards.iter().collect();
        let index = ZoneIndex::new(&visible);
        assert_eq!(index.zone_at(0), Some(DropZone::before("a")));
        assert_eq!(index.zone_at(3), Some(DropZone::End));
        assert_eq!(index.zone_at(4), None);
    }
}
