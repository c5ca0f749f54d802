//! Composed column: transient interaction state plus per-render derivation.
//!
//! [`ColumnState`] is the only stateful part of a column. It holds the drag
//! tracker and the input mode; everything durable arrives as [`ColumnProps`] on
//! each call and leaves as [`Intent`]s. The flow is strictly unidirectional:
//!
//! ```text
//! ColumnProps ──▶ view() ──▶ ColumnView ──▶ renderer
//!      │
//! ColumnEvent ──▶ handle() ──▶ Vec<Intent> ──▶ owner ──▶ new ColumnProps
//! ```
//!
//! # Example
//!
//! ```rust
//! use zanban::column::{ColumnEvent, ColumnProps, ColumnState, DropZone, Intent};
//! use zanban::Card;
//!
//! let cards = vec![Card::new("a", "Buy milk"), Card::new("b", "Walk dog")];
//! let props = ColumnProps { cards: Some(&cards), ..ColumnProps::default() };
//! let mut column = ColumnState::default();
//!
//! let (_, intents) = column.handle(&props, &ColumnEvent::DragStarted("b".into()));
//! assert_eq!(intents, vec![Intent::DragStart { id: "b".into() }]);
//!
//! let (_, intents) = column.handle(&props, &ColumnEvent::Dropped(DropZone::before("a")));
//! assert_eq!(intents, vec![Intent::Drop { entered: Some("a".into()) }]);
//!
//! column.handle(&props, &ColumnEvent::DragEnded);
//! assert!(column.drag.dragging_id().is_none());
//! ```

use super::drag::{DragTracker, DropZone, ZoneIndex, ZoneView};
use super::filter::{filter_cards, Keywords};
use super::input::InputMode;
use super::intent::Intent;
use crate::domain::Card;

/// Inputs supplied by the owner on every render.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnProps<'a> {
    /// Column heading.
    pub title: Option<&'a str>,
    /// Free-text filter query.
    pub filter_value: Option<&'a str>,
    /// Card collection, `None` while loading.
    pub cards: Option<&'a [Card]>,
    /// Current draft text of the input form.
    pub text: Option<&'a str>,
}

/// UI events a column reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnEvent {
    /// The add button was pressed.
    AddClicked,
    /// The draft text was edited.
    TextChanged(String),
    /// The form was submitted.
    ConfirmClicked,
    /// The form was dismissed.
    CancelClicked,
    /// A drag gesture began on a card.
    DragStarted(String),
    /// The drag gesture ended, dropped or not.
    DragEnded,
    /// The dragged card was released over a zone of this column.
    Dropped(DropZone),
    /// A card's delete control was pressed.
    DeleteClicked(String),
}

/// Everything a renderer needs for one column, derived from props and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// Column heading.
    pub title: Option<&'a str>,
    /// Unfiltered card count for the header badge, `None` while loading.
    pub total_count: Option<usize>,
    /// "N results" indicator, present only while a query is active.
    pub result_count: Option<usize>,
    /// Visible cards, `None` while loading.
    pub visible: Option<Vec<&'a Card>>,
    /// Drop zones with their enabled state; empty while loading.
    pub zones: Vec<ZoneView>,
    /// Card being dragged from this column.
    pub dragging: Option<String>,
    /// Draft shown in the input form, `None` when the form is hidden.
    pub input_form: Option<&'a str>,
    /// Keywords used to filter, for match highlighting.
    pub keywords: Keywords,
}

/// Transient interaction state of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnState {
    /// Drag gesture tracker.
    pub drag: DragTracker,
    /// Input form visibility.
    pub input: InputMode,
}

impl ColumnState {
    /// Derives the renderable view of the column.
    #[must_use]
    pub fn view<'a>(&self, props: &ColumnProps<'a>) -> ColumnView<'a> {
        let outcome = filter_cards(props.cards, props.filter_value);

        let zones = outcome.visible.as_deref().map_or_else(Vec::new, |visible| {
            self.drag.zones(&ZoneIndex::new(visible))
        });

        ColumnView {
            title: props.title,
            total_count: outcome.total_count,
            result_count: outcome.result_count,
            visible: outcome.visible,
            zones,
            dragging: self.drag.dragging_id().map(String::from),
            input_form: self
                .input
                .is_composing()
                .then(|| props.text.unwrap_or_default()),
            keywords: outcome.keywords,
        }
    }

    /// Drops drag state that refers to a card no longer visible.
    ///
    /// Called after every owner update so the drag state always refers to a
    /// rendered card. Returns `true` if anything was reset.
    pub fn reconcile(&mut self, props: &ColumnProps<'_>) -> bool {
        if self.drag.dragging_id().is_none() {
            return false;
        }

        let outcome = filter_cards(props.cards, props.filter_value);
        let visible = outcome.visible.unwrap_or_default();
        self.drag.reconcile(&ZoneIndex::new(&visible))
    }

    /// Processes one UI event.
    ///
    /// Returns whether the column needs a re-render and the intents to forward
    /// to the owner, in emission order. Never fails: events that make no sense
    /// for the current render are ignored.
    pub fn handle(&mut self, props: &ColumnProps<'_>, event: &ColumnEvent) -> (bool, Vec<Intent>) {
        let _span = tracing::debug_span!("column_event", column = props.title, event = ?event).entered();

        match event {
            ColumnEvent::AddClicked => {
                self.input.toggle();
                tracing::debug!(mode = ?self.input, "input mode toggled");
                (true, vec![])
            }
            ColumnEvent::TextChanged(value) => (
                false,
                vec![Intent::TextChange {
                    value: value.clone(),
                }],
            ),
            ColumnEvent::ConfirmClicked => (false, vec![self.input.confirm()]),
            ColumnEvent::CancelClicked => {
                let intent = self.input.cancel();
                (true, vec![intent])
            }
            ColumnEvent::DragStarted(id) => {
                let outcome = filter_cards(props.cards, props.filter_value);
                let visible = outcome.visible.unwrap_or_default();
                if ZoneIndex::new(&visible).position(id).is_none() {
                    tracing::debug!(card_id = %id, "drag start on card that is not rendered, ignoring");
                    return (false, vec![]);
                }

                self.drag.begin(id);
                (true, vec![Intent::DragStart { id: id.clone() }])
            }
            ColumnEvent::DragEnded => {
                self.drag.end();
                (true, vec![])
            }
            ColumnEvent::Dropped(zone) => {
                let outcome = filter_cards(props.cards, props.filter_value);
                let Some(visible) = outcome.visible else {
                    return (false, vec![]);
                };

                self.drag
                    .drop_on(zone, &ZoneIndex::new(&visible))
                    .map_or((false, vec![]), |intent| (true, vec![intent]))
            }
            ColumnEvent::DeleteClicked(id) => (false, vec![Intent::Delete { id: id.clone() }]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![Card::new("a", "Buy milk"), Card::new("b", "Walk dog"), Card::new("c", "Call mom")]
    }

    #[test]
    fn test_view_while_loading() {
        let state = ColumnState::default();
        let props = ColumnProps { title: Some("Todo"), filter_value: Some("milk"), ..ColumnProps::default() };
        let view = state.view(&props);
        assert!(view.visible.is_none());
        assert!(view.zones.is_empty());
        assert_eq!(view.total_count, None);
        assert_eq!(view.title, Some("Todo"));
    }

    #[test]
    fn test_view_zones_follow_filter() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), filter_value: Some("m"), ..ColumnProps::default() };
        let view = ColumnState::default().view(&props);

        let zones: Vec<DropZone> = view.zones.into_iter().map(|z| z.zone).collect();
        assert_eq!(zones, vec![DropZone::before("a"), DropZone::before("c"), DropZone::End]);
        assert_eq!(view.result_count, Some(2));
        assert_eq!(view.total_count, Some(3));
    }

    #[test]
    fn test_form_visible_only_while_composing() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), text: None, ..ColumnProps::default() };
        let mut state = ColumnState::default();
        assert_eq!(state.view(&props).input_form, None);

        state.handle(&props, &ColumnEvent::AddClicked);
        assert_eq!(state.view(&props).input_form, Some(""));

        let props = ColumnProps { text: Some("draft"), ..props };
        assert_eq!(state.view(&props).input_form, Some("draft"));
    }

    #[test]
    fn test_cancel_closes_form_then_notifies() {
        let props = ColumnProps::default();
        let mut state = ColumnState::default();
        state.handle(&props, &ColumnEvent::AddClicked);

        let (render, intents) = state.handle(&props, &ColumnEvent::CancelClicked);
        assert!(render);
        assert_eq!(intents, vec![Intent::Cancel]);
        assert_eq!(state.input, InputMode::Idle);
    }

    #[test]
    fn test_confirm_leaves_form_open() {
        let props = ColumnProps::default();
        let mut state = ColumnState::default();
        state.handle(&props, &ColumnEvent::AddClicked);

        let (_, intents) = state.handle(&props, &ColumnEvent::ConfirmClicked);
        assert_eq!(intents, vec![Intent::Confirm]);
        assert_eq!(state.input, InputMode::Composing);
    }

    #[test]
    fn test_drag_start_on_hidden_card_is_ignored() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), filter_value: Some("dog"), ..ColumnProps::default() };
        let mut state = ColumnState::default();

        let (_, intents) = state.handle(&props, &ColumnEvent::DragStarted("a".into()));
        assert!(intents.is_empty());
        assert!(state.drag.dragging_id().is_none());
    }

    #[test]
    fn test_drop_on_disabled_zone_emits_nothing() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), ..ColumnProps::default() };
        let mut state = ColumnState::default();
        state.handle(&props, &ColumnEvent::DragStarted("a".into()));

        let (render, intents) = state.handle(&props, &ColumnEvent::Dropped(DropZone::before("b")));
        assert!(!render);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_drag_end_after_external_delete_resets() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), ..ColumnProps::default() };
        let mut state = ColumnState::default();
        state.handle(&props, &ColumnEvent::DragStarted("b".into()));

        let remaining = vec![cards[0].clone()];
        let props = ColumnProps { cards: Some(&remaining), ..ColumnProps::default() };
        state.handle(&props, &ColumnEvent::DragEnded);
        assert!(state.drag.dragging_id().is_none());
    }

    #[test]
    fn test_reconcile_clears_vanished_drag() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), ..ColumnProps::default() };
        let mut state = ColumnState::default();
        state.handle(&props, &ColumnEvent::DragStarted("b".into()));
        assert!(!state.reconcile(&props));

        let filtered = ColumnProps { filter_value: Some("milk"), ..props };
        assert!(state.reconcile(&filtered));
        assert!(state.view(&filtered).dragging.is_none());
    }

    #[test]
    fn test_input_and_drag_are_independent() {
        let cards = cards();
        let props = ColumnProps { cards: Some(&cards), ..ColumnProps::default() };
        let mut state = ColumnState::default();

        state.handle(&props, &ColumnEvent::AddClicked);
        state.handle(&props, &ColumnEvent::DragStarted("c".into()));
        state.handle(&props, &ColumnEvent::CancelClicked);
        assert_eq!(state.drag.dragging_id(), Some("c"));

        state.handle(&props, &ColumnEvent::AddClicked);
        state.handle(&props, &ColumnEvent::DragEnded);
        assert!(state.input.is_composing());
    }
}
