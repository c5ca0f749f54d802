//! Inline creation form visibility.
//!
//! A column shows its input form only while composing. The controller is a
//! two-state toggle; confirming and cancelling are delegated to the owner through
//! intents, and no validation of the draft happens here.

use super::intent::Intent;

/// Whether the inline creation form is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Form hidden.
    #[default]
    Idle,
    /// Form shown, draft being edited.
    Composing,
}

impl InputMode {
    /// Returns `true` while the form is shown.
    #[must_use]
    pub const fn is_composing(self) -> bool {
        matches!(self, Self::Composing)
    }

    /// Flips between `Idle` and `Composing` (the add button).
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Idle => Self::Composing,
            Self::Composing => Self::Idle,
        };
    }

    /// Requests submission. The mode is left for the owner to decide.
    #[must_use]
    pub const fn confirm(self) -> Intent {
        Intent::Confirm
    }

    /// Closes the form, then requests cancellation.
    ///
    /// The local reset never depends on what the owner does with the intent.
    #[must_use]
    pub fn cancel(&mut self) -> Intent {
        *self = Self::Idle;
        Intent::Cancel
    }
}
