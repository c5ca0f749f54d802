//! Card domain model.
//!
//! A card is the unit of content shown in a column: an opaque identifier that is
//! unique within the board, plus optional text. Cards are owned by the
//! [`Board`](super::Board); the column core only ever reads them.

use serde::{Deserialize, Serialize};

/// A single draggable, deletable, filterable card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Opaque identifier, unique within the owning board.
    pub id: String,
    /// Card body. Cards without text never match a non-empty filter.
    #[serde(default)]
    pub text: Option<String>,
}

impl Card {
    /// Creates a card with the given id and text.
    ///
    /// # Examples
    ///
    /// ```
    /// use zanban::Card;
    ///
    /// let card = Card::new("a", "Buy milk");
    /// assert_eq!(card.id, "a");
    /// assert_eq!(card.text(), Some("Buy milk"));
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
        }
    }

    /// Creates a card that carries no text.
    #[must_use]
    pub fn untitled(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: None,
        }
    }

    /// Borrowed view of the card text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
