//! Intents emitted by a column towards the owner of the card data.
//!
//! The column core never mutates cards. Every request to change durable data
//! leaves the column as an [`Intent`]; the owner applies it (or ignores it) and
//! re-renders the column with new props. Intents are fire-and-forget: the column
//! does not wait for, or roll back on, the owner's decision.
//!
//! # Example
//!
//! ```rust
//! use zanban::column::Intent;
//!
//! let intents = vec![
//!     Intent::DragStart { id: "a".to_string() },
//!     Intent::Drop { entered: None },
//! ];
//! assert_eq!(intents.len(), 2);
//! ```

/// A request from the column to the owner of the card collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A drag gesture began on card `id`.
    DragStart {
        /// Card being dragged.
        id: String,
    },

    /// The dragged card was dropped on an enabled zone.
    ///
    /// The owner removes the dragged card from its current position (possibly in
    /// another column) and inserts it before `entered`, or at the end of this
    /// column when `entered` is `None`.
    Drop {
        /// Card the dragged card should be inserted before.
        entered: Option<String>,
    },

    /// Deletion was requested for card `id`.
    Delete {
        /// Card to delete.
        id: String,
    },

    /// The draft text of the inline form was edited.
    TextChange {
        /// Complete new draft value.
        value: String,
    },

    /// Submission of the draft was requested.
    Confirm,

    /// Composition was abandoned.
    Cancel,
}
