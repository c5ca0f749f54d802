//! The board: authoritative owner of every column's cards.
//!
//! Columns never mutate cards; they emit [`Intent`]s. The board is the owner
//! those intents are dispatched to. It removes, inserts and creates cards, keeps
//! per-column draft text, and remembers which card a drag gesture started on so
//! a later drop (possibly in another column) knows what to move.
//!
//! # Seed Files
//!
//! A board can be seeded from a TOML or JSON file, selected by extension. Card
//! ids are optional in seed files; missing ones are generated.
//!
//! ```toml
//! [[columns]]
//! title = "Todo"
//! cards = [{ id = "milk", text = "Buy milk" }, { text = "Walk dog" }]
//!
//! [[columns]]
//! title = "Done"
//! ```
//!
//! # Example
//!
//! ```rust
//! use zanban::column::Intent;
//! use zanban::Board;
//!
//! let mut board = Board::with_titles(&["Todo", "Done"]);
//! board.dispatch(0, &Intent::TextChange { value: "Buy milk".into() })?;
//! board.dispatch(0, &Intent::Confirm)?;
//!
//! let id = board.columns[0].cards.as_ref().unwrap()[0].id.clone();
//! board.dispatch(0, &Intent::DragStart { id: id.clone() })?;
//! board.dispatch(1, &Intent::Drop { entered: None })?;
//!
//! assert_eq!(board.locate(&id), Some((1, 0)));
//! # Ok::<(), zanban::ZanbanError>(())
//! ```

use super::card::Card;
use super::error::{Result, ZanbanError};
use crate::column::Intent;
use serde::Deserialize;
use std::path::Path;

/// One column's authoritative data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnData {
    /// Column heading.
    pub title: String,
    /// Cards in display order, `None` until loaded.
    pub cards: Option<Vec<Card>>,
    /// Text of the inline creation form.
    pub draft: String,
}

impl ColumnData {
    fn new(title: &str, cards: Option<Vec<Card>>) -> Self {
        Self {
            title: title.to_string(),
            cards,
            draft: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    columns: Vec<SeedColumn>,
}

#[derive(Debug, Deserialize)]
struct SeedColumn {
    title: String,
    #[serde(default)]
    cards: Vec<SeedCard>,
}

#[derive(Debug, Deserialize)]
struct SeedCard {
    id: Option<String>,
    text: Option<String>,
}

/// Serialization format of a seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    /// TOML document with a `columns` array of tables.
    Toml,
    /// JSON object with a `columns` array.
    Json,
}

impl SeedFormat {
    /// Picks the format from a file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// The owner of all card data on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Columns in display order.
    pub columns: Vec<ColumnData>,
    /// Card the current drag gesture started on.
    dragging: Option<String>,
    /// Counter backing generated card ids.
    next_id: u64,
}

impl Board {
    /// A board whose columns are all still loading.
    #[must_use]
    pub fn loading<S: AsRef<str>>(titles: &[S]) -> Self {
        Self {
            columns: titles.iter().map(|t| ColumnData::new(t.as_ref(), None)).collect(),
            ..Self::default()
        }
    }

    /// A loaded board with empty columns.
    #[must_use]
    pub fn with_titles<S: AsRef<str>>(titles: &[S]) -> Self {
        Self {
            columns: titles
                .iter()
                .map(|t| ColumnData::new(t.as_ref(), Some(Vec::new())))
                .collect(),
            ..Self::default()
        }
    }

    /// Loads a board from a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`ZanbanError::Io`] if the file cannot be read and
    /// [`ZanbanError::Parse`] if its content is not a valid seed document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_seed(&contents, SeedFormat::from_path(path))
    }

    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`ZanbanError::Parse`] on malformed input.
    pub fn from_seed(contents: &str, format: SeedFormat) -> Result<Self> {
        let seed: SeedFile = match format {
            SeedFormat::Toml => toml::from_str(contents).map_err(|e| ZanbanError::Parse(e.to_string()))?,
            SeedFormat::Json => {
                serde_json::from_str(contents).map_err(|e| ZanbanError::Parse(e.to_string()))?
            }
        };

        let mut board = Self::default();
        for column in seed.columns {
            let mut cards = Vec::with_capacity(column.cards.len());
            for card in column.cards {
                let id = match card.id {
                    Some(id) if board.locate(&id).is_none() && !cards.iter().any(|c: &Card| c.id == id) => id,
                    Some(id) => {
                        tracing::warn!(card_id = %id, "duplicate card id in seed, generating a new one");
                        board.fresh_id_excluding(&cards)
                    }
                    None => board.fresh_id_excluding(&cards),
                };
                cards.push(Card { id, text: card.text });
            }
            board.columns.push(ColumnData::new(&column.title, Some(cards)));
        }

        tracing::debug!(columns = board.columns.len(), "board seed parsed");
        Ok(board)
    }

    /// Column titles in display order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.title.as_str()).collect()
    }

    /// Card the current drag gesture started on.
    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Finds a card by id, returning `(column, position)`.
    #[must_use]
    pub fn locate(&self, id: &str) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(col, data)| {
            data.cards
                .as_ref()
                .and_then(|cards| cards.iter().position(|card| card.id == id))
                .map(|pos| (col, pos))
        })
    }

    /// Applies an intent emitted by column `column`.
    ///
    /// # Errors
    ///
    /// - [`ZanbanError::ColumnOutOfRange`] if `column` does not exist
    /// - [`ZanbanError::ColumnLoading`] when cards are targeted before loading
    /// - [`ZanbanError::NoDragInProgress`] for a drop without a drag-start
    /// - [`ZanbanError::CardNotFound`] when an id cannot be resolved
    ///
    /// The board is left unchanged when an error is returned.
    pub fn dispatch(&mut self, column: usize, intent: &Intent) -> Result<()> {
        let _span = tracing::debug_span!("board_dispatch", column, intent = ?intent).entered();
        self.check_column(column)?;

        match intent {
            Intent::DragStart { id } => {
                if self.locate(id).is_none() {
                    return Err(ZanbanError::CardNotFound { id: id.clone() });
                }
                self.dragging = Some(id.clone());
                Ok(())
            }
            Intent::Drop { entered } => {
                let id = self.dragging.clone().ok_or(ZanbanError::NoDragInProgress)?;
                self.move_card(&id, column, entered.as_deref())?;
                self.dragging = None;
                Ok(())
            }
            Intent::Delete { id } => self.delete_card(id),
            Intent::TextChange { value } => {
                self.columns[column].draft.clone_from(value);
                Ok(())
            }
            Intent::Confirm => self.confirm_draft(column).map(|_| ()),
            Intent::Cancel => {
                self.columns[column].draft.clear();
                Ok(())
            }
        }
    }

    /// Moves card `id` into `target`, before `entered` or at the end.
    ///
    /// # Errors
    ///
    /// See [`dispatch`](Self::dispatch). Validation happens before any mutation.
    pub fn move_card(&mut self, id: &str, target: usize, entered: Option<&str>) -> Result<()> {
        self.check_column(target)?;
        if entered == Some(id) {
            tracing::debug!(card_id = %id, "card dropped before itself, nothing to move");
            return Ok(());
        }

        let (source, position) = self
            .locate(id)
            .ok_or_else(|| ZanbanError::CardNotFound { id: id.to_string() })?;
        let target_cards = self.columns[target]
            .cards
            .as_ref()
            .ok_or(ZanbanError::ColumnLoading { index: target })?;
        if let Some(entered) = entered {
            if !target_cards.iter().any(|card| card.id == entered) {
                return Err(ZanbanError::CardNotFound { id: entered.to_string() });
            }
        }

        let Some(card) = self.columns[source].cards.as_mut().map(|cards| cards.remove(position)) else {
            return Err(ZanbanError::ColumnLoading { index: source });
        };

        let Some(cards) = self.columns[target].cards.as_mut() else {
            return Err(ZanbanError::ColumnLoading { index: target });
        };
        let insert_at = entered
            .and_then(|entered| cards.iter().position(|c| c.id == entered))
            .unwrap_or(cards.len());
        cards.insert(insert_at, card);

        tracing::debug!(card_id = %id, from = source, to = target, index = insert_at, "card moved");
        Ok(())
    }

    /// Removes card `id` from whichever column holds it.
    ///
    /// # Errors
    ///
    /// Returns [`ZanbanError::CardNotFound`] for unknown ids.
    pub fn delete_card(&mut self, id: &str) -> Result<()> {
        let (column, position) = self
            .locate(id)
            .ok_or_else(|| ZanbanError::CardNotFound { id: id.to_string() })?;
        if let Some(cards) = self.columns[column].cards.as_mut() {
            cards.remove(position);
        }
        if self.dragging.as_deref() == Some(id) {
            self.dragging = None;
        }
        tracing::debug!(card_id = %id, column, "card deleted");
        Ok(())
    }

    /// Turns the draft of `column` into a new card appended at the end.
    ///
    /// Blank drafts are ignored. On success the draft is cleared and the new
    /// card id is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ZanbanError::ColumnLoading`] if the column is not loaded.
    pub fn confirm_draft(&mut self, column: usize) -> Result<Option<String>> {
        self.check_column(column)?;
        let text = self.columns[column].draft.trim().to_string();
        if text.is_empty() {
            tracing::debug!(column, "blank draft ignored");
            return Ok(None);
        }
        if self.columns[column].cards.is_none() {
            return Err(ZanbanError::ColumnLoading { index: column });
        }

        let id = self.fresh_id_excluding(&[]);
        if let Some(cards) = self.columns[column].cards.as_mut() {
            cards.push(Card::new(id.clone(), text));
        }
        self.columns[column].draft.clear();

        tracing::debug!(card_id = %id, column, "card created");
        Ok(Some(id))
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(ZanbanError::ColumnOutOfRange {
                index,
                len: self.columns.len(),
            })
        }
    }

    fn fresh_id_excluding(&mut self, pending: &[Card]) -> String {
        loop {
            self.next_id += 1;
            let id = format!("card-{}", self.next_id);
            if self.locate(&id).is_none() && !pending.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let mut board = Board::with_titles(&["Todo", "Done"]);
        board.columns[0].cards = Some(vec![
            Card::new("a", "Buy milk"),
            Card::new("b", "Walk dog"),
            Card::new("c", "Call mom"),
        ]);
        board.columns[1].cards = Some(vec![Card::new("x", "Ship it")]);
        board
    }

    fn ids(board: &Board, column: usize) -> Vec<String> {
        board.columns[column]
            .cards
            .as_ref()
            .map(|cards| cards.iter().map(|c| c.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_drop_reorders_within_column() {
        let mut board = board();
        board.dispatch(0, &Intent::DragStart { id: "c".into() }).unwrap();
        board.dispatch(0, &Intent::Drop { entered: Some("a".into()) }).unwrap();
        assert_eq!(ids(&board, 0), ["c", "a", "b"]);
        assert_eq!(board.dragging(), None);
    }

    #[test]
    fn test_drop_moves_across_columns_to_end() {
        let mut board = board();
        board.dispatch(0, &Intent::DragStart { id: "a".into() }).unwrap();
        board.dispatch(1, &Intent::Drop { entered: None }).unwrap();
        assert_eq!(ids(&board, 0), ["b", "c"]);
        assert_eq!(ids(&board, 1), ["x", "a"]);
    }

    #[test]
    fn test_drop_before_later_card_in_same_column() {
        let mut board = board();
        board.dispatch(0, &Intent::DragStart { id: "a".into() }).unwrap();
        board.dispatch(0, &Intent::Drop { entered: Some("c".into()) }).unwrap();
        assert_eq!(ids(&board, 0), ["b", "a", "c"]);
    }

    #[test]
    fn test_drop_without_drag_is_rejected() {
        let mut board = board();
        let err = board.dispatch(0, &Intent::Drop { entered: None }).unwrap_err();
        assert!(matches!(err, ZanbanError::NoDragInProgress));
    }

    #[test]
    fn test_drop_before_unknown_card_leaves_board_untouched() {
        let mut board = board();
        board.dispatch(0, &Intent::DragStart { id: "a".into() }).unwrap();
        let before = board.clone();
        let err = board.dispatch(1, &Intent::Drop { entered: Some("zz".into()) }).unwrap_err();
        assert!(matches!(err, ZanbanError::CardNotFound { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_delete_removes_card() {
        let mut board = board();
        board.dispatch(0, &Intent::Delete { id: "b".into() }).unwrap();
        assert_eq!(ids(&board, 0), ["a", "c"]);
        assert!(board.dispatch(0, &Intent::Delete { id: "b".into() }).is_err());
    }

    #[test]
    fn test_confirm_appends_and_clears_draft() {
        let mut board = board();
        board.dispatch(1, &Intent::TextChange { value: "  New card ".into() }).unwrap();
        board.dispatch(1, &Intent::Confirm).unwrap();

        let cards = board.columns[1].cards.as_ref().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].text(), Some("New card"));
        assert!(board.columns[1].draft.is_empty());
    }

    #[test]
    fn test_blank_confirm_is_ignored() {
        let mut board = board();
        board.dispatch(1, &Intent::TextChange { value: "   ".into() }).unwrap();
        assert_eq!(board.confirm_draft(1).unwrap(), None);
        assert_eq!(ids(&board, 1), ["x"]);
    }

    #[test]
    fn test_cancel_clears_draft() {
        let mut board = board();
        board.dispatch(0, &Intent::TextChange { value: "half".into() }).unwrap();
        board.dispatch(0, &Intent::Cancel).unwrap();
        assert!(board.columns[0].draft.is_empty());
    }

    #[test]
    fn test_out_of_range_column() {
        let mut board = board();
        let err = board.dispatch(9, &Intent::Confirm).unwrap_err();
        assert!(matches!(err, ZanbanError::ColumnOutOfRange { index: 9, len: 2 }));
    }

    #[test]
    fn test_loading_board_rejects_moves() {
        let mut board = Board::loading(&["Todo"]);
        assert!(board.columns[0].cards.is_none());
        assert!(board.dispatch(0, &Intent::DragStart { id: "a".into() }).is_err());
    }

    #[test]
    fn test_seed_toml_generates_missing_and_duplicate_ids() {
        let seed = r#"
            [[columns]]
            title = "Todo"
            cards = [{ id = "milk", text = "Buy milk" }, { text = "Walk dog" }, { id = "milk", text = "Again" }]

            [[columns]]
            title = "Done"
        "#;
        let board = Board::from_seed(seed, SeedFormat::Toml).unwrap();
        assert_eq!(board.titles(), ["Todo", "Done"]);
        assert_eq!(ids(&board, 0), ["milk", "card-1", "card-2"]);
        assert_eq!(ids(&board, 1), Vec::<String>::new());
    }

    #[test]
    fn test_seed_json() {
        let seed = r#"{"columns":[{"title":"Todo","cards":[{"id":"a","text":"Buy milk"},{"id":"b"}]}]}"#;
        let board = Board::from_seed(seed, SeedFormat::Json).unwrap();
        let cards = board.columns[0].cards.as_ref().unwrap();
        assert_eq!(cards[1], Card::untitled("b"));
    }

    #[test]
    fn test_seed_parse_error() {
        let err = Board::from_seed("columns = 3", SeedFormat::Toml).unwrap_err();
        assert!(matches!(err, ZanbanError::Parse(_)));
    }

    #[test]
    fn test_seed_format_from_extension() {
        assert_eq!(SeedFormat::from_path(Path::new("board.JSON")), SeedFormat::Json);
        assert_eq!(SeedFormat::from_path(Path::new("board.toml")), SeedFormat::Toml);
        assert_eq!(SeedFormat::from_path(Path::new("board")), SeedFormat::Toml);
    }
}
