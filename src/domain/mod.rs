//! Domain layer for the Zanban plugin.
//!
//! This module contains the card model, the board that owns every column's
//! cards, and the crate error type. It is independent of Zellij APIs and of the
//! terminal renderer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`card`]: Card domain model
//! - [`board`]: Authoritative card storage and intent application
//!
//! # Examples
//!
//! ```
//! use zanban::domain::{Board, Result};
//!
//! fn empty_board() -> Result<Board> {
//!     Ok(Board::with_titles(&["Todo", "Doing", "Done"]))
//! }
//! # assert_eq!(empty_board().unwrap().columns.len(), 3);
//! ```

pub mod board;
pub mod card;
pub mod error;

pub use board::{Board, ColumnData, SeedFormat};
pub use card::Card;
pub use error::{Result, ZanbanError};
