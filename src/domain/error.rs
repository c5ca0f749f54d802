//! Error types for the Zanban plugin.
//!
//! This module defines the centralized error type [`ZanbanError`] and a type alias
//! [`Result`] used by the board owner, the theme loader and the plugin shell. The
//! column interaction core never produces errors; only code that touches the
//! authoritative card data or the filesystem does.

use thiserror::Error;

/// The main error type for Zanban plugin operations.
///
/// # Examples
///
/// ```
/// use zanban::ZanbanError;
///
/// let err = ZanbanError::CardNotFound { id: "card-7".to_string() };
/// assert_eq!(err.to_string(), "card not found: card-7");
/// ```
#[derive(Debug, Error)]
pub enum ZanbanError {
    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A board seed file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An intent referenced a card that is not on the board.
    #[error("card not found: {id}")]
    CardNotFound {
        /// Identifier that failed to resolve.
        id: String,
    },

    /// An intent targeted a column index outside the board.
    #[error("column {index} out of range (board has {len} columns)")]
    ColumnOutOfRange {
        /// Requested column index.
        index: usize,
        /// Number of columns on the board.
        len: usize,
    },

    /// An intent targeted a column whose cards have not been loaded yet.
    #[error("column {index} is still loading")]
    ColumnLoading {
        /// Requested column index.
        index: usize,
    },

    /// A drop arrived without a preceding drag-start.
    #[error("drop received with no drag in progress")]
    NoDragInProgress,
}

/// A specialized `Result` type for Zanban operations.
pub type Result<T> = std::result::Result<T, ZanbanError>;
