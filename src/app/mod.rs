//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the column core
//! and domain layers. It turns key presses into column events, applies the
//! resulting intents to the board, and reports side effects back to the
//! runtime.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Column Events → Intents → Board
//!                                                                  ↓
//!                           Actions ← Reconcile ←──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Keyboard focus and drag gesture types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zanban::app::{handle_event, AppState, Event};
//! use zanban::domain::Board;
//! use zanban::ui::Theme;
//!
//! let mut state = AppState::new(Board::with_titles(&["Todo"]), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::ToggleInput)?;
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DragGesture, KeyFocus};
pub use state::{column_props, AppState};
