//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the column layout
//!
//! # Example
//!
//! ```rust
//! use zanban::app::AppState;
//! use zanban::domain::Board;
//! use zanban::ui::{render, Theme};
//!
//! let state = AppState::new(Board::loading(&["Todo"]), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using absolute cursor positioning. Does not clear
/// the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_column(&viewmodel, &state.theme, cols, rows);
}
