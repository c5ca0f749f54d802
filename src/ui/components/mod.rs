//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Count badge, column title, position and add button
//! - [`footer`]: Keybinding hints
//! - [`text_box`]: Bordered single-line input (filter bar, inline form)
//! - [`card_list`]: Cards and drop zones
//! - [`empty`]: Loading and empty-list messages
//!
//! # Layout
//!
//! [`render_column`] stacks the components:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter bar - 3 lines, optional]
//! [Input form - 3 lines, optional]
//! [N results, optional]
//! [Rows or empty state]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod card_list;
mod empty;
mod footer;
mod header;
mod text_box;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use card_list::{render_result_count, render_rows};
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use text_box::render_text_box;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the focused column with all its optional sections.
pub fn render_column(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(filter) = &vm.filter_bar {
        current_row = render_text_box(current_row, filter, theme, cols);
    }
    if let Some(form) = &vm.input_form {
        current_row = render_text_box(current_row, form, theme, cols);
    }
    if let Some(count) = vm.result_count {
        current_row = render_result_count(current_row, count, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_rows(current_row, &vm.rows, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
