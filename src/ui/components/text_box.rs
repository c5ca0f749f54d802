//! Text box component renderer.
//!
//! This module renders a single-line input inside a bordered frame. It is
//! used for both the filter bar and the inline card form.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TextBoxInfo;

/// Horizontal margin for the box (spaces on left and right).
const BOX_MARGIN: usize = 2;

/// Renders a text box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Filter: milk▏    │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// Focused boxes use the `input_border` color and show a caret; unfocused ones
/// use `border`. When the text is wider than the box, its tail is shown.
pub fn render_text_box(row: usize, info: &TextBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if info.focused {
        &theme.colors.input_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let label = format!(" {}: ", info.label);
    let caret = if info.focused { "▏" } else { "" };
    let room = inner_width.saturating_sub(label.chars().count() + caret.chars().count());
    let skip = info.text.chars().count().saturating_sub(room);
    let text: String = info.text.chars().skip(skip).collect();
    let used = label.chars().count() + text.chars().count() + caret.chars().count();

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{text}{caret}");
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
