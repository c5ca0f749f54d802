//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Formats hints as `key: desc | key: desc`.
fn format_hints(footer: &FooterInfo) -> String {
    footer
        .hints
        .iter()
        .map(|(key, desc)| format!("{key}: {desc}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling. If the
/// help text exceeds terminal width, it is truncated to fit.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_chars(&format_hints(footer), cols);

    let text_len = help_text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hints() {
        let footer = FooterInfo {
            hints: vec![("j/k".into(), "move".into()), ("q".into(), "quit".into())],
        };
        assert_eq!(format_hints(&footer), "j/k: move | q: quit");
    }
}
