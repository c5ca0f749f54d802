//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, keyword highlighting with proper ANSI escape
//! sequence management, and width-aware truncation.
//!
//! All widths and ranges are in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use zanban::ui::helpers::truncate_chars;
///
/// assert_eq!(truncate_chars("Buy milk", 20), "Buy milk");
/// assert_eq!(truncate_chars("Buy milk", 5), "Buy …");
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Renders text with highlighted character ranges for keyword matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Ranges must be sorted and non-overlapping; out-of-bounds
/// ends are clamped.
///
/// When `is_selected` is `true`, match highlighting is disabled to avoid
/// conflicting with selection background colors. Otherwise `restore` is
/// re-applied after each highlighted section so the row keeps its base style.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool, restore: &str) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcd", 3), "ab…");
        assert_eq!(truncate_chars("abcd", 0), "");
        assert_eq!(truncate_chars("żółw płynie", 4), "żół…");
    }
}
