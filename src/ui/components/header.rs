//! Header component renderer.
//!
//! This module renders the column title bar: count badge, title, column
//! position and the add button.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  3  Todo                                   ‹ 1/3 ›  [+]
/// ```
///
/// The add button reads `[+]` when the form is closed and `[x]` when open.
/// The title is truncated before anything else when space runs out.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let badge = header.badge.as_ref().map(|count| format!(" {count} "));
    let badge_len = badge.as_ref().map_or(0, |b| b.chars().count() + 1);
    let right = format!("‹ {} ›  {} ", header.position, if header.form_open { "[x]" } else { "[+]" });
    let right_len = right.chars().count();

    let title_room = cols.saturating_sub(badge_len + right_len + 2);
    let title = truncate_chars(&header.title, title_room);
    let used = 1 + badge_len + title.chars().count() + right_len;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!(" ");
    if let Some(badge) = &badge {
        print!("{}", Theme::fg(&theme.colors.badge_fg));
        print!("{}", Theme::bg(&theme.colors.badge_bg));
        print!("{badge}");
        print!("{}", Theme::reset());
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
        print!(" ");
    }

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{right}");
    print!("{}", Theme::reset());
    row + 1
}
