//! Card list component renderer.
//!
//! This module renders the windowed rows of the focused column: cards with
//! selection, drag and keyword highlighting, and the drop zones between them
//! while a card is carried.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardRow, ListRow, ZoneRow};

/// Left margin before the row marker.
const MARGIN: usize = 2;

/// Renders the "N results" line shown while filtering.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_result_count(row: usize, count: usize, theme: &Theme, cols: usize) -> usize {
    let text = match count {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    };

    position_cursor(row, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{text}", " ".repeat(MARGIN));
    print!("{}", " ".repeat(cols.saturating_sub(MARGIN + text.chars().count())));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all list rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_rows(row: usize, rows: &[ListRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for list_row in rows {
        current_row = match list_row {
            ListRow::Zone(zone) => render_zone(current_row, *zone, theme, cols),
            ListRow::Card(card) => render_card(current_row, card, theme, cols),
        };
    }
    current_row
}

/// Renders a drop zone.
///
/// ```text
///   ▶ ─────────────────   targeted
///     ┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄   enabled
///     ·················   disabled
/// ```
fn render_zone(row: usize, zone: ZoneRow, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(MARGIN * 2 + 2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    if zone.disabled {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.drop_zone_disabled));
        print!("{} {}", if zone.targeted { "▷" } else { " " }, "·".repeat(width));
    } else if zone.targeted {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.drop_zone));
        print!("▶ {}", "─".repeat(width));
    } else {
        print!("{}", Theme::fg(&theme.colors.border));
        print!("  {}", "┄".repeat(width));
    }
    print!("{}", " ".repeat(MARGIN));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one card.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Carried card color (if `is_dragging`)
/// 3. Keyword highlights (unless selected)
/// 4. Normal text color
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_card(row: usize, card: &CardRow, theme: &Theme, cols: usize) -> usize {
    let base = if card.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else if card.is_dragging {
        Theme::fg(&theme.colors.dragging_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    let marker = match (card.is_selected, card.is_dragging) {
        (_, true) => "↕",
        (true, false) => "▌",
        (false, false) => " ",
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    print!("{base}");
    print!("{marker} ");
    helpers::render_highlighted_text(&card.text, &card.highlight_ranges, theme, card.is_selected, &base);

    let line_len = MARGIN + 2 + card.text.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
