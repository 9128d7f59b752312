use ratatui::layout::{Constraint, Layout, Margin, Rect};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::app::PALETTE_COLUMNS;
use crate::codes::{COLORS, FORMATS};

/// Rows taken by the palette block (two rows of cells plus borders).
pub const PALETTE_HEIGHT: u16 = 4;
/// Rows taken by the format-button block.
pub const FORMATS_HEIGHT: u16 = 3;

/// Screen regions, shared by the renderer and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub palette: Rect,
    pub formats: Rect,
    pub editor: Rect,
    pub preview: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
}

pub fn panes(area: Rect, toast_active: bool) -> Panes {
    let footer_rows = 1 + u16::from(toast_active);
    let chunks = Layout::vertical([
        Constraint::Length(PALETTE_HEIGHT),
        Constraint::Length(FORMATS_HEIGHT),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(footer_rows),
    ])
    .split(area);
    let footer = chunks[4];
    let toast = toast_active.then(|| Rect { height: 1, ..footer });
    let status = Rect {
        y: footer.y + footer.height.saturating_sub(1),
        height: footer.height.min(1),
        ..footer
    };
    Panes {
        palette: chunks[0],
        formats: chunks[1],
        editor: chunks[2],
        preview: chunks[3],
        toast,
        status,
    }
}

/// Panes for the model's current terminal size.
pub fn model_panes(model: &Model) -> Panes {
    panes(
        Rect::new(0, 0, model.size.0, model.size.1),
        model.active_toast().is_some(),
    )
}

fn inner(pane: Rect) -> Rect {
    pane.inner(Margin::new(1, 1))
}

#[allow(clippy::cast_possible_truncation)]
pub fn palette_cell_rect(pane: Rect, idx: usize) -> Rect {
    let inner = inner(pane);
    let columns = PALETTE_COLUMNS as u16;
    let cell_width = inner.width / columns;
    let col = (idx % PALETTE_COLUMNS) as u16;
    let row = (idx / PALETTE_COLUMNS) as u16;
    Rect::new(inner.x + col * cell_width, inner.y + row, cell_width, 1).intersection(inner)
}

#[allow(clippy::cast_possible_truncation)]
pub fn format_button_rect(pane: Rect, idx: usize) -> Rect {
    let inner = inner(pane);
    let button_width = inner.width / FORMATS.len() as u16;
    Rect::new(inner.x + idx as u16 * button_width, inner.y, button_width, 1).intersection(inner)
}

pub fn palette_cell_at(pane: Rect, column: u16, row: u16) -> Option<usize> {
    (0..COLORS.len()).find(|&idx| point_in_rect(column, row, palette_cell_rect(pane, idx)))
}

pub fn format_button_at(pane: Rect, column: u16, row: u16) -> Option<usize> {
    (0..FORMATS.len()).find(|&idx| point_in_rect(column, row, format_button_rect(pane, idx)))
}

/// Editor text area (inside the border).
pub fn editor_text_area(pane: Rect) -> Rect {
    inner(pane)
}

/// First buffer line shown so that the cursor line stays visible.
pub const fn editor_scroll_start(cursor_line: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor_line;
    }
    cursor_line.saturating_sub(visible_rows - 1)
}

/// First display column shown so that a cursor at `cursor_x` stays visible.
pub const fn editor_hscroll_start(cursor_x: usize, visible_cols: usize) -> usize {
    if visible_cols == 0 {
        return cursor_x;
    }
    cursor_x.saturating_sub(visible_cols - 1)
}

/// Horizontal scroll of the editor text, shared by every visible line.
pub fn editor_hscroll(model: &Model, text_width: u16) -> usize {
    let cursor = model.buffer.cursor();
    let line = model.buffer.line_at(cursor.line).unwrap_or_default();
    let gutter = gutter_width(model.buffer.line_count());
    let visible = text_width.saturating_sub(gutter) as usize;
    editor_hscroll_start(display_width_to(&line, cursor.col), visible)
}

/// Display width of the first `col` chars of `line`.
pub fn display_width_to(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

/// Width of the line-number gutter, including its trailing space.
pub const fn gutter_width(total_lines: usize) -> u16 {
    let digits = if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else {
        5
    };
    digits + 1
}

/// Buffer position under a click in the editor pane.
pub fn editor_position_at(model: &Model, column: u16, row: u16) -> Option<(usize, usize)> {
    let area = editor_text_area(model_panes(model).editor);
    if !point_in_rect(column, row, area) {
        return None;
    }
    let start = editor_scroll_start(model.buffer.cursor().line, area.height as usize);
    let line = start + (row - area.y) as usize;
    let gutter = gutter_width(model.buffer.line_count());
    let display_col =
        column.saturating_sub(area.x + gutter) as usize + editor_hscroll(model, area.width);
    let line_text = model.buffer.line_at(line).unwrap_or_default();
    Some((line, char_col_at(&line_text, display_col)))
}

/// Char index under display column `display_col`. Past the end of the
/// line the index keeps counting one per column.
pub fn char_col_at(line: &str, display_col: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in line.chars().enumerate() {
        let ch_width = ch.width().unwrap_or(0);
        if display_col < width + ch_width.max(1) {
            return idx;
        }
        width += ch_width;
    }
    line.chars().count() + display_col.saturating_sub(width)
}

pub const fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panes_stack_vertically() {
        let p = panes(Rect::new(0, 0, 80, 30), false);
        assert_eq!(p.palette.height, PALETTE_HEIGHT);
        assert_eq!(p.formats.y, PALETTE_HEIGHT);
        assert_eq!(p.status.y, 29);
        assert!(p.toast.is_none());
        assert_eq!(p.editor.height + p.preview.height, 30 - 4 - 3 - 1);
    }

    #[test]
    fn test_toast_row_sits_above_status() {
        let p = panes(Rect::new(0, 0, 80, 30), true);
        assert_eq!(p.toast.map(|r| r.y), Some(28));
        assert_eq!(p.status.y, 29);
    }

    #[test]
    fn test_palette_cells_round_trip_through_hit_test() {
        let pane = Rect::new(0, 0, 82, PALETTE_HEIGHT);
        for idx in 0..COLORS.len() {
            let cell = palette_cell_rect(pane, idx);
            assert_eq!(cell.width, 10);
            assert_eq!(palette_cell_at(pane, cell.x, cell.y), Some(idx));
        }
        assert_eq!(palette_cell_at(pane, 0, 0), None);
    }

    #[test]
    fn test_format_buttons_hit_test() {
        let pane = Rect::new(0, 4, 62, FORMATS_HEIGHT);
        let reset = format_button_rect(pane, 5);
        assert_eq!(format_button_at(pane, reset.x + 1, 5), Some(5));
        assert_eq!(format_button_at(pane, 1, 4), None);
    }

    #[test]
    fn test_editor_scroll_keeps_cursor_visible() {
        assert_eq!(editor_scroll_start(0, 5), 0);
        assert_eq!(editor_scroll_start(4, 5), 0);
        assert_eq!(editor_scroll_start(9, 5), 5);
    }

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(1), 2);
        assert_eq!(gutter_width(42), 3);
    }

    #[test]
    fn test_char_col_at_counts_wide_chars() {
        assert_eq!(char_col_at("abc", 1), 1);
        assert_eq!(char_col_at("a中b", 2), 1);
        assert_eq!(char_col_at("a中b", 3), 2);
        assert_eq!(char_col_at("ab", 6), 6);
    }

    #[test]
    fn test_hscroll_keeps_cursor_cell_visible() {
        assert_eq!(editor_hscroll_start(5, 10), 0);
        assert_eq!(editor_hscroll_start(9, 10), 0);
        assert_eq!(editor_hscroll_start(10, 10), 1);
        assert_eq!(editor_hscroll_start(30, 10), 21);
    }

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width_to("a中b", 2), 3);
        assert_eq!(display_width_to("§a", 9), 2);
    }

    #[test]
    fn test_click_maps_through_horizontal_scroll() {
        let long = "x".repeat(200);
        let model = Model::new(&long, (80, 24));
        let area = editor_text_area(model_panes(&model).editor);
        let hscroll = editor_hscroll(&model, area.width);
        assert!(hscroll > 0);
        let gutter = gutter_width(1);
        let pos = editor_position_at(&model, area.x + gutter, area.y);
        assert_eq!(pos, Some((0, hscroll)));
    }
}
