use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::notation::ESCAPE_CHARS;

use super::style::ThemeColors;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect, colors: ThemeColors) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(colors.muted);

    let escape = model.notation.escape_char();
    let lines = vec![
        Line::styled("Compose", section_style),
        Line::raw("  Tab / Shift-Tab      Cycle palette, formats, editor"),
        Line::raw("  Arrows or h/j/k/l    Move selection"),
        Line::raw("  Enter / Space        Append selected code"),
        Line::raw("  Click                Append clicked code"),
        Line::raw("  Esc                  Leave the current pane"),
        Line::raw(""),
        Line::styled("Editor", section_style),
        Line::raw("  Type, Enter, Backspace, Delete, arrows, Home/End"),
        Line::raw("  Ctrl-l               Clear text"),
        Line::raw(""),
        Line::styled("Settings", section_style),
        Line::raw(format!("  F2 / Ctrl-n          Notation (now {escape})")),
        Line::raw("  F3 / Ctrl-t          Light / dark theme"),
        Line::raw("  F4 / Ctrl-p          Styled preview / HTML markup"),
        Line::raw("  F5 / Ctrl-y          Copy text to clipboard"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  F1 (? outside editor) Toggle help"),
        Line::raw("  Ctrl-q / Ctrl-c      Quit"),
        Line::raw(""),
        Line::styled(
            format!(
                "Both {} and {} are accepted in the text.",
                ESCAPE_CHARS[0], ESCAPE_CHARS[1]
            ),
            dim_style,
        ),
        Line::styled("Any key or click closes this help.", dim_style),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(colors.surface).fg(colors.text));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
