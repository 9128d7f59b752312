use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{Focus, Model, PreviewMode};
use crate::codes::{COLORS, FORMATS};
use crate::notation::encode;

use super::layout::{self, Panes};
use super::style::{self, ThemeColors, theme_colors};
use super::{overlays, preview, status};

const PLACEHOLDER: &str = "Enter your text with Minecraft format codes...";

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let colors = theme_colors(model.theme);
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        area,
    );

    let Panes {
        palette,
        formats,
        editor,
        preview,
        toast,
        status: status_area,
    } = layout::panes(area, model.active_toast().is_some());

    render_palette(model, frame, palette, colors);
    render_formats(model, frame, formats, colors);
    render_editor(model, frame, editor, colors);
    render_preview(model, frame, preview, colors);

    if let Some(toast_area) = toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, status_area, colors);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area, colors);
    }
}

fn pane_block(title: &str, focused: bool, colors: ThemeColors) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(colors.focus)
        } else {
            Style::default().fg(colors.muted)
        })
}

fn render_palette(model: &Model, frame: &mut Frame, area: Rect, colors: ThemeColors) {
    let focused = model.focus == Focus::Palette;
    frame.render_widget(pane_block("Colors", focused, colors), area);

    for (idx, entry) in COLORS.iter().enumerate() {
        let cell = layout::palette_cell_rect(area, idx);
        let selected = focused && model.palette_selected == idx;
        let label = Paragraph::new(encode(entry.code, model.notation))
            .alignment(Alignment::Center)
            .style(style::palette_cell_style(entry, selected));
        frame.render_widget(label, cell);
    }
}

fn render_formats(model: &Model, frame: &mut Frame, area: Rect, colors: ThemeColors) {
    let focused = model.focus == Focus::Formats;
    frame.render_widget(pane_block("Formats", focused, colors), area);

    for (idx, entry) in FORMATS.iter().enumerate() {
        let button = layout::format_button_rect(area, idx);
        let selected = focused && model.format_selected == idx;
        let label = Paragraph::new(entry.label)
            .alignment(Alignment::Center)
            .style(style::format_button_style(entry, colors, selected));
        frame.render_widget(label, button);
    }
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect, colors: ThemeColors) {
    let focused = model.focus == Focus::Editor;
    let block = pane_block("Text", focused, colors).style(Style::default().bg(colors.surface));
    let text_area = layout::editor_text_area(area);
    frame.render_widget(block, area);

    let buf = &model.buffer;
    let total_lines = buf.line_count();
    let gutter = layout::gutter_width(total_lines) as usize;
    let visible = text_area.height as usize;
    let cursor = buf.cursor();
    let start = layout::editor_scroll_start(cursor.line, visible);
    let hscroll = layout::editor_hscroll(model, text_area.width);
    let end = (start + visible).min(total_lines);
    let cursor_style = Style::default().bg(colors.text).fg(colors.surface);

    let mut content: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        let line_num = format!("{:>width$} ", line_idx + 1, width = gutter - 1);
        let mut spans = vec![Span::styled(line_num, Style::default().fg(colors.muted))];

        let chars: Vec<char> = line_text.chars().collect();
        let skip = layout::char_col_at(&line_text, hscroll).min(chars.len());
        let shown = &chars[skip..];

        if focused && line_idx == cursor.line {
            let col = cursor.col.saturating_sub(skip).min(shown.len());
            let before: String = shown[..col].iter().collect();
            let under: String = shown.get(col).map_or_else(|| " ".to_string(), char::to_string);
            let after: String = shown.get(col + 1..).unwrap_or_default().iter().collect();
            spans.push(Span::raw(before));
            spans.push(Span::styled(under, cursor_style));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(shown.iter().collect::<String>()));
        }
        content.push(Line::from(spans));
    }
    if buf.is_empty() {
        if let Some(first) = content.first_mut() {
            first
                .spans
                .push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
        }
    }

    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(colors.surface).fg(colors.text)),
        text_area,
    );
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect, colors: ThemeColors) {
    let (title, body) = match model.preview_mode {
        PreviewMode::Styled => ("Preview", Text::from(preview::styled_lines(&model.buffer.text()))),
        PreviewMode::Markup => ("Markup", Text::raw(model.preview_markup())),
    };
    let block = pane_block(title, false, colors);
    let paragraph = Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(colors.surface).fg(colors.text));
    frame.render_widget(paragraph, area);
}
