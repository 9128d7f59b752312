use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, PreviewMode, ToastLevel};
use crate::markup::ResetMode;

use super::style::ThemeColors;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect, colors: ThemeColors) {
    let reset = match model.render_options.reset {
        ResetMode::Tracked => "",
        ResetMode::Legacy => "  [legacy reset]",
    };
    let preview = match model.preview_mode {
        PreviewMode::Styled => "",
        PreviewMode::Markup => "  [markup]",
    };
    let status = format!(
        " {}  {} theme  {} chars{}{}  Tab:focus  F5:copy  F1:help",
        model.notation.label(),
        model.theme.label(),
        model.buffer.text().chars().count(),
        reset,
        preview,
    );
    let bar = Paragraph::new(status).style(Style::default().bg(colors.button).fg(colors.text));
    frame.render_widget(bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => ("[ok]", Style::default().bg(Color::Green).fg(Color::Black)),
        ToastLevel::Warning => ("[warn]", Style::default().bg(Color::Yellow).fg(Color::Black)),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
