use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::ui::layout;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) => Some(Message::EditorInsertStr(text.clone())),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if let Some(msg) = Self::handle_global_key(key) {
            return Some(msg);
        }

        match model.focus {
            Focus::Editor => Self::handle_editor_key(key),
            Focus::Palette => Self::handle_selection_key(key, Message::PaletteMove),
            Focus::Formats => Self::handle_selection_key(key, Message::FormatMove),
        }
    }

    fn handle_global_key(key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'q') => Some(Message::Quit),
                KeyCode::Char('y') => Some(Message::CopyText),
                KeyCode::Char('n') => Some(Message::ToggleNotation),
                KeyCode::Char('t') => Some(Message::ToggleTheme),
                KeyCode::Char('p') => Some(Message::TogglePreviewMode),
                KeyCode::Char('l') => Some(Message::ClearText),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Tab => Some(Message::FocusNext),
            KeyCode::BackTab => Some(Message::FocusPrev),
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::F(2) => Some(Message::ToggleNotation),
            KeyCode::F(3) => Some(Message::ToggleTheme),
            KeyCode::F(4) => Some(Message::TogglePreviewMode),
            KeyCode::F(5) => Some(Message::CopyText),
            _ => None,
        }
    }

    fn handle_editor_key(key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc => Some(Message::SetFocus(Focus::Palette)),
            KeyCode::Enter => Some(Message::EditorSplitLine),
            KeyCode::Backspace => Some(Message::EditorDeleteBack),
            KeyCode::Delete => Some(Message::EditorDeleteForward),
            KeyCode::Left => Some(Message::EditorMoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::EditorMoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::EditorMoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::EditorMoveCursor(Direction::Down)),
            KeyCode::Home => Some(Message::EditorMoveHome),
            KeyCode::End => Some(Message::EditorMoveEnd),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) =>
            {
                Some(Message::EditorInsertChar(c))
            }
            _ => None,
        }
    }

    fn handle_selection_key(key: KeyEvent, move_msg: fn(Direction) -> Message) -> Option<Message> {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(move_msg(Direction::Left)),
            KeyCode::Char('l') | KeyCode::Right => Some(move_msg(Direction::Right)),
            KeyCode::Char('k') | KeyCode::Up => Some(move_msg(Direction::Up)),
            KeyCode::Char('j') | KeyCode::Down => Some(move_msg(Direction::Down)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ActivateSelection),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Esc | KeyCode::Char('i') => Some(Message::SetFocus(Focus::Editor)),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::HideHelp);
        }
        if !matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
            return None;
        }

        let panes = layout::model_panes(model);
        if let Some(idx) = layout::palette_cell_at(panes.palette, mouse.column, mouse.row) {
            return Some(Message::PaletteClick(idx));
        }
        if let Some(idx) = layout::format_button_at(panes.formats, mouse.column, mouse.row) {
            return Some(Message::FormatClick(idx));
        }
        layout::editor_position_at(model, mouse.column, mouse.row)
            .map(|(line, col)| Message::EditorMoveTo(line, col))
    }
}
