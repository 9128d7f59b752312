use crate::app::Model;
use crate::app::model::{Focus, PALETTE_COLUMNS, PreviewMode};
use crate::codes::{COLORS, FORMATS};
use crate::editor::Direction;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Composition
    /// Append a code, encoded in the current notation, to the buffer end
    AppendCode(char),
    /// Append the code under the palette or format selection
    ActivateSelection,
    /// Replace the whole buffer
    SetText(String),
    /// Empty the buffer
    ClearText,

    // Selection
    /// Move the palette selection
    PaletteMove(Direction),
    /// Move the format-button selection
    FormatMove(Direction),
    /// Select a palette cell by index and append its code
    PaletteClick(usize),
    /// Select a format button by index and append its code
    FormatClick(usize),
    FocusNext,
    FocusPrev,
    SetFocus(Focus),

    // Editor
    EditorInsertChar(char),
    /// Insert pasted text at the cursor
    EditorInsertStr(String),
    /// Backspace
    EditorDeleteBack,
    /// Delete
    EditorDeleteForward,
    /// Enter
    EditorSplitLine,
    EditorMoveCursor(Direction),
    EditorMoveHome,
    EditorMoveEnd,
    /// Move cursor to (line, col), e.g. from a mouse click
    EditorMoveTo(usize, usize),

    // Settings
    ToggleNotation,
    ToggleTheme,
    TogglePreviewMode,

    // Effects
    /// Copy the buffer to the system clipboard
    CopyText,

    // Window
    ToggleHelp,
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    Quit,
}

/// Pure state transition.
///
/// Clipboard access happens afterwards in the effect handler; `update`
/// never touches the outside world.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::AppendCode(code) => model.append_code(code),
        Message::ActivateSelection => match model.focus {
            Focus::Palette => {
                let code = model.selected_color_code();
                model.append_code(code);
            }
            Focus::Formats => {
                let code = model.selected_format_code();
                model.append_code(code);
            }
            Focus::Editor => model.buffer.split_line(),
        },
        Message::SetText(text) => model.buffer.set_text(&text),
        Message::ClearText => model.buffer.clear(),

        Message::PaletteMove(direction) => {
            model.palette_selected = move_palette(model.palette_selected, direction);
        }
        Message::FormatMove(direction) => {
            model.format_selected = move_format(model.format_selected, direction);
        }
        Message::PaletteClick(idx) => {
            if let Some(entry) = COLORS.get(idx) {
                model.palette_selected = idx;
                model.focus = Focus::Palette;
                model.append_code(entry.code);
            }
        }
        Message::FormatClick(idx) => {
            if let Some(entry) = FORMATS.get(idx) {
                model.format_selected = idx;
                model.focus = Focus::Formats;
                model.append_code(entry.code);
            }
        }
        Message::FocusNext => model.focus = model.focus.next(),
        Message::FocusPrev => model.focus = model.focus.prev(),
        Message::SetFocus(focus) => model.focus = focus,

        Message::EditorInsertChar(ch) => model.buffer.insert_char(ch),
        Message::EditorInsertStr(text) => model.buffer.insert_str(&text),
        Message::EditorDeleteBack => {
            model.buffer.delete_back();
        }
        Message::EditorDeleteForward => {
            model.buffer.delete_forward();
        }
        Message::EditorSplitLine => model.buffer.split_line(),
        Message::EditorMoveCursor(direction) => model.buffer.move_cursor(direction),
        Message::EditorMoveHome => model.buffer.move_home(),
        Message::EditorMoveEnd => model.buffer.move_end(),
        Message::EditorMoveTo(line, col) => {
            model.buffer.move_to(line, col);
            model.focus = Focus::Editor;
        }

        Message::ToggleNotation => model.notation = model.notation.toggled(),
        Message::ToggleTheme => model.theme = model.theme.toggled(),
        Message::TogglePreviewMode => {
            model.preview_mode = match model.preview_mode {
                PreviewMode::Styled => PreviewMode::Markup,
                PreviewMode::Markup => PreviewMode::Styled,
            };
        }

        // Handled as a side effect after update
        Message::CopyText => {}

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => model.size = (width, height),
        Message::Quit => model.should_quit = true,
    }
    model
}

fn move_palette(selected: usize, direction: Direction) -> usize {
    let len = COLORS.len();
    match direction {
        Direction::Left => (selected + len - 1) % len,
        Direction::Right => (selected + 1) % len,
        Direction::Up | Direction::Down => (selected + PALETTE_COLUMNS) % len,
    }
}

fn move_format(selected: usize, direction: Direction) -> usize {
    let len = FORMATS.len();
    match direction {
        Direction::Left => (selected + len - 1) % len,
        Direction::Right => (selected + 1) % len,
        Direction::Up | Direction::Down => selected,
    }
}
