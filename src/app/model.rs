use std::time::{Duration, Instant};

use crate::codes::{COLORS, FORMATS};
use crate::editor::SourceBuffer;
use crate::markup::{self, RenderOptions};
use crate::notation::{self, Notation};
use crate::theme::Theme;

/// How long a toast stays on screen.
pub(super) const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Colors per palette row.
pub const PALETTE_COLUMNS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Palette,
    Formats,
    #[default]
    Editor,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Palette => Self::Formats,
            Self::Formats => Self::Editor,
            Self::Editor => Self::Palette,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Palette => Self::Editor,
            Self::Formats => Self::Palette,
            Self::Editor => Self::Formats,
        }
    }
}

/// What the preview pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// The text with terminal styles applied.
    #[default]
    Styled,
    /// The generated HTML markup.
    Markup,
}

/// The complete application state.
///
/// The source buffer is the only document state; the preview is derived
/// from it on every frame.
#[derive(Debug, Clone)]
pub struct Model {
    pub buffer: SourceBuffer,
    /// Escape character emitted by palette and format actions
    pub notation: Notation,
    pub theme: Theme,
    pub render_options: RenderOptions,
    pub focus: Focus,
    /// Selected palette cell, index into [`COLORS`]
    pub palette_selected: usize,
    /// Selected format button, index into [`FORMATS`]
    pub format_selected: usize,
    pub preview_mode: PreviewMode,
    pub help_visible: bool,
    pub should_quit: bool,
    /// Terminal size as last reported
    pub size: (u16, u16),
    toast: Option<Toast>,
}

impl Model {
    pub fn new(text: &str, terminal_size: (u16, u16)) -> Self {
        Self {
            buffer: SourceBuffer::from_text(text),
            size: terminal_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Append `code` in the current notation to the end of the buffer.
    pub fn append_code(&mut self, code: char) {
        self.buffer.append_str(&notation::encode(code, self.notation));
    }

    pub fn selected_color_code(&self) -> char {
        COLORS[self.palette_selected.min(COLORS.len() - 1)].code
    }

    pub fn selected_format_code(&self) -> char {
        FORMATS[self.format_selected.min(FORMATS.len() - 1)].code
    }

    /// The buffer rendered as HTML markup.
    pub fn preview_markup(&self) -> String {
        markup::render_with(&self.buffer.text(), self.render_options)
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// Drop the toast once it has expired. Returns `true` if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self {
            buffer: SourceBuffer::empty(),
            notation: Notation::default(),
            theme: Theme::default(),
            render_options: RenderOptions::default(),
            focus: Focus::default(),
            palette_selected: 0,
            format_selected: 0,
            preview_mode: PreviewMode::default(),
            help_visible: false,
            should_quit: false,
            size: (80, 24),
            toast: None,
        }
    }
}
