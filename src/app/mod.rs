//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, PALETTE_COLUMNS, PreviewMode, ToastLevel};
pub use update::{Message, update};

use crate::markup::RenderOptions;
use crate::notation::Notation;
use crate::theme::Theme;

/// Main application struct that owns the startup settings and runs the
/// event loop.
pub struct App {
    initial_text: String,
    notation: Notation,
    theme: Theme,
    render_options: RenderOptions,
}

impl App {
    /// Create an application whose buffer starts with `initial_text`.
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            initial_text: initial_text.into(),
            notation: Notation::default(),
            theme: Theme::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the notation palette and format actions start with.
    #[must_use]
    pub const fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Set the theme resolved at startup.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set how the markup pane renders the buffer.
    #[must_use]
    pub const fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }
}
