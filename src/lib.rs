// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. config::ConfigFlags)
    clippy::module_name_repetitions
)]

//! # mcformat
//!
//! A terminal composer for Minecraft color and format codes.
//!
//! Text is typed with `&` or `§` escape sequences (`&4` dark red, `&l`
//! bold, `&r` reset). A palette appends codes, the preview shows the
//! styled result, and the markup pane shows the HTML that the
//! [`markup`] renderer produces for the same text.
//!
//! ## Architecture
//!
//! mcformat uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`codes`]: The sixteen colors and six formats
//! - [`notation`]: Escape characters and code encoding
//! - [`markup`]: Code-annotated text to HTML
//! - [`editor`]: Source text buffer
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`clipboard`]: System clipboard access
//! - [`theme`]: Light and dark themes, terminal background detection
//! - [`config`]: Saved defaults

pub mod app;
pub mod clipboard;
pub mod codes;
pub mod config;
pub mod editor;
pub mod markup;
pub mod notation;
pub mod perf;
pub mod theme;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::markup::{RenderOptions, ResetMode, TextPolicy, render, render_with};
    pub use crate::notation::{Notation, encode};
}
