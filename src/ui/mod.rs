//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Pane geometry shared by rendering and mouse hit-testing
//! - [`preview`]: Terminal rendition of code-annotated text
//! - [`style`]: Theming and colors

pub mod layout;
pub mod preview;
pub mod style;

mod overlays;
mod render;
mod status;

pub use render::render;
