//! Rope-backed source buffer with cursor management.
//!
//! Holds the code-annotated text the user is composing.

mod buffer;

pub use buffer::{Cursor, Direction, SourceBuffer};
