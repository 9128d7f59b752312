use crate::app::{App, Message, Model, ToastLevel};
use crate::clipboard::{self, ClipboardError};

pub(super) const COPY_OK: &str = "Text copied to clipboard!";
pub(super) const COPY_FAILED: &str = "Failed to copy text!";
pub(super) const COPY_UNSUPPORTED: &str = "Clipboard is not supported here!";

impl App {
    /// Run the side effect, if any, attached to a message that has
    /// already gone through [`update`](crate::app::update).
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if matches!(msg, Message::CopyText) {
            let text = model.buffer.text();
            let result = clipboard::copy(&text);
            report_copy(model, text.chars().count(), result);
        }
    }
}

/// Turn a clipboard outcome into a toast. The buffer is never touched.
pub(super) fn report_copy(model: &mut Model, chars: usize, result: Result<(), ClipboardError>) {
    match result {
        Ok(()) => {
            tracing::debug!(chars, "copied buffer to clipboard");
            crate::perf::log_event("effect.copy", format!("ok chars={chars}"));
            model.show_toast(ToastLevel::Info, COPY_OK);
        }
        Err(ClipboardError::Unsupported) => {
            tracing::warn!("no clipboard route available");
            crate::perf::log_event("effect.copy", "unsupported");
            model.show_toast(ToastLevel::Warning, COPY_UNSUPPORTED);
        }
        Err(err) => {
            tracing::warn!(%err, "clipboard copy failed");
            crate::perf::log_event("effect.copy", format!("err={err}"));
            model.show_toast(ToastLevel::Error, COPY_FAILED);
        }
    }
}
