//! System clipboard writes.
//!
//! macOS goes through `pbcopy`; everywhere else (and as the macOS
//! fallback) the text is sent to the terminal as an OSC 52 sequence,
//! which works over SSH as long as the terminal allows it.

use std::io::{IsTerminal, Write, stdout};

use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} exited unsuccessfully")]
    CommandFailed(&'static str),
    /// No `pbcopy`, and stdout is not a terminal that could take OSC 52.
    #[error("no clipboard available: stdout is not a terminal")]
    Unsupported,
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if neither `pbcopy` (macOS) nor the terminal write
/// succeeds.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "macos")]
    {
        match copy_to_pbcopy(text) {
            Ok(()) => return Ok(()),
            Err(err) => tracing::debug!(%err, "pbcopy unavailable, falling back to OSC 52"),
        }
    }
    let mut out = stdout();
    if !out.is_terminal() {
        return Err(ClipboardError::Unsupported);
    }
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn copy_to_pbcopy(text: &str) -> Result<(), ClipboardError> {
    use std::process::{Command, Stdio};

    let mut child = Command::new("pbcopy").stdin(Stdio::piped()).spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    if child.wait()?.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed("pbcopy"))
    }
}

/// OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_encodes_text() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_sequence_encodes_section_sign_as_utf8() {
        // "§a" is C2 A7 61
        assert_eq!(osc52_sequence("§a"), "\x1b]52;c;wqdh\x07");
    }

    #[test]
    fn test_error_messages() {
        let err = ClipboardError::CommandFailed("pbcopy");
        assert_eq!(err.to_string(), "pbcopy exited unsuccessfully");
        let io = ClipboardError::from(std::io::Error::other("no tty"));
        assert_eq!(io.to_string(), "clipboard write failed: no tty");
        assert_eq!(
            ClipboardError::Unsupported.to_string(),
            "no clipboard available: stdout is not a terminal"
        );
    }
}
