//! Light/dark display theme and one-shot terminal background detection.
//!
//! The theme is resolved once at startup. With `--theme auto` the terminal
//! is asked for its background color (OSC 11); if it does not answer, the
//! `COLORFGBG` environment variable decides, and dark is the fallback.
//! After startup the theme only changes through the manual toggle.

use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::codes::Rgb;
use crate::config::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve the startup theme for a configured mode.
pub fn resolve(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::Light,
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Auto => detect().unwrap_or_else(|| {
            theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
        }),
    }
}

fn detect() -> Option<Theme> {
    let _raw = enable_raw_mode();
    let result = query_terminal_background();
    let _ = disable_raw_mode();
    match result {
        Ok(Some((r, g, b))) => {
            let theme = theme_from_rgb(r, g, b);
            tracing::debug!(r, g, b, theme = theme.label(), "terminal background detected");
            Some(theme)
        }
        Ok(None) => None,
        Err(err) => {
            tracing::debug!(%err, "terminal background query failed");
            None
        }
    }
}

// We talk to /dev/tty so the terminal responds even when stdout is piped.
// Non-Unix platforms skip the query: the stdin fallback leaves a reader
// thread blocking the console input buffer.
#[cfg(not(unix))]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    Ok(None)
}

#[cfg(unix)]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    use std::io::{Read, Write};
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel();

    let mut io = std::fs::OpenOptions::new().read(true).write(true).open("/dev/tty")?;
    let mut reader = io.try_clone()?;

    // ESC ] 11 ; ? BEL
    io.write_all(b"\x1b]11;?\x07")?;
    io.flush()?;

    std::thread::spawn(move || {
        let mut buf = [0u8; 256];
        let mut collected: Vec<u8> = Vec::new();
        loop {
            match reader.read(&mut buf) {
                Ok(0) => continue,
                Ok(n) => {
                    collected.extend_from_slice(&buf[..n]);
                    if collected.contains(&b'\x07') || collected.windows(2).any(|w| w == b"\x1b\\") {
                        let _ = tx.send(collected);
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let Ok(bytes) = rx.recv_timeout(Duration::from_millis(75)) else {
        return Ok(None);
    };
    Ok(parse_osc11_reply(&String::from_utf8_lossy(&bytes)))
}

pub fn theme_from_rgb(r: u8, g: u8, b: u8) -> Theme {
    let background = Rgb { r, g, b };
    if background.luma() >= 140.0 {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); ANSI 7+ is light.
pub fn theme_from_colorfgbg(colorfgbg: Option<&str>) -> Theme {
    let Some(value) = colorfgbg else {
        return Theme::Dark;
    };
    let bg = value.rsplit(';').next().unwrap_or(value);
    match bg.parse::<u8>() {
        Ok(bg) if bg >= 7 => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Parse `ESC ] 11 ; rgb:RRRR/GGGG/BBBB` terminated by BEL or ST.
pub fn parse_osc11_reply(reply: &str) -> Option<(u8, u8, u8)> {
    let start = reply.find("rgb:")?;
    let data = &reply[start + 4..];
    let mut parts = data.split(['/', '\x07', '\x1b']);
    let r = parts.next()?;
    let g = parts.next()?;
    let b = parts.next()?;
    Some((
        parse_osc_component(r)?,
        parse_osc_component(g)?,
        parse_osc_component(b)?,
    ))
}

fn parse_osc_component(s: &str) -> Option<u8> {
    let hex = s.trim();
    if hex.len() >= 4 {
        let v = u16::from_str_radix(hex.get(..4)?, 16).ok()?;
        u8::try_from(v >> 8).ok()
    } else if hex.len() == 2 {
        u8::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_osc11_reply_four_digit_components() {
        let reply = "\x1b]11;rgb:ffff/ffff/ffff\x07";
        assert_eq!(parse_osc11_reply(reply), Some((255, 255, 255)));
    }

    #[test]
    fn test_parse_osc11_reply_st_terminated() {
        let reply = "\x1b]11;rgb:1e1e/1e1e/2e2e\x1b\\";
        assert_eq!(parse_osc11_reply(reply), Some((0x1e, 0x1e, 0x2e)));
    }

    #[test]
    fn test_parse_osc11_reply_garbage() {
        assert_eq!(parse_osc11_reply("nothing here"), None);
        assert_eq!(parse_osc11_reply("rgb:zz/00/00"), None);
    }

    #[test]
    fn test_theme_from_rgb() {
        assert_eq!(theme_from_rgb(250, 250, 250), Theme::Light);
        assert_eq!(theme_from_rgb(20, 20, 30), Theme::Dark);
        assert_eq!(theme_from_rgb(150, 150, 150), Theme::Light);
        assert_eq!(theme_from_rgb(130, 130, 130), Theme::Dark);
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(theme_from_colorfgbg(Some("0;15")), Theme::Light);
        assert_eq!(theme_from_colorfgbg(Some("15;0")), Theme::Dark);
        assert_eq!(theme_from_colorfgbg(Some("15;default;7")), Theme::Light);
        assert_eq!(theme_from_colorfgbg(None), Theme::Dark);
    }

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(resolve(ThemeMode::Light), Theme::Light);
        assert_eq!(resolve(ThemeMode::Dark), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
