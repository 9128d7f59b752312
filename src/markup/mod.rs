//! Code-annotated text to styled HTML markup.
//!
//! Every recognized escape sequence opens a `<span>` carrying the code's
//! style. Nothing is closed until a reset (`&r`) or the end of input.
//! How many spans a reset closes depends on the [`ResetMode`]:
//!
//! - [`ResetMode::Tracked`] keeps a [`StyleStack`] and closes exactly the
//!   regions that are open, so the output is always balanced.
//! - [`ResetMode::Legacy`] always closes five spans on reset and appends a
//!   single `</span>` at the end, matching markup produced by older
//!   versions of the generator. Format codes are looked up
//!   case-insensitively here, where the old generator emitted an
//!   `undefined` style for upper-case `L`, `O`, `N`, `M`, `K` and `R`.

mod stack;
mod token;

pub use stack::{Region, StyleStack, Transition};
pub use token::{Token, tokenize};

use std::fmt::Write;

use crate::codes::Code;

pub const CLOSE_TAG: &str = "</span>";
pub const NEUTRAL_OPEN_TAG: &str = "<span style=\"all:unset\">";

const LEGACY_RESET_DEPTH: usize = 5;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// Close exactly the open regions.
    #[default]
    Tracked,
    /// Close five regions on reset, one at the end.
    Legacy,
}

/// How literal text is written into the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Emit text verbatim. Markup typed by the user is passed through.
    #[default]
    Trusted,
    /// HTML-escape text before style tags are inserted.
    Escaped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub reset: ResetMode,
    pub text: TextPolicy,
}

/// Render with the default options (tracked resets, trusted text).
pub fn render(source: &str) -> String {
    render_with(source, RenderOptions::default())
}

pub fn render_with(source: &str, options: RenderOptions) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut stack = StyleStack::new();

    for token in tokenize(source) {
        match token {
            Token::Text(text) => push_text(&mut out, text, options.text),
            Token::Code { code, .. } => {
                let transition = stack.apply(code);
                if code == Code::Reset {
                    let closes = match options.reset {
                        ResetMode::Tracked => transition.closed,
                        ResetMode::Legacy => LEGACY_RESET_DEPTH,
                    };
                    push_closes(&mut out, closes);
                }
                push_open(&mut out, transition.opened);
            }
        }
    }

    let trailing = match options.reset {
        ResetMode::Tracked => stack.close_all(),
        ResetMode::Legacy => 1,
    };
    push_closes(&mut out, trailing);
    out
}

fn push_open(out: &mut String, region: Region) {
    match region {
        Region::Color(hex) => {
            let _ = write!(out, "<span style=\"color: {hex}\">");
        }
        Region::Style(effect) => {
            let _ = write!(out, "<span style=\"{}\">", effect.css());
        }
        Region::Neutral => out.push_str(NEUTRAL_OPEN_TAG),
    }
}

fn push_closes(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push_str(CLOSE_TAG);
    }
}

fn push_text(out: &mut String, text: &str, policy: TextPolicy) {
    match policy {
        TextPolicy::Trusted => out.push_str(text),
        TextPolicy::Escaped => {
            for ch in text.chars() {
                match ch {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '"' => out.push_str("&quot;"),
                    '\'' => out.push_str("&#39;"),
                    _ => out.push(ch),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{COLORS, FORMATS, FormatEffect, lookup_color, lookup_format};
    use crate::notation::{Notation, encode};
    use proptest::prelude::*;
    use regex::{Captures, Regex};

    const LEGACY: RenderOptions = RenderOptions {
        reset: ResetMode::Legacy,
        text: TextPolicy::Trusted,
    };

    const ESCAPED: RenderOptions = RenderOptions {
        reset: ResetMode::Tracked,
        text: TextPolicy::Escaped,
    };

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    // The three-pass substitution legacy mode reproduces, with the
    // case-insensitive format lookup.
    fn three_pass(text: &str) -> String {
        let colors = Regex::new("[&§]([0-9a-fA-F])").unwrap();
        let pass1 = colors.replace_all(text, |caps: &Captures| {
            let code = caps[1].chars().next().unwrap();
            format!("<span style=\"color: {}\">", lookup_color(code).unwrap().hex)
        });
        let formats = Regex::new("[&§]([lormnkLORMNK])").unwrap();
        let pass2 = formats.replace_all(&pass1, |caps: &Captures| {
            let code = caps[1].chars().next().unwrap();
            match lookup_format(code).unwrap().effect {
                FormatEffect::Reset => {
                    "</span></span></span></span></span><span style=\"all:unset\">".to_string()
                }
                FormatEffect::Style(effect) => format!("<span style=\"{}\">", effect.css()),
            }
        });
        let resets = Regex::new("[&§][rR]").unwrap();
        let pass3 = resets.replace_all(&pass2, "</span><span style=\"all:unset\">");
        format!("{pass3}</span>")
    }

    #[test]
    fn test_legacy_upper_case_format_gets_its_style() {
        assert_eq!(
            render_with("&LBold", LEGACY),
            "<span style=\"font-weight: bold;\">Bold</span>"
        );
        assert!(!render_with("&Rx", LEGACY).contains("undefined"));
    }

    #[test]
    fn test_render_empty_has_no_visible_content() {
        assert_eq!(render(""), "");
        assert_eq!(render_with("", LEGACY), "</span>");
    }

    #[test]
    fn test_render_color_wraps_text() {
        assert_eq!(
            render("&4Hello"),
            "<span style=\"color: #AA0000\">Hello</span>"
        );
        assert_eq!(
            render_with("&4Hello", LEGACY),
            "<span style=\"color: #AA0000\">Hello</span>"
        );
    }

    #[test]
    fn test_render_reset_closes_bold_before_neutral() {
        assert_eq!(
            render("&lBold &rNormal"),
            "<span style=\"font-weight: bold;\">Bold </span>\
             <span style=\"all:unset\">Normal</span>"
        );
    }

    #[test]
    fn test_legacy_reset_closes_five_levels() {
        assert_eq!(
            render_with("&lBold &rNormal", LEGACY),
            "<span style=\"font-weight: bold;\">Bold </span></span></span></span></span>\
             <span style=\"all:unset\">Normal</span>"
        );
    }

    #[test]
    fn test_render_consecutive_codes_nest() {
        let html = render("&9&nLink");
        assert_eq!(
            html,
            "<span style=\"color: #5555FF\"><span style=\"text-decoration: underline;\">\
             Link</span></span>"
        );
    }

    #[test]
    fn test_render_code_without_text_is_empty_span() {
        for notation in [Notation::Primary, Notation::Alternate] {
            let html = render(&encode('6', notation));
            assert_eq!(html, "<span style=\"color: #FFAA00\"></span>");
            let legacy = render_with(&encode('k', notation), LEGACY);
            assert_eq!(
                legacy,
                "<span style=\"animation: magic-text 1s infinite;\"></span>"
            );
        }
    }

    #[test]
    fn test_render_unknown_code_is_literal() {
        assert_eq!(render("&zTest"), "&zTest");
        assert!(render_with("&zTest", LEGACY).starts_with("&zTest"));
    }

    #[test]
    fn test_render_accepts_both_escape_chars_any_case() {
        assert_eq!(render("§cHi"), render("&cHi"));
        assert_eq!(render("&LHi"), render("&lHi"));
        assert_eq!(render("&CHi"), "<span style=\"color: #FF5555\">Hi</span>");
    }

    #[test]
    fn test_every_table_entry_renders_a_span() {
        for entry in COLORS {
            let html = render(&format!("&{}x", entry.code));
            assert!(html.contains(&entry.hex.to_string()), "{html}");
        }
        for entry in FORMATS {
            let html = render(&format!("&{}x", entry.code));
            assert!(html.starts_with("<span"), "{html}");
        }
    }

    #[test]
    fn test_tracked_reset_handles_deep_nesting() {
        let html = render("&a&l&o&n&m&kDeep&rFlat");
        let (before, after) = html.split_once("Deep").unwrap();
        assert_eq!(count(before, "<span"), 6);
        assert!(after.starts_with(&CLOSE_TAG.repeat(6)));
        assert!(after.ends_with("<span style=\"all:unset\">Flat</span>"));
    }

    #[test]
    fn test_escaped_policy_escapes_only_literal_text() {
        let html = render_with("&4<b>&zx</b>", ESCAPED);
        assert_eq!(
            html,
            "<span style=\"color: #AA0000\">&lt;b&gt;&amp;zx&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_trusted_policy_passes_markup_through() {
        assert_eq!(render("<i>x</i>"), "<i>x</i>");
    }

    proptest! {
        #[test]
        fn prop_tracked_output_is_balanced(source in "[a-z0-9&§ \\nRLK]{0,48}") {
            let html = render_with(&source, ESCAPED);
            prop_assert_eq!(count(&html, "<span"), count(&html, "</span>"));
        }

        #[test]
        fn prop_legacy_matches_three_pass(source in "[a-z0-9A-F&§ RLKxyz]{0,48}") {
            prop_assert_eq!(render_with(&source, LEGACY), three_pass(&source));
        }

        #[test]
        fn prop_text_without_escapes_is_unchanged(source in "[^&§<>\"']{0,64}") {
            prop_assert_eq!(render(&source), source.clone());
            prop_assert_eq!(render_with(&source, ESCAPED), source);
        }
    }
}
