//! Terminal rendition of the preview.
//!
//! Walks the same token stream as the HTML renderer and keeps the same
//! region stack, so the terminal preview and the markup agree on what is
//! styled how.

use ratatui::text::{Line, Span};

use crate::markup::{StyleStack, Token, tokenize};

use super::style::style_for_regions;

/// Styled lines for `source`. Style carries across line breaks.
pub fn styled_lines(source: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    let mut stack = StyleStack::new();

    for token in tokenize(source) {
        match token {
            Token::Text(text) => {
                let style = style_for_regions(stack.regions());
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Line::default());
                    }
                    let part = part.trim_end_matches('\r');
                    if part.is_empty() {
                        continue;
                    }
                    if let Some(line) = lines.last_mut() {
                        line.spans.push(Span::styled(part.to_string(), style));
                    }
                }
            }
            Token::Code { code, .. } => {
                stack.apply(code);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier, Style};

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_source_is_one_empty_line() {
        let lines = styled_lines("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_color_code_sets_foreground() {
        let lines = styled_lines("&4Hello");
        assert_eq!(plain(&lines[0]), "Hello");
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(0xAA, 0, 0)));
    }

    #[test]
    fn test_reset_returns_to_plain() {
        let lines = styled_lines("&lBold &rNormal");
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[1].content, "Normal");
        assert_eq!(spans[1].style, Style::default());
    }

    #[test]
    fn test_style_carries_across_lines() {
        let lines = styled_lines("&oone\ntwo\r\n&rthree");
        assert_eq!(lines.len(), 3);
        assert_eq!(plain(&lines[1]), "two");
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(lines[2].spans[0].style, Style::default());
    }

    #[test]
    fn test_unknown_code_shown_literally() {
        let lines = styled_lines("&zTest");
        assert_eq!(plain(&lines[0]), "&zTest");
    }
}
