use std::sync::LazyLock;

use regex::Regex;

use crate::codes::{self, Code};

// Spelled out instead of `(?i)`: Unicode case folding would let `k` match
// the Kelvin sign.
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[&§]([0-9a-fA-Fk-oK-OrR])").expect("code pattern is valid")
});

/// A piece of annotated source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, including any unrecognized escape sequences.
    Text(&'a str),
    /// A recognized escape sequence; `raw` is the sequence as written.
    Code { raw: &'a str, code: Code },
}

/// Split `source` into literal runs and recognized codes.
///
/// An escape character followed by anything outside the code table stays
/// in the surrounding text run.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for caps in CODE_PATTERN.captures_iter(source) {
        let (Some(whole), Some(code_match)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(code) = code_match.as_str().chars().next().and_then(codes::lookup) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::Text(&source[last..whole.start()]));
        }
        tokens.push(Token::Code {
            raw: whole.as_str(),
            code,
        });
        last = whole.end();
    }
    if last < source.len() {
        tokens.push(Token::Text(&source[last..]));
    }
    tokens
}
