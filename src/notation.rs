//! Escape-character notation and code encoding.
//!
//! Java edition text uses `&` as the escape character, Bedrock uses `§`.
//! The notation only decides what gets *emitted*; the markup renderer
//! accepts either character on input.

/// Escape characters recognized on input.
pub const ESCAPE_CHARS: [char; 2] = ['&', '§'];

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `&` (Java edition)
    #[default]
    #[value(alias = "java")]
    Primary,
    /// `§` (Bedrock edition)
    #[value(alias = "bedrock")]
    Alternate,
}

impl Notation {
    pub const fn escape_char(self) -> char {
        match self {
            Self::Primary => '&',
            Self::Alternate => '§',
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Alternate,
            Self::Alternate => Self::Primary,
        }
    }

    /// Label shown in the status bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Java (&)",
            Self::Alternate => "Bedrock (§)",
        }
    }

    /// Token used in config files and on the command line.
    pub const fn as_flag_value(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Alternate => "alternate",
        }
    }

    pub fn from_flag_value(s: &str) -> Option<Self> {
        match s {
            "primary" | "java" => Some(Self::Primary),
            "alternate" | "bedrock" => Some(Self::Alternate),
            _ => None,
        }
    }
}

/// Escape sequence for `code` in the given notation.
///
/// Any character is accepted verbatim.
pub fn encode(code: char, notation: Notation) -> String {
    let mut out = String::with_capacity(code.len_utf8() + 2);
    out.push(notation.escape_char());
    out.push(code);
    out
}
