//! The Minecraft color and format code table.
//!
//! Sixteen color codes (`0`-`9`, `a`-`f`) and six format codes
//! (`l`, `o`, `n`, `m`, `k`, `r`). The tables are compile-time constants;
//! lookups normalize the code to lowercase first.

use std::fmt;

use serde::{Serialize, Serializer};

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[allow(clippy::cast_possible_truncation)]
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }

    /// Perceived brightness (Rec. 709 weights), 0.0..=255.0.
    pub fn luma(self) -> f32 {
        (0.2126 * f32::from(self.r)) + (0.7152 * f32::from(self.g)) + (0.0722 * f32::from(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One of the sixteen named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub code: char,
    pub name: &'static str,
    pub hex: Rgb,
}

impl ColorEntry {
    /// Whether a label drawn on top of this color should be light.
    pub const fn is_dark(&self) -> bool {
        matches!(self.code, '0'..='5' | '8')
    }
}

/// A text-style effect applied by a format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    /// Obfuscated text; previewed as blinking.
    Magic,
}

impl Effect {
    /// Inline CSS declaration used in rendered markup.
    pub const fn css(self) -> &'static str {
        match self {
            Self::Bold => "font-weight: bold;",
            Self::Italic => "font-style: italic;",
            Self::Underline => "text-decoration: underline;",
            Self::Strikethrough => "text-decoration: line-through;",
            Self::Magic => "animation: magic-text 1s infinite;",
        }
    }
}

/// What a format code does: apply an effect or reset everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatEffect {
    Style(Effect),
    Reset,
}

/// One of the six format codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatEntry {
    pub code: char,
    pub label: &'static str,
    pub effect: FormatEffect,
}

/// A recognized code, resolved against both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Color(ColorEntry),
    Style(Effect),
    Reset,
}

const fn color(code: char, name: &'static str, hex: u32) -> ColorEntry {
    ColorEntry {
        code,
        name,
        hex: Rgb::from_hex(hex),
    }
}

const fn format(code: char, label: &'static str, effect: FormatEffect) -> FormatEntry {
    FormatEntry {
        code,
        label,
        effect,
    }
}

pub const COLORS: [ColorEntry; 16] = [
    color('0', "Black", 0x00_0000),
    color('1', "Dark Blue", 0x00_00AA),
    color('2', "Dark Green", 0x00_AA00),
    color('3', "Dark Aqua", 0x00_AAAA),
    color('4', "Dark Red", 0xAA_0000),
    color('5', "Dark Purple", 0xAA_00AA),
    color('6', "Gold", 0xFF_AA00),
    color('7', "Gray", 0xAA_AAAA),
    color('8', "Dark Gray", 0x55_5555),
    color('9', "Blue", 0x55_55FF),
    color('a', "Green", 0x55_FF55),
    color('b', "Aqua", 0x55_FFFF),
    color('c', "Red", 0xFF_5555),
    color('d', "Light Purple", 0xFF_55FF),
    color('e', "Yellow", 0xFF_FF55),
    color('f', "White", 0xFF_FFFF),
];

pub const FORMATS: [FormatEntry; 6] = [
    format('l', "Bold", FormatEffect::Style(Effect::Bold)),
    format('o', "Italic", FormatEffect::Style(Effect::Italic)),
    format('n', "Underline", FormatEffect::Style(Effect::Underline)),
    format('m', "Strikethrough", FormatEffect::Style(Effect::Strikethrough)),
    format('k', "Magic", FormatEffect::Style(Effect::Magic)),
    format('r', "Reset", FormatEffect::Reset),
];

pub fn lookup_color(code: char) -> Option<ColorEntry> {
    let code = code.to_ascii_lowercase();
    COLORS.iter().find(|entry| entry.code == code).copied()
}

pub fn lookup_format(code: char) -> Option<FormatEntry> {
    let code = code.to_ascii_lowercase();
    FORMATS.iter().find(|entry| entry.code == code).copied()
}

/// Resolve a code against the color table, then the format table.
pub fn lookup(code: char) -> Option<Code> {
    if let Some(entry) = lookup_color(code) {
        return Some(Code::Color(entry));
    }
    lookup_format(code).map(|entry| match entry.effect {
        FormatEffect::Style(effect) => Code::Style(effect),
        FormatEffect::Reset => Code::Reset,
    })
}

#[derive(Serialize)]
struct CodeTable {
    colors: &'static [ColorEntry],
    formats: &'static [FormatEntry],
}

/// The full code table as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn table_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CodeTable {
        colors: &COLORS,
        formats: &FORMATS,
    })
}
