//! Theme colors and code-to-terminal style mapping.

use ratatui::style::{Color, Modifier, Style};

use crate::codes::{ColorEntry, Effect, FormatEffect, FormatEntry, Rgb};
use crate::markup::Region;
use crate::theme::Theme;

/// Colors for the chrome around the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub button: Color,
    pub focus: Color,
}

pub const fn theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Light => ThemeColors {
            background: Color::Rgb(243, 244, 246),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(0, 0, 0),
            muted: Color::Rgb(107, 114, 128),
            button: Color::Rgb(229, 231, 235),
            focus: Color::Rgb(66, 153, 225),
        },
        Theme::Dark => ThemeColors {
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            text: Color::Rgb(255, 255, 255),
            muted: Color::Rgb(156, 163, 175),
            button: Color::Rgb(55, 65, 81),
            focus: Color::Rgb(66, 153, 225),
        },
    }
}

pub const fn color_for(hex: Rgb) -> Color {
    Color::Rgb(hex.r, hex.g, hex.b)
}

/// Magic (obfuscated) text has no terminal equivalent; it blinks instead.
pub const fn modifier_for(effect: Effect) -> Modifier {
    match effect {
        Effect::Bold => Modifier::BOLD,
        Effect::Italic => Modifier::ITALIC,
        Effect::Underline => Modifier::UNDERLINED,
        Effect::Strikethrough => Modifier::CROSSED_OUT,
        Effect::Magic => Modifier::SLOW_BLINK,
    }
}

/// Combined style of a stack of open regions, outermost first.
pub fn style_for_regions(regions: &[Region]) -> Style {
    regions
        .iter()
        .fold(Style::default(), |style, region| match region {
            Region::Color(hex) => style.fg(color_for(*hex)),
            Region::Style(effect) => style.add_modifier(modifier_for(*effect)),
            Region::Neutral => Style::default(),
        })
}

pub fn palette_cell_style(entry: &ColorEntry, selected: bool) -> Style {
    let label = if entry.is_dark() {
        Color::White
    } else {
        Color::Black
    };
    let style = Style::default()
        .bg(color_for(entry.hex))
        .fg(label)
        .add_modifier(Modifier::BOLD);
    if selected {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Each format button is drawn in the effect it applies.
pub fn format_button_style(entry: &FormatEntry, colors: ThemeColors, selected: bool) -> Style {
    let mut style = Style::default().bg(colors.button).fg(colors.text);
    if let FormatEffect::Style(effect) = entry.effect {
        // A blinking button is unreadable.
        if effect != Effect::Magic {
            style = style.add_modifier(modifier_for(effect));
        }
    }
    if selected {
        style = style.bg(colors.focus).fg(Color::White);
    }
    style
}
