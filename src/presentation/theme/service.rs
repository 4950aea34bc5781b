use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use super::adapter::with_tone;

/// Styles shared by every screen.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub error_style: Style,
    pub link_style: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new("Yellow")
    }
}

impl Palette {
    /// Builds the palette from an accent name or hex code.
    #[must_use]
    pub fn new(accent: &str) -> Self {
        Self::from_color(parse_color(accent))
    }

    /// Builds the palette from a parsed accent colour.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let selection_bg = with_tone(accent, 0.3, 0.2);

        Self {
            accent,
            selection_style: Style::default().bg(selection_bg).fg(Color::White),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            error_style: Style::default().fg(Color::Red),
            link_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Foreground in the accent colour.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

/// Parses a colour name or `#rgb`/`#rrggbb` code, falling back to yellow.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = s.strip_prefix('#').and_then(parse_hex) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "pink" => Color::Indexed(218),
        _ => Color::Yellow,
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();

    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}
