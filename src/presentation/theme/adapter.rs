//! Conversions between terminal colours and HSL.

use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Approximates the RGB value a terminal renders for `color`.
#[must_use]
pub fn approximate_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(i) => indexed_rgb(i),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        Color::White | Color::Reset => (255, 255, 255),
    }
}

/// Returns `color` with its saturation and lightness replaced.
#[must_use]
pub fn with_tone(color: Color, saturation: f32, lightness: f32) -> Color {
    let (r, g, b) = approximate_rgb(color);
    let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
    hsl.s = saturation.clamp(0.0, 1.0);
    hsl.l = lightness.clamp(0.0, 1.0);

    let rgb: Rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn indexed_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => approximate_rgb(BASE_16[usize::from(i)]),
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

const BASE_16: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_cube() {
        assert_eq!(indexed_rgb(208), (255, 135, 0));
        assert_eq!(indexed_rgb(16), (0, 0, 0));
        assert_eq!(indexed_rgb(231), (255, 255, 255));
        assert_eq!(indexed_rgb(9), (255, 85, 85));
    }

    #[test]
    fn test_with_tone_darkens() {
        let Color::Rgb(r, g, b) = with_tone(Color::Rgb(240, 210, 46), 0.3, 0.2) else {
            panic!("expected rgb");
        };
        assert!(r < 120 && g < 120 && b < 120);
    }
}
