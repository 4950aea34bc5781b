//! Coloured toy-block labels.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Colours cycled through by [`BlockHeader`].
pub const BLOCK_COLORS: [Color; 6] = [
    Color::Rgb(0x1E, 0x88, 0xE5),
    Color::Rgb(0x43, 0xA0, 0x47),
    Color::Rgb(0xFB, 0x8C, 0x00),
    Color::Rgb(0x8E, 0x24, 0xAA),
    Color::Rgb(0xD3, 0x1F, 0x20),
    Color::Rgb(0xF0, 0xD2, 0x2E),
];

/// A bordered label drawn in a single colour.
#[derive(Debug, Clone, Copy)]
pub struct GameBlock<'a> {
    text: &'a str,
    color: Color,
    highlighted: bool,
}

impl<'a> GameBlock<'a> {
    #[must_use]
    pub const fn new(text: &'a str, color: Color) -> Self {
        Self {
            text,
            color,
            highlighted: false,
        }
    }

    #[must_use]
    pub const fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Columns needed to draw the block without clipping.
    #[must_use]
    pub fn width(&self) -> u16 {
        u16::try_from(self.text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
    }

    pub const HEIGHT: u16 = 3;
}

impl Widget for GameBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = Style::default().fg(self.color).add_modifier(Modifier::BOLD);
        let border_type = if self.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(self.color));

        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }
}

/// A word spelled one letter per block, e.g. `LOGIN` or `REGISTRO`.
#[derive(Debug, Clone, Copy)]
pub struct BlockHeader<'a> {
    word: &'a str,
}

impl<'a> BlockHeader<'a> {
    const LETTER_WIDTH: u16 = 5;
    const GAP: u16 = 1;

    #[must_use]
    pub const fn new(word: &'a str) -> Self {
        Self { word }
    }

    /// Total width of the header.
    #[must_use]
    pub fn width(&self) -> u16 {
        let letters = u16::try_from(self.word.chars().count()).unwrap_or(u16::MAX);
        letters
            .saturating_mul(Self::LETTER_WIDTH + Self::GAP)
            .saturating_sub(Self::GAP)
    }
}

impl Widget for BlockHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let start = area.x + area.width.saturating_sub(self.width()) / 2;
        let mut letter = [0u8; 4];

        for (index, (column, c)) in (0u16..).zip(self.word.chars()).enumerate() {
            let x = start + column * (Self::LETTER_WIDTH + Self::GAP);
            let cell = Rect::new(x, area.y, Self::LETTER_WIDTH, GameBlock::HEIGHT);
            let cell = area.intersection(cell);
            if cell.is_empty() {
                break;
            }

            let color = BLOCK_COLORS[index % BLOCK_COLORS.len()];
            GameBlock::new(c.encode_utf8(&mut letter), color).render(cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_width() {
        assert_eq!(BlockHeader::new("LOGIN").width(), 29);
        assert_eq!(BlockHeader::new("REGISTRO").width(), 47);
    }

    #[test]
    fn test_letters_use_distinct_colours() {
        let area = Rect::new(0, 0, 29, 3);
        let mut buf = Buffer::empty(area);
        BlockHeader::new("LOGIN").render(area, &mut buf);

        assert_eq!(buf[(2, 1)].symbol(), "L");
        assert_eq!(buf[(8, 1)].symbol(), "O");
        assert_ne!(buf[(2, 1)].fg, buf[(8, 1)].fg);
    }

    #[test]
    fn test_block_width_fits_label() {
        assert_eq!(GameBlock::new("Invitado", Color::Red).width(), 12);
    }
}
