//! Two-column grid of content tiles.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{ContentTile, Item};
use crate::presentation::theme::Palette;

/// Number of tile columns.
pub const GRID_COLUMNS: usize = 2;

/// Cursor over a two-column tile grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileGridState {
    selected: usize,
    len: usize,
}

impl TileGridState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Index of the highlighted tile.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Replaces the tile count, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn move_left(&mut self) {
        if self.selected % GRID_COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected % GRID_COLUMNS + 1 < GRID_COLUMNS && self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + GRID_COLUMNS < self.len {
            self.selected += GRID_COLUMNS;
        }
    }
}

/// Renders the tiles of the active theme.
pub struct TileGrid<'a> {
    tiles: &'a [ContentTile],
    playing: Option<Item>,
    palette: &'a Palette,
}

impl<'a> TileGrid<'a> {
    #[must_use]
    pub const fn new(tiles: &'a [ContentTile], palette: &'a Palette) -> Self {
        Self {
            tiles,
            playing: None,
            palette,
        }
    }

    /// Marks the tile whose clip is currently playing.
    #[must_use]
    pub const fn playing(mut self, item: Option<Item>) -> Self {
        self.playing = item;
        self
    }

    fn render_tile(&self, tile: &ContentTile, selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if selected {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let label = if self.playing == Some(tile.item) {
            format!(" ♪ {} ♪ ", tile.label)
        } else {
            format!(" {} ", tile.label)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title_bottom(Line::styled(label, border_style).centered());

        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(color) = swatch(tile.item) {
            Block::default()
                .style(Style::default().bg(color))
                .render(shrink(inner, 2, 1), buf);
            return;
        }

        let art = Text::from(artwork(tile.item).iter().map(|row| Line::from(*row)).collect::<Vec<_>>());
        let art_height = u16::try_from(art.lines.len()).unwrap_or(0);
        let top = inner.y + inner.height.saturating_sub(art_height) / 2;
        let art_area = Rect::new(inner.x, top, inner.width, art_height.min(inner.height));

        Paragraph::new(art)
            .alignment(Alignment::Center)
            .style(Style::default().fg(art_color(tile.item)))
            .render(art_area, buf);
    }
}

impl StatefulWidget for TileGrid<'_> {
    type State = TileGridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.set_len(self.tiles.len());

        let rows = self.tiles.len().div_ceil(GRID_COLUMNS);
        if rows == 0 {
            return;
        }

        let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
        for (row, chunk) in self.tiles.chunks(GRID_COLUMNS).enumerate() {
            let cells = Layout::horizontal([Constraint::Fill(1); GRID_COLUMNS])
                .spacing(1)
                .split(row_areas[row]);

            for (column, tile) in chunk.iter().enumerate() {
                let index = row * GRID_COLUMNS + column;
                self.render_tile(tile, index == state.selected(), cells[column], buf);
            }
        }
    }
}

fn shrink(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    Rect::new(
        area.x + horizontal.min(area.width / 2),
        area.y + vertical.min(area.height / 2),
        area.width.saturating_sub(horizontal * 2),
        area.height.saturating_sub(vertical * 2),
    )
}

/// Solid colour painted for colour items.
const fn swatch(item: Item) -> Option<Color> {
    match item {
        Item::Red => Some(Color::Rgb(0xD3, 0x1F, 0x20)),
        Item::Blue => Some(Color::Rgb(0x1E, 0x88, 0xE5)),
        Item::Green => Some(Color::Rgb(0x43, 0xA0, 0x47)),
        Item::Pink => Some(Color::Rgb(0xF4, 0x8F, 0xB1)),
        _ => None,
    }
}

const fn art_color(item: Item) -> Color {
    match item {
        Item::One => Color::Rgb(0xD3, 0x1F, 0x20),
        Item::Two => Color::Rgb(0x1E, 0x88, 0xE5),
        Item::Three => Color::Rgb(0x43, 0xA0, 0x47),
        Item::Four => Color::Rgb(0xFB, 0x8C, 0x00),
        Item::Dog | Item::Lion => Color::Rgb(0xC6, 0x8B, 0x3C),
        Item::Cat => Color::Gray,
        Item::Dinosaur => Color::Rgb(0x43, 0xA0, 0x47),
        Item::Red | Item::Blue | Item::Green | Item::Pink => Color::Reset,
    }
}

/// Glyph artwork drawn in place of the tile picture.
const fn artwork(item: Item) -> &'static [&'static str] {
    match item {
        Item::One => &["  ██  ", "████  ", "  ██  ", "  ██  ", "██████"],
        Item::Two => &["█████ ", "    ██", " ████ ", "██    ", "██████"],
        Item::Three => &["█████ ", "    ██", " ████ ", "    ██", "█████ "],
        Item::Four => &["██  ██", "██  ██", "██████", "    ██", "    ██"],
        Item::Dog => &[
            r"  __      _",
            r"o'')}____//",
            r" `_/      )",
            r" (_(_/-(_/ ",
        ],
        Item::Cat => &[r" /\_/\ ", r"( o.o )", r" > ^ < "],
        Item::Lion => &[
            r"  \\|||//  ",
            r" =( o o )= ",
            r"  //(_)\\  ",
            r"    \_/    ",
        ],
        Item::Dinosaur => &[
            r"            __",
            r"           / _)",
            r"  _.----._/ /",
            r" /         /",
            r"/__/-(_(__/",
        ],
        Item::Red | Item::Blue | Item::Green | Item::Pink => &[],
    }
}
