//! Full-page busy indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animation position, advanced once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerState {
    frame: usize,
}

impl SpinnerState {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }
}

/// Spinner and caption centred in the given area.
pub struct Spinner<'a> {
    state: SpinnerState,
    caption: &'a str,
    style: Style,
}

impl<'a> Spinner<'a> {
    #[must_use]
    pub fn new(state: SpinnerState, caption: &'a str) -> Self {
        Self {
            state,
            caption,
            style: Style::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, 1.min(area.height));

        Paragraph::new(Line::from(vec![
            Span::styled(self.state.glyph(), self.style.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(self.caption, self.style),
        ]))
        .alignment(Alignment::Center)
        .render(line_area, buf);
    }
}
