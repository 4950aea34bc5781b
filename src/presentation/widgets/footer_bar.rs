use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Palette;

/// Key and description shown in the footer.
pub type KeyHint<'a> = (&'a str, &'a str);

pub struct FooterBarStyle {
    pub key_style: Style,
    pub description_style: Style,
    pub right_style: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            key_style: palette
                .selection_style
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            description_style: palette.dimmed_style,
            right_style: palette.dimmed_style.add_modifier(Modifier::ITALIC),
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            description_style: Style::default().fg(Color::DarkGray),
            right_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Bottom line listing the keys available on the current screen.
pub struct FooterBar<'a> {
    hints: &'a [KeyHint<'a>],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [KeyHint<'a>]) -> Self {
        Self {
            hints,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (key, description) in self.hints {
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
            spans.push(Span::styled(format!(" {description}"), self.style.description_style));
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);

        if let Some(info) = self.right_info {
            Paragraph::new(Line::from(Span::styled(info, self.style.right_style)).right_aligned())
                .render(area, buf);
        }
    }
}
