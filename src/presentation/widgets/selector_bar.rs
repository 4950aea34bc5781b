//! One-line bar of mutually exclusive choices.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::theme::Palette;

/// A selectable entry: key hint and caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<'a> {
    pub key: &'a str,
    pub text: &'a str,
}

impl<'a> Choice<'a> {
    #[must_use]
    pub const fn new(key: &'a str, text: &'a str) -> Self {
        Self { key, text }
    }
}

/// Heading on the left, choices on the right, optional trailing action.
pub struct SelectorBar<'a> {
    heading: &'a str,
    choices: Vec<Choice<'a>>,
    active: usize,
    action: Option<Choice<'a>>,
    palette: &'a Palette,
}

impl<'a> SelectorBar<'a> {
    #[must_use]
    pub fn new(
        heading: &'a str,
        choices: Vec<Choice<'a>>,
        active: usize,
        palette: &'a Palette,
    ) -> Self {
        Self {
            heading,
            choices,
            active,
            action: None,
            palette,
        }
    }

    /// Appends an action rendered as a link, e.g. `Salir`.
    #[must_use]
    pub const fn action(mut self, action: Choice<'a>) -> Self {
        self.action = Some(action);
        self
    }

    fn choices_line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.choices.len() * 3 + 3);

        for (index, choice) in self.choices.iter().enumerate() {
            let style = if index == self.active {
                self.palette.selection_style.add_modifier(Modifier::BOLD)
            } else {
                self.palette.base_style
            };
            spans.push(Span::styled(format!("[{}]", choice.key), self.palette.dimmed_style));
            spans.push(Span::styled(format!(" {} ", choice.text), style));
            spans.push(Span::raw(" "));
        }

        if let Some(action) = self.action {
            spans.push(Span::styled(format!("[{}]", action.key), self.palette.dimmed_style));
            spans.push(Span::styled(format!(" {}", action.text), self.palette.link_style));
        }

        Line::from(spans)
    }
}

impl Widget for SelectorBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let choices = self.choices_line();
        let choices_width = u16::try_from(choices.width()).unwrap_or(u16::MAX);

        let heading_width = u16::try_from(self.heading.width()).unwrap_or(0);

        let [heading_area, choices_area] = Layout::horizontal([
            Constraint::Min(heading_width),
            Constraint::Length(choices_width),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            self.heading,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(heading_area, buf);
        Paragraph::new(choices).render(choices_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading_choices_and_action() {
        let palette = Palette::default();
        let bar = SelectorBar::new(
            "Inglés",
            vec![Choice::new("1", "ES"), Choice::new("2", "EN"), Choice::new("3", "PR")],
            1,
            &palette,
        )
        .action(Choice::new("x", "Salir"));

        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.starts_with("Inglés"));
        assert!(line.contains("[2] EN"));
        assert!(line.trim_end().ends_with("Salir"));
    }

    #[test]
    fn test_active_choice_highlighted() {
        let palette = Palette::default();
        let bar = SelectorBar::new(
            "",
            vec![Choice::new("a", "Colores"), Choice::new("b", "Números")],
            1,
            &palette,
        );
        let line = bar.choices_line();

        assert_eq!(line.spans[4].style.bg, palette.selection_style.bg);
        assert_ne!(line.spans[1].style.bg, palette.selection_style.bg);
    }
}
