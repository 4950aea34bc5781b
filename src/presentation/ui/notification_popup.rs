//! Toast popup anchored to the top-right corner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Palette;

const MAX_WIDTH: u16 = 60;

pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    palette: &'a Palette,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub const fn new(notification: &'a Notification, palette: &'a Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }

    const fn title(level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => " Aviso ",
            NotificationLevel::Success => " Listo ",
            NotificationLevel::Danger => " Error ",
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Self::title(self.notification.level);
        let message = &self.notification.message;

        let message_width = u16::try_from(message.width()).unwrap_or(u16::MAX);
        let width = message_width
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(MAX_WIDTH.min(area.width.saturating_sub(2)));

        let inner_width = width.saturating_sub(2).max(1);
        let lines = message_width.div_ceil(inner_width).max(1);
        let height = lines.saturating_add(2).min(10);

        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(width).saturating_sub(2),
            area.y + 1,
            width,
            height,
        );

        let intersection = area.intersection(popup_area);
        if intersection.is_empty() {
            return;
        }

        let color = match self.notification.level {
            NotificationLevel::Info => self.palette.accent,
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Danger => Color::Red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(color));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}
