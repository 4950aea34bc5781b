//! Startup splash: logo fades in, holds, then dissolves.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::presentation::widgets::BLOCK_COLORS;

const LOGO_TEXT: &str = "
██      ██ ███    ██  ██████   ██████  ████████ ██ ██      ███████ ███████
██      ██ ████   ██ ██       ██    ██    ██    ██ ██      ██      ██
██      ██ ██ ██  ██ ██   ███ ██    ██    ██    ██ ██      █████   ███████
██      ██ ██  ██ ██ ██    ██ ██    ██    ██    ██ ██      ██           ██
███████ ██ ██   ████  ██████   ██████     ██    ██ ███████ ███████ ███████";

const TAGLINE: &str = "Colores · Números · Animales";

/// Time the logo stays fully visible between fade-in and fade-out.
pub const HOLD_DURATION: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Intro,
    Hold(Duration),
    Outro,
    Done,
}

pub struct SplashScreen {
    intro_effect: Effect,
    outro_effect: Effect,
    phase: Phase,
    pending_duration: Duration,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            intro_effect: fx::coalesce((800, Interpolation::CircOut)),
            outro_effect: fx::dissolve((600, Interpolation::CircIn)),
            phase: Phase::Intro,
            pending_duration: Duration::ZERO,
        }
    }

    /// Accumulates elapsed time; effects consume it on the next render.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);

        if let Phase::Hold(remaining) = self.phase {
            let remaining = remaining.saturating_sub(duration);
            if remaining.is_zero() {
                self.phase = Phase::Outro;
            } else {
                self.phase = Phase::Hold(remaining);
            }
        }
    }

    /// Jumps to the end of the sequence.
    pub fn skip(&mut self) {
        self.phase = Phase::Done;
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Done
    }

    fn logo() -> Text<'static> {
        let mut lines: Vec<Line> = LOGO_TEXT
            .trim_matches('\n')
            .lines()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::White))))
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(
            TAGLINE
                .split(" · ")
                .enumerate()
                .flat_map(|(i, word)| {
                    let separator = if i == 0 { "" } else { " · " };
                    [
                        Span::raw(separator),
                        Span::styled(
                            word,
                            Style::default()
                                .fg(BLOCK_COLORS[i % BLOCK_COLORS.len()])
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]
                })
                .collect::<Vec<_>>(),
        ));

        Text::from(lines).centered()
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = SplashScreen::logo();

        let text_width = u16::try_from(text.width()).unwrap_or(0);
        let text_height = u16::try_from(text.height()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        match self.phase {
            Phase::Intro => {
                if self
                    .intro_effect
                    .process(duration.into(), buf, center_area)
                    .is_some()
                {
                    self.phase = Phase::Hold(HOLD_DURATION);
                }
            }
            Phase::Outro => {
                if self
                    .outro_effect
                    .process(duration.into(), buf, center_area)
                    .is_some()
                {
                    self.phase = Phase::Done;
                }
            }
            Phase::Hold(_) | Phase::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_moves_to_outro_once_elapsed() {
        let mut splash = SplashScreen::new();
        splash.phase = Phase::Hold(HOLD_DURATION);

        splash.tick(HOLD_DURATION / 2);
        assert_eq!(splash.phase, Phase::Hold(HOLD_DURATION / 2));

        splash.tick(HOLD_DURATION / 2);
        assert_eq!(splash.phase, Phase::Outro);
    }

    #[test]
    fn test_skip_completes() {
        let mut splash = SplashScreen::new();
        splash.skip();
        assert!(splash.is_complete());
    }

    #[test]
    fn test_full_sequence_completes() {
        let mut splash = SplashScreen::new();
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);

        for _ in 0..200 {
            splash.tick(Duration::from_millis(33));
            (&mut splash).render(area, &mut buf);
            if splash.is_complete() {
                break;
            }
        }

        assert!(splash.is_complete());
    }
}
