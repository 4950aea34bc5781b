//! Content browser: language bar, tile grid and theme bar.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::services::PlaybackSlot;
use crate::domain::entities::{ContentTile, Item, Language, Theme, catalog};
use crate::domain::ports::MediaPort;
use crate::presentation::theme::Palette;
use crate::presentation::widgets::{
    Choice, FooterBar, FooterBarStyle, KeyHint, SelectorBar, Spinner, SpinnerState, TileGrid,
    TileGridState,
};

const LANGUAGE_KEYS: [&str; 3] = ["1", "2", "3"];
const THEME_KEYS: [&str; 3] = ["c", "n", "a"];
const LOGOUT_KEY: char = 's';

const HINTS: [KeyHint<'static>; 4] = [
    ("←↑↓→", "Mover"),
    ("Enter", "Escuchar"),
    ("s", "Salir"),
    ("Esc", "Cerrar"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Logout,
    Quit,
}

/// The authenticated flow. Owns the selected language and theme and the
/// single playback slot.
pub struct HomeScreen {
    language: Language,
    theme: Theme,
    tiles: Vec<ContentTile>,
    grid: TileGridState,
    playback: PlaybackSlot,
    logging_out: bool,
    spinner: SpinnerState,
    greeting: String,
    palette: Palette,
}

impl HomeScreen {
    #[must_use]
    pub fn new(
        media: Arc<dyn MediaPort>,
        language: Language,
        display_name: &str,
        palette: Palette,
    ) -> Self {
        let theme = Theme::default();
        let tiles = catalog::tiles(theme, language);

        Self {
            language,
            theme,
            grid: TileGridState::new(tiles.len()),
            tiles,
            playback: PlaybackSlot::new(media),
            logging_out: false,
            spinner: SpinnerState::default(),
            greeting: format!("Hola, {display_name}"),
            palette,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn tiles(&self) -> &[ContentTile] {
        &self.tiles
    }

    #[must_use]
    pub fn selected_tile(&self) -> Option<&ContentTile> {
        self.tiles.get(self.grid.selected())
    }

    #[must_use]
    pub const fn is_logging_out(&self) -> bool {
        self.logging_out
    }

    /// True while the spinner turns or a clip may still finish.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.logging_out || self.playback.is_playing()
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!(from = %self.language, to = %language, "Language changed");
            self.language = language;
            self.tiles = catalog::tiles(self.theme, language);
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            debug!(theme = theme.code(), "Theme changed");
            self.theme = theme;
            self.tiles = catalog::tiles(theme, self.language);
            self.grid = TileGridState::new(self.tiles.len());
        }
    }

    /// Plays the highlighted tile, replacing whatever was playing.
    pub fn play_selected(&mut self) {
        if let Some(tile) = self.tiles.get(self.grid.selected()) {
            self.playback.play(&tile.sound);
        }
    }

    /// Enters the pending-logout state: audio stops and input is ignored.
    pub fn begin_logout(&mut self) {
        self.logging_out = true;
        self.playback.release();
    }

    pub fn tick(&mut self) {
        if self.logging_out {
            self.spinner.advance();
        }
        self.playback.poll();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if self.logging_out {
            return HomeAction::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return HomeAction::Quit,
            KeyCode::Char(LOGOUT_KEY) => {
                self.begin_logout();
                return HomeAction::Logout;
            }
            KeyCode::Left | KeyCode::Char('h') => self.grid.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.grid.move_right(),
            KeyCode::Up | KeyCode::Char('k') => self.grid.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.grid.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_selected(),
            KeyCode::Tab => {
                let next = Theme::ALL
                    .iter()
                    .position(|t| *t == self.theme)
                    .map_or(0, |i| (i + 1) % Theme::ALL.len());
                self.set_theme(Theme::ALL[next]);
            }
            KeyCode::Char(c) => {
                if let Some(language) = key_index(&LANGUAGE_KEYS, c).map(|i| Language::ALL[i]) {
                    self.set_language(language);
                } else if let Some(theme) = key_index(&THEME_KEYS, c).map(|i| Theme::ALL[i]) {
                    self.set_theme(theme);
                }
            }
            _ => {}
        }

        HomeAction::None
    }

    fn playing_item(&self) -> Option<Item> {
        let sound = self.playback.current_sound()?;
        self.tiles
            .iter()
            .find(|tile| &tile.sound == sound)
            .map(|tile| tile.item)
    }
}

fn key_index(keys: &[&str], c: char) -> Option<usize> {
    keys.iter().position(|k| k.starts_with(c))
}

impl Widget for &mut HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.logging_out {
            Spinner::new(self.spinner, "Cerrando sesión…")
                .style(self.palette.accent_style())
                .render(area, buf);
            return;
        }

        let [language_area, grid_area, theme_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let language_choices = Language::ALL
            .iter()
            .zip(LANGUAGE_KEYS)
            .map(|(language, key)| Choice::new(key, language.flag()))
            .collect();
        let active_language = Language::ALL
            .iter()
            .position(|l| *l == self.language)
            .unwrap_or(0);
        SelectorBar::new(
            self.language.display_name(),
            language_choices,
            active_language,
            &self.palette,
        )
        .action(Choice::new("s", "Salir"))
        .render(language_area, buf);

        let grid_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(self.palette.dimmed_style);
        let grid_inner = grid_block.inner(grid_area);
        grid_block.render(grid_area, buf);

        let playing = self.playing_item();
        TileGrid::new(&self.tiles, &self.palette)
            .playing(playing)
            .render(grid_inner, buf, &mut self.grid);

        let theme_choices = Theme::ALL
            .iter()
            .zip(THEME_KEYS)
            .map(|(theme, key)| Choice::new(key, theme.title()))
            .collect();
        let active_theme = Theme::ALL
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        SelectorBar::new("Temas", theme_choices, active_theme, &self.palette)
            .render(theme_area, buf);

        FooterBar::new(&HINTS)
            .style(FooterBarStyle::from_palette(&self.palette))
            .right_info(Some(&self.greeting))
            .render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockMediaPort;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn home(media: &Arc<MockMediaPort>) -> HomeScreen {
        HomeScreen::new(
            Arc::clone(media) as Arc<dyn MediaPort>,
            Language::Es,
            "admin",
            Palette::default(),
        )
    }

    fn labels(screen: &HomeScreen) -> Vec<&'static str> {
        screen.tiles().iter().map(|t| t.label).collect()
    }

    #[test]
    fn test_mounts_with_defaults() {
        let media = Arc::new(MockMediaPort::new());
        let screen = home(&media);

        assert_eq!(screen.language(), Language::Es);
        assert_eq!(screen.theme(), Theme::Colors);
        assert_eq!(labels(&screen), vec!["Rojo", "Azul", "Verde", "Rosa"]);
    }

    #[test]
    fn test_numbers_in_english() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);

        screen.handle_key(key(KeyCode::Char('n')));
        screen.handle_key(key(KeyCode::Char('2')));

        assert_eq!(screen.theme(), Theme::Numbers);
        assert_eq!(screen.language(), Language::En);
        assert_eq!(labels(&screen), vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_language_change_keeps_cursor() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);

        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Char('3')));

        assert_eq!(screen.selected_tile().map(|t| t.label), Some("Verde"));
        assert_eq!(screen.language(), Language::Pr);
    }

    #[test]
    fn test_tab_cycles_themes() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);

        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.theme(), Theme::Animals);
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.theme(), Theme::Colors);
    }

    #[test]
    fn test_select_plays_localized_sound() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);

        screen.handle_key(key(KeyCode::Char('a')));
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Enter));

        assert_eq!(media.loaded(), vec![Item::Cat.sound(Language::Es)]);
        assert_eq!(screen.playing_item(), Some(Item::Cat));
    }

    #[test]
    fn test_new_selection_releases_previous_first() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);

        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Char(' ')));
        screen.handle_key(key(KeyCode::Enter));

        assert_eq!(media.loaded().len(), 3);
        assert_eq!(media.max_live_at_acquire(), 0);
        assert_eq!(media.live_handles(), 1);
    }

    #[test]
    fn test_animates_only_while_playing_or_logging_out() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);
        assert!(!screen.is_animating());

        screen.handle_key(key(KeyCode::Enter));
        assert!(screen.is_animating());

        screen.begin_logout();
        assert!(screen.is_animating());
    }

    #[test]
    fn test_audio_failure_is_silent() {
        let media = Arc::new(MockMediaPort::new());
        media.set_failing(true);
        let mut screen = home(&media);

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), HomeAction::None);
        assert_eq!(screen.playing_item(), None);
    }

    #[test]
    fn test_logout_stops_audio_and_ignores_input() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);
        screen.handle_key(key(KeyCode::Enter));

        assert_eq!(screen.handle_key(key(KeyCode::Char('s'))), HomeAction::Logout);
        assert!(screen.is_logging_out());
        assert_eq!(media.live_handles(), 0);

        assert_eq!(screen.handle_key(key(KeyCode::Char('2'))), HomeAction::None);
        assert_eq!(screen.language(), Language::Es);
    }

    #[test]
    fn test_render_shows_language_name_and_tiles() {
        let media = Arc::new(MockMediaPort::new());
        let mut screen = home(&media);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        (&mut screen).render(area, &mut buf);

        let text: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(text.contains("Español"));
        assert!(text.contains("Salir"));
        assert!(text.contains("Rojo"));
        assert!(text.contains("Números"));
    }
}
