//! Login / registration form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use tracing::debug;

use crate::application::dto::{AuthMode, AuthRequest};
use crate::application::services::FieldErrors;
use crate::application::services::form_validation::{email_message, password_message};
use crate::domain::entities::{Credentials, DEMO_ACCOUNTS, DemoAccount};
use crate::presentation::theme::Palette;
use crate::presentation::widgets::{
    BLOCK_COLORS, BlockHeader, FooterBar, FooterBarStyle, GameBlock, KeyHint, TextInput,
};

const FORM_WIDTH: u16 = 52;

const DEMO_KEYS: [&str; 5] = ["F1", "F2", "F3", "F4", "F5"];

const HINTS: [KeyHint<'static>; 5] = [
    ("Tab", "Siguiente"),
    ("Enter", "Enviar"),
    ("Ctrl+R", "Cambiar modo"),
    ("Ctrl+E", "Ver contraseña"),
    ("Esc", "Salir"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Input,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    None,
    Submit(AuthRequest),
    Quit,
}

/// The unauthenticated flow: one form toggled between login and register.
pub struct AuthScreen {
    mode: AuthMode,
    state: AuthState,
    focus: AuthField,
    email_input: TextInput,
    password_input: TextInput,
    email_touched: bool,
    password_touched: bool,
    show_demo_accounts: bool,
    palette: Palette,
}

impl AuthScreen {
    #[must_use]
    pub fn new(palette: Palette, show_demo_accounts: bool) -> Self {
        let email_input = TextInput::new(" Correo electrónico ")
            .placeholder("Correo electrónico")
            .accent(palette.accent);
        let password_input = TextInput::new(" Contraseña ")
            .password()
            .placeholder("Contraseña")
            .accent(palette.accent);

        let mut screen = Self {
            mode: AuthMode::Login,
            state: AuthState::Input,
            focus: AuthField::Email,
            email_input,
            password_input,
            email_touched: false,
            password_touched: false,
            show_demo_accounts,
            palette,
        };
        screen.sync_focus();
        screen
    }

    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub const fn state(&self) -> AuthState {
        self.state
    }

    #[must_use]
    pub const fn focus(&self) -> AuthField {
        self.focus
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email_input.value()
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.password_input.value()
    }

    /// Validation result for the current values, touched or not.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        FieldErrors::check(self.email(), self.password())
    }

    /// Errors as displayed: only touched fields report.
    #[must_use]
    pub fn visible_errors(&self) -> FieldErrors {
        let errors = self.errors();
        FieldErrors {
            email: errors.email.filter(|_| self.email_touched),
            password: errors.password.filter(|_| self.password_touched),
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == AuthState::Input && self.errors().is_valid()
    }

    #[must_use]
    pub fn is_password_visible(&self) -> bool {
        !self.password_input.is_masked()
    }

    /// Returns the form to input state after a rejected attempt. Mode and values are kept.
    pub fn set_failed(&mut self) {
        self.state = AuthState::Input;
    }

    /// Flips login/register and starts over with an empty, untouched form.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.state = AuthState::Input;
        self.email_input.clear();
        self.password_input.clear();
        self.email_touched = false;
        self.password_touched = false;
        self.focus = AuthField::Email;
        self.sync_focus();
        debug!(mode = %self.mode, "Auth mode toggled");
    }

    /// Fills the form with a demo account and submits it in login mode.
    pub fn sign_in_as(&mut self, account: &DemoAccount) -> AuthAction {
        if self.state == AuthState::Submitting {
            return AuthAction::None;
        }
        if self.mode != AuthMode::Login {
            self.toggle_mode();
        }

        self.email_input.set_value(account.email);
        self.password_input.set_value(account.password);
        self.try_submit()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AuthAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') if self.state == AuthState::Input => self.toggle_mode(),
                KeyCode::Char('e') => self.password_input.toggle_masked(),
                _ => {}
            }
            self.sync_errors();
            return AuthAction::None;
        }

        if key.code == KeyCode::Esc {
            return AuthAction::Quit;
        }

        if self.state == AuthState::Submitting {
            return AuthAction::None;
        }

        let action = match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.move_focus();
                AuthAction::None
            }
            KeyCode::Enter => match self.focus {
                AuthField::Email => {
                    self.move_focus();
                    AuthAction::None
                }
                AuthField::Password => self.try_submit(),
            },
            KeyCode::F(n) if self.show_demo_accounts => usize::from(n)
                .checked_sub(1)
                .and_then(|index| DEMO_ACCOUNTS.get(index))
                .map_or(AuthAction::None, |account| self.sign_in_as(account)),
            code => {
                self.edit_focused(code);
                AuthAction::None
            }
        };

        self.sync_errors();
        action
    }

    fn edit_focused(&mut self, code: KeyCode) {
        let input = self.focused_input_mut();
        match code {
            KeyCode::Char(c) => input.input_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    fn try_submit(&mut self) -> AuthAction {
        self.email_touched = true;
        self.password_touched = true;
        self.sync_errors();

        if !self.can_submit() {
            debug!(mode = %self.mode, "Submit blocked by validation");
            return AuthAction::None;
        }

        self.state = AuthState::Submitting;
        let credentials = Credentials::new(self.email(), self.password());
        AuthAction::Submit(AuthRequest::new(self.mode, credentials))
    }

    fn move_focus(&mut self) {
        match self.focus {
            AuthField::Email => {
                self.email_touched = true;
                self.focus = AuthField::Password;
            }
            AuthField::Password => {
                self.password_touched = true;
                self.focus = AuthField::Email;
            }
        }
        self.sync_focus();
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            AuthField::Email => &mut self.email_input,
            AuthField::Password => &mut self.password_input,
        }
    }

    fn sync_focus(&mut self) {
        self.email_input.set_focused(self.focus == AuthField::Email);
        self.password_input
            .set_focused(self.focus == AuthField::Password);
    }

    fn sync_errors(&mut self) {
        let visible = self.visible_errors();
        self.email_input.set_error(visible.email.map(email_message));
        self.password_input
            .set_error(visible.password.map(password_message));
    }

    fn submit_line(&self) -> Line<'static> {
        let (text, style) = match self.state {
            AuthState::Submitting => (
                format!("⠿ {}…", self.mode.submit_label()),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::ITALIC),
            ),
            AuthState::Input if self.can_submit() => (
                format!("[ {} ]", self.mode.submit_label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            AuthState::Input => (
                format!("[ {} ]", self.mode.submit_label()),
                self.palette.dimmed_style,
            ),
        };
        Line::from(Span::styled(text, style)).centered()
    }

    fn switch_line(&self) -> Line<'static> {
        let (prompt, link) = self.mode.switch_prompt();
        Line::from(vec![
            Span::styled(prompt, self.palette.dimmed_style),
            Span::raw(" "),
            Span::styled(link, self.palette.link_style),
            Span::styled(" (Ctrl+R)", self.palette.dimmed_style),
        ])
        .centered()
    }

    fn render_demo_accounts(&self, area: Rect, buf: &mut Buffer) {
        let [caption_area, blocks_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(GameBlock::HEIGHT)])
                .areas(area);

        Paragraph::new(
            Line::from(Span::styled(
                "── inicia sesión como ──",
                self.palette.dimmed_style,
            ))
            .centered(),
        )
        .render(caption_area, buf);

        let captions: Vec<String> = DEMO_ACCOUNTS
            .iter()
            .zip(DEMO_KEYS)
            .map(|(account, key)| format!("{key} {}", account.name))
            .collect();

        let blocks: Vec<GameBlock> = captions
            .iter()
            .enumerate()
            .map(|(i, caption)| GameBlock::new(caption, BLOCK_COLORS[i % BLOCK_COLORS.len()]))
            .collect();

        let cells = Layout::horizontal(blocks.iter().map(|b| Constraint::Length(b.width())))
            .flex(Flex::Center)
            .spacing(1)
            .split(blocks_area);

        for (block, cell) in blocks.into_iter().zip(cells.iter()) {
            block.render(*cell, buf);
        }
    }
}

impl Widget for &AuthScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [main_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let demo_height = if self.show_demo_accounts {
            1 + GameBlock::HEIGHT
        } else {
            0
        };

        let [content_area] = Layout::vertical([Constraint::Length(15 + demo_height)])
            .flex(Flex::Center)
            .areas(main_area);
        let [form_area, demo_area] =
            Layout::vertical([Constraint::Length(15), Constraint::Length(demo_height)])
                .areas(content_area);
        let [form_area] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(form_area);

        Clear.render(form_area, buf);

        let [header, _, email, _, password, _, submit, _, switch, _] = Layout::vertical([
            Constraint::Length(GameBlock::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(form_area);

        BlockHeader::new(self.mode.header()).render(header, buf);
        (&self.email_input).render(email, buf);
        (&self.password_input).render(password, buf);
        Paragraph::new(self.submit_line()).render(submit, buf);
        Paragraph::new(self.switch_line()).render(switch, buf);

        if self.show_demo_accounts {
            self.render_demo_accounts(demo_area, buf);
        }

        FooterBar::new(&HINTS)
            .style(FooterBarStyle::from_palette(&self.palette))
            .render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(screen: &mut AuthScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill(screen: &mut AuthScreen, email: &str, password: &str) {
        type_str(screen, email);
        screen.handle_key(key(KeyCode::Tab));
        type_str(screen, password);
    }

    fn screen() -> AuthScreen {
        AuthScreen::new(Palette::default(), true)
    }

    #[test]
    fn test_initial_state() {
        let screen = screen();
        assert_eq!(screen.mode(), AuthMode::Login);
        assert_eq!(screen.state(), AuthState::Input);
        assert_eq!(screen.focus(), AuthField::Email);
        assert!(!screen.can_submit());
        assert_eq!(screen.visible_errors(), FieldErrors::default());
    }

    #[test]
    fn test_bad_input_shows_errors_and_blocks_submit() {
        let mut screen = screen();
        fill(&mut screen, "bad-email", "123");

        let action = screen.handle_key(key(KeyCode::Enter));

        assert_eq!(action, AuthAction::None);
        assert!(!screen.can_submit());
        assert_eq!(screen.state(), AuthState::Input);
        let errors = screen.visible_errors();
        assert_eq!(errors.email, Some(ValidationError::Format));
        assert_eq!(errors.password, Some(ValidationError::TooShort { min: 6 }));
        assert_eq!(screen.email_input.error(), Some("Correo electrónico inválido"));
        assert_eq!(
            screen.password_input.error(),
            Some("La contraseña debe tener al menos 6 dígitos")
        );
    }

    #[test]
    fn test_untouched_field_hides_error() {
        let mut screen = screen();
        type_str(&mut screen, "bad");

        assert_eq!(screen.visible_errors().email, None);

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.visible_errors().email, Some(ValidationError::Format));
        assert_eq!(screen.visible_errors().password, None);
    }

    #[test]
    fn test_valid_login_submits_exact_values() {
        let mut screen = screen();
        fill(&mut screen, "admin@admin.com", "111111");

        let action = screen.handle_key(key(KeyCode::Enter));

        let AuthAction::Submit(request) = action else {
            panic!("expected submit, got {action:?}");
        };
        assert_eq!(request.mode, AuthMode::Login);
        assert_eq!(request.credentials.email(), "admin@admin.com");
        assert_eq!(request.credentials.password(), "111111");
        assert_eq!(screen.state(), AuthState::Submitting);
    }

    #[test]
    fn test_no_double_submit_while_in_flight() {
        let mut screen = screen();
        fill(&mut screen, "admin@admin.com", "111111");
        screen.handle_key(key(KeyCode::Enter));

        assert!(!screen.can_submit());
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), AuthAction::None);
    }

    #[test]
    fn test_failure_returns_to_input_keeping_mode() {
        let mut screen = screen();
        screen.handle_key(ctrl('r'));
        fill(&mut screen, "nuevo@correo.com", "abcdef");
        screen.handle_key(key(KeyCode::Enter));

        screen.set_failed();

        assert_eq!(screen.state(), AuthState::Input);
        assert_eq!(screen.mode(), AuthMode::Register);
        assert!(screen.can_submit());
    }

    #[test]
    fn test_toggle_clears_values_and_errors() {
        let mut screen = screen();
        fill(&mut screen, "bad-email", "123");
        screen.handle_key(key(KeyCode::Enter));

        screen.handle_key(ctrl('r'));

        assert_eq!(screen.mode(), AuthMode::Register);
        assert!(screen.email().is_empty());
        assert!(screen.password().is_empty());
        assert_eq!(screen.visible_errors(), FieldErrors::default());
        assert_eq!(screen.email_input.error(), None);
        assert_eq!(screen.password_input.error(), None);
        assert_eq!(screen.focus(), AuthField::Email);
    }

    #[test]
    fn test_register_mode_submits_register() {
        let mut screen = screen();
        screen.handle_key(ctrl('r'));
        fill(&mut screen, "nuevo@correo.com", "abcdef");

        let AuthAction::Submit(request) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected submit");
        };
        assert_eq!(request.mode, AuthMode::Register);
    }

    #[test]
    fn test_demo_account_signs_in_from_register_mode() {
        let mut screen = screen();
        screen.handle_key(ctrl('r'));

        let AuthAction::Submit(request) = screen.handle_key(key(KeyCode::F(2))) else {
            panic!("expected submit");
        };
        assert_eq!(request.mode, AuthMode::Login);
        assert_eq!(request.credentials.email(), "invitado@invitado.com");
        assert_eq!(request.credentials.password(), "222222");
    }

    #[test]
    fn test_demo_accounts_disabled() {
        let mut screen = AuthScreen::new(Palette::default(), false);
        assert_eq!(screen.handle_key(key(KeyCode::F(1))), AuthAction::None);
        assert!(screen.email().is_empty());
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut screen = screen();
        assert!(!screen.is_password_visible());
        screen.handle_key(ctrl('e'));
        assert!(screen.is_password_visible());
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), AuthAction::Quit);
    }

    #[test]
    fn test_render_header_and_labels() {
        let screen = screen();
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);

        let text: String = buf.content().iter().map(ratatui::buffer::Cell::symbol).collect();
        assert!(text.contains("Iniciar sesión"));
        assert!(text.contains("¿No tienes cuenta?"));
        assert!(text.contains("F1 Admin"));
    }
}
